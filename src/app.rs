/*
 * Responsibility
 * - tracing 初期化
 * - Config読み込み → 依存生成 (IdentityClient) → Router 組み立て
 * - Middleware の適用 (request-id / trace, auth は routes 側)
 * - axum::serve() で起動
 */
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, middleware, services::identity::IdentityClient, state::AppState};

fn init_tracing() {
    // Prefer RUST_LOG if set.
    // Ex:
    // RUST_LOG=info,bearer_identity=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    tracing::info!(
        "starting in {:?} mode on {}, identity endpoint {}",
        config.app_env,
        config.addr,
        config.identity.me_url
    );

    let state = build_state(&config)?;
    let app = middleware::http::apply(build_router(state));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_state(config: &Config) -> Result<AppState> {
    let client =
        IdentityClient::new(&config.identity).context("failed to build identity HTTP client")?;

    Ok(AppState::new(Arc::new(client)))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api::v1::routes(state.clone()))
        .with_state(state)
}
