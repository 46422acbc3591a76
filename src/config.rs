/*
 * Responsibility
 * - 環境変数の読み込み (PORT, APP_ENV, identity service endpoint)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_IDENTITY_ME_URL: &str = "https://kodim.cz/api/me";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Where and how to reach the identity service.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub me_url: Url,
    // None keeps the HTTP client's default (no timeout).
    pub timeout: Option<Duration>,
}

impl IdentityConfig {
    pub fn new(me_url: Url) -> Self {
        Self {
            me_url,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub identity: IdentityConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port = parse_port(std::env::var("PORT").ok())?;
        let addr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let me_url = parse_me_url(std::env::var("IDENTITY_ME_URL").ok())?;
        let mut identity = IdentityConfig::new(me_url);
        if let Some(timeout) = parse_timeout(std::env::var("IDENTITY_TIMEOUT_SECONDS").ok())? {
            identity = identity.with_timeout(timeout);
        }

        Ok(Self {
            addr,
            app_env,
            identity,
        })
    }
}

fn parse_port(raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT")),
        None => Ok(3000),
    }
}

fn parse_me_url(raw: Option<String>) -> Result<Url, ConfigError> {
    let raw = raw.unwrap_or_else(|| DEFAULT_IDENTITY_ME_URL.to_string());
    Url::parse(&raw).map_err(|_| ConfigError::Invalid("IDENTITY_ME_URL"))
}

// Unset means no timeout of our own.
fn parse_timeout(raw: Option<String>) -> Result<Option<Duration>, ConfigError> {
    raw.map(|raw| {
        raw.parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::Invalid("IDENTITY_TIMEOUT_SECONDS"))
    })
    .transpose()
}
