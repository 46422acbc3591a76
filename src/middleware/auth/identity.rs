//! bearer token 検証 → Identity を extensions に入れる
//!
//! - token が無ければ identity service は呼ばずに `401 invalid_auth_header`
//! - token があれば identity service に一回だけ問い合わせる (retry なし)
//! - 成功時は `Identity` を request extensions に入れて次へ、失敗時は AuthError をそのまま返す

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::error::AuthError;
use crate::state::AppState;

use super::token::extract_token;

/// Require authentication on every route registered on `router` so far.
///
/// Uses `route_layer`, so unmatched paths still fall through to a plain 404.
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/me", get(me));
/// let protected = middleware::auth::apply(protected, state.clone());
/// ```
pub fn apply<S>(router: Router<S>, state: AppState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(state, authenticate))
}

pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    // cookie parser の代わり: Cookie ヘッダをここで読む
    let jar = CookieJar::from_headers(req.headers());

    let Some(token) = extract_token(req.headers(), &jar) else {
        let err = AuthError::InvalidAuthHeader;
        tracing::warn!(code = err.code(), "no usable bearer token");
        return Err(err);
    };

    let identity = match state.identity.verify(&token).await {
        Ok(identity) => identity,
        Err(err) => {
            tracing::warn!(
                code = err.code(),
                error = %err,
                cause = err.message().unwrap_or_default(),
                "identity verification failed"
            );
            return Err(err);
        }
    };

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
