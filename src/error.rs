/*
 * Responsibility
 * - Authentication failure type (AuthError): one variant per failure class
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - Classification happens once (services/identity); this module only maps it to a response
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// JSON body emitted for every failed authentication.
///
/// `meta` is omitted entirely when there is no underlying diagnostic.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ErrorMeta>,
}

#[derive(Debug, Serialize)]
pub struct ErrorMeta {
    pub message: String,
}

/// Why a request could not be authenticated.
///
/// Produced at most once per request and always terminal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No usable bearer token on the request.
    #[error("missing or invalid authorization")]
    InvalidAuthHeader,

    /// The identity service answered 401.
    #[error("authentication rejected by remote service")]
    Unauthorized { message: String },

    /// The identity service answered with some other non-2xx status.
    #[error("unexpected status {status} when authenticating against remote service")]
    UnknownStatus { status: u16, message: String },

    /// The request went out but nothing came back (timeout, connection failure).
    #[error("remote service did not respond")]
    NoResponse { message: String },

    /// The request could not be built or sent at all.
    #[error("could not set up a request to remote service")]
    FailedRequest { message: String },

    #[error("something went wrong when authenticating against remote service")]
    Unexpected { message: String },
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::InvalidAuthHeader | AuthError::Unauthorized { .. } => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::UnknownStatus { .. }
            | AuthError::NoResponse { .. }
            | AuthError::FailedRequest { .. }
            | AuthError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Symbolic code carried in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidAuthHeader => "invalid_auth_header",
            AuthError::Unauthorized { .. } => "unauthorized",
            AuthError::UnknownStatus { .. } => "unknown_error",
            AuthError::NoResponse { .. } => "no_response",
            AuthError::FailedRequest { .. } => "failed_request",
            AuthError::Unexpected { .. } => "unexpected_error",
        }
    }

    /// Underlying diagnostic text, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            AuthError::InvalidAuthHeader => None,
            AuthError::Unauthorized { message }
            | AuthError::UnknownStatus { message, .. }
            | AuthError::NoResponse { message }
            | AuthError::FailedRequest { message }
            | AuthError::Unexpected { message } => Some(message),
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code(),
            detail: self.to_string(),
            meta: self.message().map(|m| ErrorMeta {
                message: m.to_string(),
            }),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
