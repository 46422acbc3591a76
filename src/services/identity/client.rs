//! Remote identity verification over HTTP.
use std::error::Error as StdError;

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use crate::config::IdentityConfig;
use crate::error::AuthError;

use super::Identity;

/// Resolves a bearer token into an [`Identity`].
///
/// Implementations must not retry and must not keep state between calls:
/// the same token against an unchanged backend always yields the same outcome.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Identity, AuthError>;
}

/// reqwest-backed verifier calling the identity service's `/me` endpoint.
#[derive(Clone, Debug)]
pub struct IdentityClient {
    http: reqwest::Client,
    me_url: Url,
}

impl IdentityClient {
    pub fn new(config: &IdentityConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            me_url: config.me_url.clone(),
        })
    }
}

#[async_trait]
impl IdentityVerifier for IdentityClient {
    async fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let resp = self
            .http
            .get(self.me_url.clone())
            .bearer_auth(token)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = resp.status();
        if !status.is_success() {
            // error_for_status only covers 4xx/5xx; anything else non-2xx gets a plain message.
            let message = match resp.error_for_status_ref() {
                Err(err) => describe(&err),
                Ok(_) => format!("HTTP status {} for url ({})", status, resp.url()),
            };

            return Err(if status == StatusCode::UNAUTHORIZED {
                AuthError::Unauthorized { message }
            } else {
                AuthError::UnknownStatus {
                    status: status.as_u16(),
                    message,
                }
            });
        }

        let identity = resp.json::<Identity>().await.map_err(|err| {
            if err.is_timeout() {
                AuthError::NoResponse {
                    message: describe(&err),
                }
            } else {
                AuthError::Unexpected {
                    message: describe(&err),
                }
            }
        })?;

        tracing::debug!(email = %identity.email, "identity verified");
        Ok(identity)
    }
}

/// Buckets a failed `send()` by how far the request got.
fn classify_send_error(err: reqwest::Error) -> AuthError {
    let message = describe(&err);

    if err.is_builder() {
        AuthError::FailedRequest { message }
    } else if err.is_timeout() || err.is_connect() || err.is_request() {
        AuthError::NoResponse { message }
    } else {
        AuthError::Unexpected { message }
    }
}

// reqwest's Display hides the cause ("builder error"), so append the source chain.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
