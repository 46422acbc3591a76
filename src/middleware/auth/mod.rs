//! Bearer authentication against the remote identity service.
//!
//! - `token`: pulls the bearer token out of the `Authorization` header or the `token` cookie
//! - `identity`: verifies it remotely and attaches
//!   [`Identity`](crate::services::identity::Identity) to the request, or ends the request
//!   with an [`AuthError`](crate::error::AuthError)

pub mod identity;
pub mod token;

pub use identity::{apply, authenticate};
pub use token::{TOKEN_COOKIE, extract_token};
