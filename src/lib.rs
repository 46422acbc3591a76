//! Bearer-token authentication middleware for axum.
//!
//! The token comes from `Authorization: Bearer <token>` or, when that header is absent,
//! the `token` cookie. It is sent once to a remote identity service (`GET /me`), and the
//! resolved [`Identity`] is attached to the request for downstream handlers. Any failure
//! ends the request with a JSON [`AuthError`] body.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

pub use config::{Config, IdentityConfig};
pub use error::AuthError;
pub use services::identity::{Identity, IdentityClient, IdentityVerifier};
pub use state::AppState;
