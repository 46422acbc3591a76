/*!
 * Identity service access
 *
 * Responsibility:
 * - IdentityVerifier: token → Identity の契約 (trait)
 * - IdentityClient: reqwest で `GET /me` を一回だけ呼び、結果を AuthError に分類する
 *
 * Public API:
 * - Identity
 * - IdentityVerifier
 * - IdentityClient
 */

mod client;
mod types;

pub use client::{IdentityClient, IdentityVerifier};
pub use types::Identity;
