/*
 * Responsibility
 * - Router / auth middleware に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 * - request をまたいで共有する可変状態は持たない
 */
use std::sync::Arc;

use crate::services::identity::IdentityVerifier;

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityVerifier>,
}

impl AppState {
    pub fn new(identity: Arc<dyn IdentityVerifier>) -> Self {
        Self { identity }
    }
}
