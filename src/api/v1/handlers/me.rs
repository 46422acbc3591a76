/*
 * Responsibility
 * - GET /me (auth 必須): middleware が解決した Identity をそのまま返す
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::CurrentUser;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub status: &'static str,
    pub email: String,
}

pub async fn me(CurrentUser(identity): CurrentUser) -> Json<MeResponse> {
    Json(MeResponse {
        status: "ok",
        email: identity.email,
    })
}
