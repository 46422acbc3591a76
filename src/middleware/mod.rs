/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: bearer token → identity service → Identity を extensions に入れる
 * - http: request-id / access log
 */
pub mod auth;
pub mod http;
