/*
 * Responsibility
 * - 外部サービスとのやり取り (identity service)
 */
pub mod identity;
