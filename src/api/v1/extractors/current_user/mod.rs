/*!
 * Authenticated identity extractor
 *
 * Responsibility:
 * - auth middleware が extensions に入れた Identity を handler に渡す
 * - middleware が掛かっていない route では 401 で拒否する
 */

mod core;

pub use self::core::CurrentUser;
