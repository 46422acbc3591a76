//! Bearer token extraction.
//!
//! The cookie is only consulted when there is no `Authorization` header at all.
//! A present but malformed header yields no token; it never falls back to the cookie.

use axum::http::{HeaderMap, header};
use axum_extra::extract::cookie::CookieJar;

pub const TOKEN_COOKIE: &str = "token";

const BEARER_SCHEME: &str = "Bearer";

/// Returns the bearer token carried by the request, if any.
///
/// Empty tokens (`Bearer ` or `token=`) count as missing.
pub fn extract_token(headers: &HeaderMap, cookies: &CookieJar) -> Option<String> {
    let Some(auth) = headers.get(header::AUTHORIZATION) else {
        return cookies
            .get(TOKEN_COOKIE)
            .map(|c| c.value())
            .filter(|v| !v.is_empty())
            .map(str::to_string);
    };

    // opaque (non-visible-ASCII) header bytes are just another malformed header
    let auth = auth.to_str().ok()?;

    let parts: Vec<&str> = auth.split(' ').collect();
    match parts.as_slice() {
        [scheme, token] if *scheme == BEARER_SCHEME && !token.is_empty() => {
            Some((*token).to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn request_parts(authorization: Option<&str>, cookie: Option<&str>) -> (HeaderMap, CookieJar) {
        let mut headers = HeaderMap::new();
        if let Some(v) = authorization {
            headers.insert(header::AUTHORIZATION, HeaderValue::from_str(v).unwrap());
        }
        if let Some(v) = cookie {
            headers.insert(header::COOKIE, HeaderValue::from_str(v).unwrap());
        }
        let jar = CookieJar::from_headers(&headers);
        (headers, jar)
    }

    #[test]
    fn bearer_header_wins_over_cookie() {
        let (headers, jar) = request_parts(Some("Bearer abc.def"), Some("token=from-cookie"));
        assert_eq!(extract_token(&headers, &jar).as_deref(), Some("abc.def"));
    }

    #[test]
    fn cookie_used_when_header_absent() {
        let (headers, jar) = request_parts(None, Some("theme=dark; token=from-cookie"));
        assert_eq!(extract_token(&headers, &jar).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn nothing_found_without_header_or_cookie() {
        let (headers, jar) = request_parts(None, Some("theme=dark"));
        assert_eq!(extract_token(&headers, &jar), None);

        let (headers, jar) = request_parts(None, None);
        assert_eq!(extract_token(&headers, &jar), None);
    }

    #[test]
    fn malformed_header_does_not_fall_back_to_cookie() {
        for auth in [
            "Basic dXNlcjpwYXNz",
            "bearer abc",
            "Bearer",
            "Bearer a b",
            "Bearer  abc",
            "Token abc",
        ] {
            let (headers, jar) = request_parts(Some(auth), Some("token=from-cookie"));
            assert_eq!(extract_token(&headers, &jar), None, "header {auth:?}");
        }
    }

    #[test]
    fn empty_tokens_count_as_missing() {
        let (headers, jar) = request_parts(None, Some("token="));
        assert_eq!(extract_token(&headers, &jar), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(extract_token(&headers, &CookieJar::new()), None);
    }

    #[test]
    fn non_ascii_header_is_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap(),
        );
        headers.insert(header::COOKIE, HeaderValue::from_static("token=from-cookie"));
        let jar = CookieJar::from_headers(&headers);
        assert_eq!(extract_token(&headers, &jar), None);
    }
}
