use axum::http::{header, HeaderMap};
use std::collections::HashMap;

/// Parses the request's Cookie header into name/value pairs. Malformed
/// segments are skipped.
pub fn parse_cookies(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(|raw| {
            raw.split(';')
                .filter_map(|segment| {
                    let (name, value) = segment.trim().split_once('=')?;
                    if name.is_empty() {
                        return None;
                    }
                    Some((name.to_string(), value.to_string()))
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Set-Cookie value for a session cookie.
pub fn session_cookie(name: &str, value: &str) -> String {
    format!("{}={}; Path=/; SameSite=Lax", name, value)
}

/// Set-Cookie value that expires a session cookie.
pub fn clear_cookie(name: &str) -> String {
    format!("{}=; Path=/; SameSite=Lax; Max-Age=0", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn parses_multiple_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("id=42; role=applicant; theme=dark"),
        );

        let cookies = parse_cookies(&headers);
        assert_eq!(cookies.get("id").map(String::as_str), Some("42"));
        assert_eq!(cookies.get("role").map(String::as_str), Some("applicant"));
        assert_eq!(cookies.get("theme").map(String::as_str), Some("dark"));
    }

    #[test]
    fn missing_header_yields_no_cookies() {
        let headers = HeaderMap::new();
        assert!(parse_cookies(&headers).is_empty());
    }

    #[test]
    fn malformed_segments_are_skipped() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("id=7; garbage; =x"));

        let cookies = parse_cookies(&headers);
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies.get("id").map(String::as_str), Some("7"));
    }
}
