use axum::http::{HeaderMap, header};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    /// Gets the parsed channel list as JSON
    Browser,
    /// Media players and everything else get the raw m3u
    Player,
}

fn header_contains(headers: &HeaderMap, name: header::HeaderName, needle: &str) -> bool {
    headers
        .get(name)
        .and_then(|x| x.to_str().ok())
        .is_some_and(|x| x.contains(needle))
}

pub fn classify_client(headers: &HeaderMap) -> ClientKind {
    if header_contains(headers, header::ACCEPT, "text/html")
        || header_contains(headers, header::USER_AGENT, "Mozilla")
    {
        ClientKind::Browser
    } else {
        ClientKind::Player
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, header};

    use super::*;

    #[test]
    fn test_browser_by_accept() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml"),
        );
        assert_eq!(classify_client(&headers), ClientKind::Browser);
    }

    #[test]
    fn test_browser_by_user_agent() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static("Mozilla/5.0 (X11; Linux x86_64)"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
        assert_eq!(classify_client(&headers), ClientKind::Browser);
    }

    #[test]
    fn test_player() {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static("VLC/3.0.20 LibVLC/3.0.20"));
        assert_eq!(classify_client(&headers), ClientKind::Player);
        assert_eq!(classify_client(&HeaderMap::new()), ClientKind::Player);
    }

    #[test]
    fn test_opaque_header_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_bytes(b"Mozilla \xff").unwrap(),
        );
        assert_eq!(classify_client(&headers), ClientKind::Player);
    }
}
