//! Authentication route handlers
//!
//! This module contains the onboarding endpoints:
//! - Employee signup
//! - Email verification from the emailed link

pub mod signup;
pub mod verify_signup;

use actix_web::HttpRequest;

fn header_value<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Extract client IP address from request
///
/// Prefers the first `X-Forwarded-For` entry, then `X-Real-IP`, then the
/// socket peer.
pub fn extract_client_ip(req: &HttpRequest) -> Option<String> {
    if let Some(ip) = header_value(req, "X-Forwarded-For")
        .and_then(|forwarded| forwarded.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
    {
        return Some(ip.to_string());
    }

    if let Some(ip) = header_value(req, "X-Real-IP") {
        return Some(ip.to_string());
    }

    req.peer_addr().map(|addr| addr.ip().to_string())
}

#[cfg(test)]
mod tests {
    use super::extract_client_ip;
    use actix_web::test::TestRequest;

    #[test]
    fn test_forwarded_for_first_entry_wins() {
        let req = TestRequest::default()
            .insert_header(("X-Forwarded-For", "81.2.69.160, 10.0.0.1"))
            .insert_header(("X-Real-IP", "10.0.0.2"))
            .to_http_request();

        assert_eq!(extract_client_ip(&req).as_deref(), Some("81.2.69.160"));
    }

    #[test]
    fn test_real_ip_fallback() {
        let req = TestRequest::default()
            .insert_header(("X-Real-IP", "10.0.0.2"))
            .to_http_request();

        assert_eq!(extract_client_ip(&req).as_deref(), Some("10.0.0.2"));
    }

    #[test]
    fn test_peer_address_fallback() {
        let req = TestRequest::default()
            .peer_addr("192.168.1.20:52000".parse().unwrap())
            .to_http_request();

        assert_eq!(extract_client_ip(&req).as_deref(), Some("192.168.1.20"));
    }

    #[test]
    fn test_no_address_available() {
        let req = TestRequest::default().to_http_request();
        assert!(extract_client_ip(&req).is_none());
    }
}
