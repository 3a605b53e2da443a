//! Unit tests for HTTP status categorization and constructor helpers

use pulse_domain::ErrorCategory;
use pulse_providers::sentiment::helpers::constructor;
use pulse_providers::utils::HttpResponseUtils;

#[test]
fn test_status_codes_map_to_categories() {
    let cases = [
        (401, ErrorCategory::Authentication),
        (403, ErrorCategory::Authentication),
        (429, ErrorCategory::Throttling),
        (400, ErrorCategory::Validation),
        (413, ErrorCategory::Validation),
        (500, ErrorCategory::Service),
        (503, ErrorCategory::Service),
        (599, ErrorCategory::Service),
        (404, ErrorCategory::Unknown),
        (302, ErrorCategory::Unknown),
    ];

    for (code, expected) in cases {
        let error = HttpResponseUtils::categorize(code, "sentiment service", "details");
        assert_eq!(error.category(), expected, "status {code}");
    }
}

#[test]
fn test_only_throttling_and_service_are_retryable() {
    assert!(HttpResponseUtils::categorize(429, "svc", "").is_retryable());
    assert!(HttpResponseUtils::categorize(500, "svc", "").is_retryable());
    assert!(!HttpResponseUtils::categorize(401, "svc", "").is_retryable());
    assert!(!HttpResponseUtils::categorize(400, "svc", "").is_retryable());
    assert!(!HttpResponseUtils::categorize(404, "svc", "").is_retryable());
}

#[test]
fn test_error_messages_name_the_provider_and_status() {
    let error = HttpResponseUtils::categorize(503, "sentiment service", "overloaded");
    let text = error.to_string();

    assert!(text.contains("sentiment service"));
    assert!(text.contains("503"));
    assert!(text.contains("overloaded"));
}

#[test]
fn test_effective_url_falls_back_to_default() {
    assert_eq!(
        constructor::effective_url(None, "http://localhost:8600"),
        "http://localhost:8600"
    );
    assert_eq!(
        constructor::effective_url(Some("https://api.example.com/"), "http://localhost:8600"),
        "https://api.example.com"
    );
}

#[test]
fn test_api_key_normalization_strips_whitespace() {
    assert_eq!(constructor::normalize_api_key("  key-123 \n"), "key-123");
    assert_eq!(
        constructor::normalize_url(Some(" http://host ".to_string())),
        Some("http://host".to_string())
    );
}
