//! Custom assertion macros and utilities

/// Assert that a response has the given status and a non-empty `message`
macro_rules! assert_error_response {
    ($response:expr, $status:expr) => {{
        let response = $response;
        assert_eq!(response.status_code(), $status);
        let body: serde_json::Value = response.json();
        let message = body["message"].as_str().unwrap_or_default().to_string();
        assert!(!message.is_empty(), "Expected a non-empty message, got: {}", body);
        message
    }};
}

/// Assert that a string contains a substring
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
