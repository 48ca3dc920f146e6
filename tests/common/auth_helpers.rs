//! Authentication test helpers
//!
//! Fixtures for building a test server and minting or mangling tokens.

use axum_test::TestServer;
use std::time::Duration;

use mock_auth::backend::auth::sessions::{now_timestamp, TokenClaims, TokenCodec};
use mock_auth::backend::auth::users::{seed_users, SharedUserDirectory};
use mock_auth::backend::server::{create_app, create_app_with_directory};
use mock_auth::shared::config::AppConfig;

/// Secret used by every test server
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test user credentials
pub struct TestUser {
    pub id: &'static str,
    pub username: &'static str,
    pub password: &'static str,
}

pub const ALICE: TestUser = TestUser {
    id: "u-1001",
    username: "alice",
    password: "password123",
};

pub const ADMIN: TestUser = TestUser {
    id: "u-1002",
    username: "admin",
    password: "admin123",
};

/// Configuration with the test secret and a one hour TTL
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .token_ttl(Duration::from_secs(3600))
        .build()
        .expect("valid test configuration")
}

/// A test server over the full application
pub fn test_server() -> TestServer {
    TestServer::new(create_app(test_config())).expect("Failed to create test server")
}

/// A test server over the full application with a substituted directory
pub fn test_server_with_directory(users: SharedUserDirectory) -> TestServer {
    TestServer::new(create_app_with_directory(test_config(), users))
        .expect("Failed to create test server")
}

/// A codec matching the test server's secret
pub fn test_codec() -> TokenCodec {
    TokenCodec::from_config(&test_config())
}

/// Log in through the API and return the issued token
pub async fn login_token(server: &TestServer, user: &TestUser) -> String {
    let response = server
        .post("/auth/login")
        .json(&serde_json::json!({
            "username": user.username,
            "password": user.password,
        }))
        .await;
    let body: serde_json::Value = response.json();
    body["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string()
}

/// A correctly signed token for a seeded user that expired an hour ago
pub fn expired_token_for(index: usize) -> String {
    let user = seed_users().remove(index);
    let claims = TokenClaims::for_user(&user, now_timestamp() - 7200, Duration::from_secs(3600));
    test_codec().sign_claims(&claims).expect("sign expired token")
}

/// A correctly signed token whose subject is not a known user
pub fn token_for_unknown_subject() -> String {
    let now = now_timestamp();
    let claims = TokenClaims {
        sub: "u-0000".to_string(),
        username: "ghost".to_string(),
        roles: vec![],
        iat: now,
        exp: now + 3600,
    };
    test_codec().sign_claims(&claims).expect("sign token")
}

/// Change the byte at `offset` within the signature segment of a token
pub fn corrupt_signature_byte(token: &str, offset: usize) -> String {
    let sig_start = token.rfind('.').expect("token has a signature") + 1;
    let index = sig_start + offset;
    let mut bytes = token.as_bytes().to_vec();
    bytes[index] = if bytes[index] == b'A' { b'B' } else { b'A' };
    String::from_utf8(bytes).expect("token stays ASCII")
}
