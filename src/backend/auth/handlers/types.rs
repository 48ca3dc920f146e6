/**
 * Authentication Handler Types
 *
 * This module defines the request and response bodies of the login and
 * profile handlers.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::UserRecord;

/// Placeholder for the profile timestamps; there is no stored audit trail
pub const PLACEHOLDER_DATETIME: &str = "2025-10-28";

/// Login request
///
/// Both fields are optional here so that a missing field can be answered
/// with 400 and a message instead of a JSON rejection.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct LoginRequest {
    /// Login name
    #[serde(default)]
    pub username: Option<String>,
    /// Clear-text password
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Create a request with both fields set
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Both credentials, if present and non-empty
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let username = self.username.as_deref().filter(|s| !s.is_empty())?;
        let password = self.password.as_deref().filter(|s| !s.is_empty())?;
        Some((username, password))
    }
}

/// Auth response
///
/// Returned by the login handler.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    /// Signed JWT
    pub token: String,
}

/// Profile response
///
/// A projection of the user record that leaves out password, phone and
/// department.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
    pub creation_datetime: String,
    pub last_update_datetime: String,
}

impl From<UserRecord> for ProfileResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            name: user.name,
            surname: user.surname,
            username: user.username,
            email: user.email,
            roles: user.roles,
            creation_datetime: PLACEHOLDER_DATETIME.to_string(),
            last_update_datetime: PLACEHOLDER_DATETIME.to_string(),
        }
    }
}
