/**
 * User Directory
 *
 * This module defines the user record and the read-only directory used to
 * look users up by credentials (login) or by id (profile).
 *
 * # Storage
 *
 * The only implementation is an in-memory table fixed at process start.
 * Handlers depend on the `UserDirectory` trait, so a real store can be
 * dropped in without touching them.
 *
 * # Passwords
 *
 * Passwords are kept in clear text because this is a mock. They are never
 * serialized.
 */

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// A user known to the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    /// Stable user id, used as the token subject
    pub id: String,
    /// Login name
    pub username: String,
    /// Clear-text password (mock only)
    #[serde(skip_serializing)]
    pub password: String,
    /// Given name
    pub name: String,
    /// Family name
    pub surname: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Owning department
    pub department: String,
    /// Role names, in order
    pub roles: Vec<String>,
}

/// Read-only user lookups
///
/// Both lookups are exact matches. "Not found" is the only failure.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find the user whose username and password both match
    async fn find(&self, username: &str, password: &str) -> Option<UserRecord>;

    /// Find the user with the given id
    async fn find_by_id(&self, id: &str) -> Option<UserRecord>;
}

/// Shared handle to a directory, as stored in application state
pub type SharedUserDirectory = Arc<dyn UserDirectory>;

/// Directory backed by a fixed in-memory list
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Vec<UserRecord>,
}

impl InMemoryUserDirectory {
    /// Create a directory over the given records
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// Create a directory holding the built-in mock users
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    /// Number of users in the directory
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory has no users
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find(&self, username: &str, password: &str) -> Option<UserRecord> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned()
    }

    async fn find_by_id(&self, id: &str) -> Option<UserRecord> {
        self.users.iter().find(|u| u.id == id).cloned()
    }
}

/// The built-in mock users
pub fn seed_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: "u-1001".to_string(),
            username: "alice".to_string(),
            password: "password123".to_string(),
            name: "Alice".to_string(),
            surname: "Kim".to_string(),
            email: "alice@example.com".to_string(),
            phone: "+82-10-1234-5678".to_string(),
            department: "Engineering".to_string(),
            roles: vec!["default-roles-ez-test".to_string()],
        },
        UserRecord {
            id: "u-1002".to_string(),
            username: "admin".to_string(),
            password: "admin123".to_string(),
            name: "Admin".to_string(),
            surname: "Lee".to_string(),
            email: "admin@example.com".to_string(),
            phone: "+82-10-9999-0000".to_string(),
            department: "Platform".to_string(),
            roles: vec!["default-roles-ez-test".to_string()],
        },
    ]
}
