//! # Users
//!
//! The user model and the repository it is looked up through.
//!
//! The repository is a trait so the storage backend stays out of the core:
//! the binary seeds an in-memory implementation, tests inject their own, and
//! a database-backed variant would slot in without touching any caller.

use std::sync::Arc;

/// An authenticatable principal.
#[derive(Debug, Clone)]
pub struct User {
    /// Stable identifier written into the session on login.
    pub sid: String,

    /// Login email, unique within a repository.
    pub email: String,

    /// Argon2id hash of the password, PHC string format.
    pub password_hash: String,

    /// Human-readable display name.
    pub name: String,
}

/// Lookup interface the authentication use case depends on.
///
/// Implementations must be safe for concurrent calls from multiple requests.
pub trait UserRepository: Send + Sync {
    /// Find a user by email. `None` when no such user exists.
    fn find_by_email(&self, email: &str) -> Option<User>;
}

/// In-memory repository backed by a fixed list of users.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Convenience constructor returning the trait object the state carries.
    pub fn shared(users: Vec<User>) -> Arc<dyn UserRepository> {
        Arc::new(Self::new(users))
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.iter().find(|u| u.email == email).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> InMemoryUserRepository {
        InMemoryUserRepository::new(vec![User {
            sid: "123".to_string(),
            email: "john@example.com".to_string(),
            password_hash: String::new(),
            name: "John".to_string(),
        }])
    }

    #[test]
    fn finds_existing_user_by_email() {
        let user = repo().find_by_email("john@example.com");
        assert_eq!(user.map(|u| u.sid), Some("123".to_string()));
    }

    #[test]
    fn unknown_email_returns_none() {
        assert!(repo().find_by_email("nobody@example.com").is_none());
    }
}
