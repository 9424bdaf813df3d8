//! # Session Abstraction
//!
//! A typed wrapper over the per-visitor [`tower_sessions::Session`]. It owns
//! the two things this application keeps in a session: the current user
//! identifier and one-shot flash values.
//!
//! ## Guest sentinel
//! The canonical "not authenticated" value is [`GUEST_ID`], the empty string.
//! A missing value, a store read failure, and an explicitly stored guest id
//! all read back as `GUEST_ID` — reads fail open to guest and never surface a
//! store error to the caller. Writes do surface errors, as
//! [`AppError::SessionWrite`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tower_sessions::Session;

use crate::error::{AppError, AppResult};

/// The reserved user identifier meaning "not authenticated".
pub const GUEST_ID: &str = "";

const USER_ID_KEY: &str = "auth.user_id";
const FLASH_PREFIX: &str = "flash.";

/// Typed view of one visitor's session.
///
/// Also an extractor: handlers can take a `SessionAuth` argument directly and
/// it resolves through the session layer's request extension.
#[derive(Clone)]
pub struct SessionAuth {
    session: Session,
}

impl SessionAuth {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// The stored user identifier, or [`GUEST_ID`] if none is set or the
    /// store read fails.
    pub async fn current_user_id(&self) -> String {
        self.session
            .get::<String>(USER_ID_KEY)
            .await
            .ok()
            .flatten()
            .unwrap_or_else(|| GUEST_ID.to_string())
    }

    /// Whether the session belongs to an authenticated user.
    pub async fn is_authenticated(&self) -> bool {
        self.current_user_id().await != GUEST_ID
    }

    /// Persist the user identifier (successful login).
    pub async fn set_user_id(&self, id: &str) -> AppResult<()> {
        self.session
            .insert(USER_ID_KEY, id.to_string())
            .await
            .map_err(AppError::SessionWrite)
    }

    /// Reset the session to guest (logout). Drops all stored values,
    /// including flashes.
    pub async fn clear(&self) -> AppResult<()> {
        self.session.flush().await.map_err(AppError::SessionWrite)
    }

    /// Store a one-shot value under `key`.
    pub async fn set_flash(&self, key: &str, value: &str) -> AppResult<()> {
        self.session
            .insert(&format!("{FLASH_PREFIX}{key}"), value.to_string())
            .await
            .map_err(AppError::SessionWrite)
    }

    /// Take the flash value stored under `key`, removing it so a second read
    /// sees nothing. Read failures behave like an absent value.
    pub async fn pop_flash(&self, key: &str) -> Option<String> {
        self.session
            .remove::<String>(&format!("{FLASH_PREFIX}{key}"))
            .await
            .ok()
            .flatten()
    }
}

impl<S> FromRequestParts<S> for SessionAuth
where
    S: Send + Sync,
{
    type Rejection = <Session as FromRequestParts<S>>::Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        Ok(Self::new(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tower_sessions::MemoryStore;

    fn fresh() -> SessionAuth {
        let store = Arc::new(MemoryStore::default());
        SessionAuth::new(Session::new(None, store, None))
    }

    #[tokio::test]
    async fn fresh_session_is_guest() {
        let auth = fresh();
        assert_eq!(auth.current_user_id().await, GUEST_ID);
        assert!(!auth.is_authenticated().await);
    }

    #[tokio::test]
    async fn set_user_id_authenticates() {
        let auth = fresh();
        auth.set_user_id("123").await.unwrap();
        assert_eq!(auth.current_user_id().await, "123");
        assert!(auth.is_authenticated().await);
    }

    #[tokio::test]
    async fn explicit_guest_id_is_not_authenticated() {
        let auth = fresh();
        auth.set_user_id(GUEST_ID).await.unwrap();
        assert!(!auth.is_authenticated().await);
    }

    #[tokio::test]
    async fn clear_resets_to_guest() {
        let auth = fresh();
        auth.set_user_id("123").await.unwrap();
        auth.clear().await.unwrap();
        assert_eq!(auth.current_user_id().await, GUEST_ID);
        assert!(!auth.is_authenticated().await);
    }

    #[tokio::test]
    async fn flash_values_read_exactly_once() {
        let auth = fresh();
        auth.set_flash("notice", "saved").await.unwrap();
        assert_eq!(auth.pop_flash("notice").await.as_deref(), Some("saved"));
        assert_eq!(auth.pop_flash("notice").await, None);
    }
}
