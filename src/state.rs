//! # Application State
//!
//! This module defines the shared state that's accessible to all request
//! handlers. Axum clones the state for each request, which is cheap because
//! the repository is behind an `Arc`.

use std::sync::Arc;

use crate::users::UserRepository;

/// Shared application state.
///
/// Holds the user repository the login handler authenticates against. The
/// trait object keeps the storage backend swappable: the binary installs an
/// in-memory repository, tests install stubs.
#[derive(Clone)]
pub struct AppState {
    /// User lookup, safe for concurrent use across requests.
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
