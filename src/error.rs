//! # Error Handling
//!
//! This module defines custom error types for the application and handles
//! converting them into HTTP responses.
//!
//! Detailed diagnostics go to the log; clients only ever see a generic
//! message. Invalid login credentials are deliberately a single opaque error
//! so the response never reveals whether the email or the password was wrong.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-wide error type.
///
/// These are the errors that can escape a handler. Authentication failures
/// are *not* here: they are recovered locally by the login handler and turned
/// into a 401 with the form re-rendered (see [`AuthError`]).
#[derive(Error, Debug)]
pub enum AppError {
    /// The session store could not persist a write (login/logout).
    ///
    /// Read failures never produce this error; reads fail open to guest.
    #[error("session write failed: {0}")]
    SessionWrite(#[from] tower_sessions::session::Error),

    /// A template failed to render.
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the detail server-side, hand the client a generic body.
        match &self {
            AppError::SessionWrite(e) => tracing::error!("session write failed: {e:?}"),
            AppError::Template(e) => tracing::error!("template rendering failed: {e:?}"),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
    }
}

/// Convenience type alias for Results using AppError.
pub type AppResult<T> = Result<T, AppError>;

/// Errors from the authentication use case.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password. One variant for both on purpose.
    #[error("invalid email or password")]
    InvalidCredentials,
}
