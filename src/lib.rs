//! # Gatehouse
//!
//! A small web server demonstrating session-based authentication gating.
//! The interesting part is not the routes themselves but the middleware
//! pipeline around them: CORS, request logging, panic recovery, and two
//! session-driven gates (login-required and guest-only) are all plain
//! handler-to-handler transformers, composed per route group.
//!
//! ## Modules
//! - `config`: environment-based configuration
//! - `error`: application error types and their HTTP mapping
//! - `state`: shared application state
//! - `session`: typed wrapper over the per-visitor session
//! - `users`: user model and repository
//! - `auth`: credential verification (login use case)
//! - `middleware`: the five primitives plus the composer
//! - `handlers`: terminal route handlers
//! - `router`: route table assembly

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod session;
pub mod state;
pub mod users;
