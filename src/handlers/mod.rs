//! # HTTP Request Handlers
//!
//! Terminal route handlers. Each one extracts what it needs (session, state,
//! form body), does its work, and renders a page or redirects. Access control
//! never happens here — the gates in `crate::middleware` run first.
//!
//! ## Submodules
//! - `auth`: login form, login submission, logout
//! - `pages`: the session-gated pages (home, profile)

pub mod auth;
pub mod pages;
