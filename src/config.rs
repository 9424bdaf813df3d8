//! # Configuration Management
//!
//! This module handles loading configuration from environment variables.
//! It uses the "12-factor app" methodology where configuration comes from the
//! environment, with a `.env` file for local development.
//!
//! ## Environment Variables
//! - `HOST`: Server bind address (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8080)
//! - `STATIC_DIR`: Directory served as static files (default: static)
//! - `STATIC_PREFIX`: Optional URL prefix for static files (default: none,
//!   files are served from the root)
//! - `PANIC_REDIRECT`: Where the panic recoverer sends the client (default: /)
//! - `CORS_ALLOWED_ORIGIN`: Value for Access-Control-Allow-Origin (default: *)
//! - `CORS_ALLOWED_METHODS`: Value for Access-Control-Allow-Methods
//! - `SESSION_HOURS`: Session inactivity expiry in hours (default: 24)

use anyhow::Result;
use std::env;

use crate::middleware::cors::CorsConfig;

/// Application configuration.
///
/// All fields are public so tests can build a `Config` by hand and vary any
/// knob, including the CORS header values.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host/IP address to bind to.
    pub host: String,

    /// Server port number.
    pub port: u16,

    /// Directory whose contents are served as static files.
    pub static_dir: String,

    /// Optional URL prefix the static directory is mounted under.
    /// `None` mounts it at the root (unmatched routes fall through to it).
    pub static_prefix: Option<String>,

    /// Destination the panic recoverer redirects to.
    pub panic_redirect: String,

    /// CORS header values attached to every response.
    pub cors: CorsConfig,

    /// Session inactivity expiry in hours.
    pub session_hours: i64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file first if one exists (dotenvy doesn't error if the
    /// file is missing), then reads each value with a sensible default.
    /// Returns an error if a value fails to parse (e.g. invalid port) or a
    /// CORS value is not a valid header value.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let cors = CorsConfig::new(
            &env::var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|_| "*".to_string()),
            &env::var("CORS_ALLOWED_METHODS")
                .unwrap_or_else(|_| "GET, POST, PUT, DELETE, OPTIONS".to_string()),
        )?;

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),

            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,

            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),

            // An empty prefix means "no prefix"; a set prefix is normalized
            // to start with a slash so it can be nested directly.
            static_prefix: env::var("STATIC_PREFIX")
                .ok()
                .filter(|p| !p.is_empty())
                .map(|p| {
                    if p.starts_with('/') {
                        p
                    } else {
                        format!("/{p}")
                    }
                }),

            panic_redirect: env::var("PANIC_REDIRECT").unwrap_or_else(|_| "/".to_string()),

            cors,

            session_hours: env::var("SESSION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()?,
        })
    }

    /// Socket address to bind the server to, e.g. "127.0.0.1:8080".
    ///
    /// This format is required by `tokio::net::TcpListener::bind()`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: "static".to_string(),
            static_prefix: None,
            panic_redirect: "/".to_string(),
            cors: CorsConfig::default(),
            session_hours: 24,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sane_values() {
        let config = Config::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.static_prefix, None);
        assert_eq!(config.panic_redirect, "/");
    }
}
