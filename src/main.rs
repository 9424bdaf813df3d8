//! # Gatehouse server
//!
//! Binary entry point. Wires the core (session abstraction, middleware
//! pipeline, route table) to its runtime collaborators: an in-memory session
//! store, an in-memory user repository seeded with one demo account, and the
//! tracing subscriber.
//!
//! Demo account credentials come from `DEMO_EMAIL` / `DEMO_PASSWORD`
//! (defaults: `john@example.com` / `pass123`).

use std::sync::Arc;

use anyhow::Result;
use time::Duration;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gatehouse::auth::hash_password;
use gatehouse::config::Config;
use gatehouse::router::router;
use gatehouse::state::AppState;
use gatehouse::users::{InMemoryUserRepository, User, UserRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging, filterable with RUST_LOG.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gatehouse=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    let state = AppState::new(demo_users()?);

    // In-memory sessions with inactivity expiry. The store is a collaborator:
    // swap in a persistent implementation here without touching the core.
    let sessions = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::hours(config.session_hours)));

    let app = router(&config, state, sessions);

    let bind_addr = config.bind_address();
    tracing::info!("Starting server on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// One seeded account so the login flow works out of the box.
fn demo_users() -> Result<Arc<dyn UserRepository>> {
    let email = std::env::var("DEMO_EMAIL").unwrap_or_else(|_| "john@example.com".to_string());
    let password = std::env::var("DEMO_PASSWORD").unwrap_or_else(|_| "pass123".to_string());

    let password_hash = hash_password(&password).map_err(|e| anyhow::anyhow!(e))?;

    Ok(InMemoryUserRepository::shared(vec![User {
        sid: "123".to_string(),
        email,
        password_hash,
        name: "John".to_string(),
    }]))
}
