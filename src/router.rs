//! # Route Table
//!
//! Assembles the route groups and binds each to its middleware chain:
//!
//! - `GET /`, `GET /profile` — Recoverer → Logging → CORS → Authenticate("/login")
//! - `GET|POST /login` — Recoverer → Logging → CORS → RedirectIfAuthenticated("/")
//! - `POST /logout` — Recoverer → Logging → CORS
//! - static files — Recoverer → Logging → CORS, from the configured
//!   directory, optionally under a path prefix
//!
//! The Recoverer/Logging/CORS trio wraps the whole table once, so 404s, 405s,
//! and static responses carry the CORS headers and are logged and recovered
//! too; the gates are composed per route group. The session manager layer
//! sits outside everything — it only loads and saves the session record.

use axum::handler::Handler;
use axum::routing::{get_service, post_service};
use axum::Router;
use tower_http::services::ServeDir;
use tower_sessions::{SessionManagerLayer, SessionStore};

use crate::config::Config;
use crate::handlers::{auth as auth_handlers, pages};
use crate::middleware::{auth, compose, cors, logging, recover, BoxHandler};
use crate::state::AppState;

/// Build the application router. The session store is injected so tests and
/// the binary can pick their own persistence.
pub fn router<Store>(
    config: &Config,
    state: AppState,
    sessions: SessionManagerLayer<Store>,
) -> Router
where
    Store: SessionStore + Clone + 'static,
{
    let home = compose(route(pages::home, &state), vec![auth::authenticate("/login")]);
    let profile = compose(
        route(pages::profile, &state),
        vec![auth::authenticate("/login")],
    );
    let login_form = compose(
        route(auth_handlers::login_form, &state),
        vec![auth::redirect_if_authenticated("/")],
    );
    let login = compose(
        route(auth_handlers::login, &state),
        vec![auth::redirect_if_authenticated("/")],
    );
    let logout = route(auth_handlers::logout, &state);

    let routes = Router::new()
        .route("/", get_service(home))
        .route("/profile", get_service(profile))
        .route("/login", get_service(login_form).post_service(login))
        .route("/logout", post_service(logout));

    // Unmatched paths fall through to the static directory, which answers
    // 404 for files it doesn't have and rejects traversal outside its root.
    let routes = match &config.static_prefix {
        Some(prefix) => routes.nest_service(prefix.as_str(), ServeDir::new(&config.static_dir)),
        None => routes.fallback_service(ServeDir::new(&config.static_dir)),
    };

    let chain = compose(
        BoxHandler::new(routes),
        vec![
            recover::recoverer(&config.panic_redirect),
            logging::logging(),
            cors::cors(config.cors.clone()),
        ],
    );

    Router::new().fallback_service(chain).layer(sessions)
}

fn route<H, T>(handler: H, state: &AppState) -> BoxHandler
where
    H: Handler<T, AppState> + Clone + Send + Sync + 'static,
    T: 'static,
{
    BoxHandler::new(handler.with_state(state.clone()))
}
