//! Session gates.
//!
//! Two inverse request gates built on the session abstraction:
//! [`authenticate`] lets only authenticated visitors through and
//! [`redirect_if_authenticated`] protects guest-only pages (like the login
//! form) from visitors who are already logged in.
//!
//! Both gates evaluate the session strictly before delegating — on a gate
//! failure the inner handler never runs, so no partial execution of protected
//! logic is observable. A request without a session (layer missing, store
//! unavailable) counts as guest.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::{service_fn, ServiceExt};
use tower_sessions::Session;

use super::{redirect, BoxHandler, Middleware};
use crate::session::SessionAuth;

/// Require an authenticated session; otherwise 302 to `redirect_to`.
pub fn authenticate(redirect_to: &str) -> Middleware {
    let redirect_to = redirect_to.to_string();
    Box::new(move |inner: BoxHandler| {
        let redirect_to = redirect_to.clone();
        BoxHandler::new(service_fn(move |req: Request<Body>| {
            let inner = inner.clone();
            let redirect_to = redirect_to.clone();
            async move {
                let session = req.extensions().get::<Session>().cloned();
                if is_authenticated(session).await {
                    inner.oneshot(req).await
                } else {
                    Ok(redirect(StatusCode::FOUND, &redirect_to))
                }
            }
        }))
    })
}

/// Require a guest session; authenticated visitors get a 302 to
/// `redirect_to` instead of the inner handler.
pub fn redirect_if_authenticated(redirect_to: &str) -> Middleware {
    let redirect_to = redirect_to.to_string();
    Box::new(move |inner: BoxHandler| {
        let redirect_to = redirect_to.clone();
        BoxHandler::new(service_fn(move |req: Request<Body>| {
            let inner = inner.clone();
            let redirect_to = redirect_to.clone();
            async move {
                let session = req.extensions().get::<Session>().cloned();
                if is_authenticated(session).await {
                    Ok(redirect(StatusCode::FOUND, &redirect_to))
                } else {
                    inner.oneshot(req).await
                }
            }
        }))
    })
}

async fn is_authenticated(session: Option<Session>) -> bool {
    match session {
        Some(session) => SessionAuth::new(session).is_authenticated().await,
        None => false,
    }
}
