//! Panic recovery.
//!
//! A scoped failure boundary around the inner handler. A panic anywhere
//! inside is caught here, logged with its payload, and converted into a
//! redirect to the configured destination with status 500. The fault stays
//! confined to the one request; the worker keeps serving.
//!
//! This is the single place uncaught failures become responses — no other
//! layer suppresses panics.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use futures_util::FutureExt;
use tower::{service_fn, ServiceExt};

use super::{redirect, BoxHandler, Middleware};

/// Catch panics from the inner handler; log them and redirect to
/// `destination` with a 500.
pub fn recoverer(destination: &str) -> Middleware {
    let destination = destination.to_string();
    Box::new(move |inner: BoxHandler| {
        let destination = destination.clone();
        BoxHandler::new(service_fn(move |req: Request<Body>| {
            let inner = inner.clone();
            let destination = destination.clone();
            async move {
                match AssertUnwindSafe(inner.oneshot(req)).catch_unwind().await {
                    Ok(result) => result,
                    Err(panic) => {
                        tracing::error!(
                            "recovered from panic: {}",
                            panic_message(panic.as_ref())
                        );
                        Ok(redirect(StatusCode::INTERNAL_SERVER_ERROR, &destination))
                    }
                }
            }
        }))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic payload"
    }
}
