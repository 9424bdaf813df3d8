//! Access logging.
//!
//! One `tracing` line per request with method, path, status, and latency.
//! The response passes through untouched.

use std::time::Instant;

use axum::body::Body;
use axum::http::Request;
use tower::{service_fn, ServiceExt};

use super::{BoxHandler, Middleware};

/// Log every request through the installed `tracing` subscriber.
pub fn logging() -> Middleware {
    Box::new(|inner: BoxHandler| {
        BoxHandler::new(service_fn(move |req: Request<Body>| {
            let inner = inner.clone();
            async move {
                let method = req.method().clone();
                let path = req.uri().path().to_string();
                let started = Instant::now();

                let response = inner.oneshot(req).await?;

                tracing::info!(
                    "{} {} {} {}ms",
                    method,
                    path,
                    response.status().as_u16(),
                    started.elapsed().as_millis()
                );
                Ok(response)
            }
        }))
    })
}
