//! # Middleware
//!
//! Request-wrapping primitives and the composer that chains them.
//!
//! A middleware here is a plain value: a function from handler to handler,
//! where a handler is a boxed `tower` service. That keeps composition pure
//! function application — no router or network layer is needed to build or
//! test a chain.
//!
//! ## Primitives
//! - `cors`: injects the configured CORS headers into every response
//! - `logging`: one log line per request (method, path, status, latency)
//! - `recover`: panic boundary converting faults into a safe redirect
//! - `auth`: the two session gates (login-required, guest-only)

pub mod auth;
pub mod cors;
pub mod logging;
pub mod recover;

use std::convert::Infallible;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use tower::util::BoxCloneSyncService;

/// A terminal or already-wrapped request handler.
pub type BoxHandler = BoxCloneSyncService<Request<Body>, Response, Infallible>;

/// A handler transformer. Wrapping preserves the inner handler's behavior
/// for every request the middleware does not intercept.
pub type Middleware = Box<dyn Fn(BoxHandler) -> BoxHandler + Send + Sync>;

/// Chain `middleware` around `handler`, first element outermost.
///
/// Wrappers apply right-to-left so `middleware[0]` sees the request first and
/// the response last. An empty chain returns the handler unchanged.
pub fn compose(handler: BoxHandler, middleware: Vec<Middleware>) -> BoxHandler {
    middleware
        .into_iter()
        .rev()
        .fold(handler, |inner, wrap| wrap(inner))
}

/// A redirect response with an explicit status code.
///
/// The gates use 302; the panic recoverer deliberately pairs the Location
/// header with a 500.
pub fn redirect(status: StatusCode, location: &str) -> Response {
    (status, [(header::LOCATION, location.to_string())]).into_response()
}


#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{HeaderValue, Request, StatusCode};
    use tower::{service_fn, ServiceExt};

    use super::testing::ok_handler;
    use super::*;

    /// Appends its label to the `x-trace` request header before delegating,
    /// so the terminal handler sees the traversal order.
    fn tag(label: &'static str) -> Middleware {
        Box::new(move |inner: BoxHandler| {
            BoxHandler::new(service_fn(move |mut req: Request<Body>| {
                let inner = inner.clone();
                async move {
                    let trace = match req.headers().get("x-trace") {
                        Some(prev) => format!("{},{}", prev.to_str().unwrap(), label),
                        None => label.to_string(),
                    };
                    req.headers_mut()
                        .insert("x-trace", HeaderValue::from_str(&trace).unwrap());
                    inner.oneshot(req).await
                }
            }))
        })
    }

    /// Echoes the `x-trace` request header back as a response header.
    fn echo_trace() -> BoxHandler {
        BoxHandler::new(service_fn(|req: Request<Body>| async move {
            let mut response = StatusCode::OK.into_response();
            if let Some(trace) = req.headers().get("x-trace") {
                response.headers_mut().insert("x-trace", trace.clone());
            }
            Ok(response)
        }))
    }

    #[tokio::test]
    async fn empty_chain_returns_the_handler_unchanged() {
        let handler = compose(ok_handler(), vec![]);

        let response = handler
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn first_middleware_is_outermost() {
        let handler = compose(echo_trace(), vec![tag("first"), tag("second")]);

        let response = handler
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("x-trace").unwrap(),
            "first,second",
            "the first middleware must see the request before the second"
        );
    }

    #[tokio::test]
    async fn redirect_sets_status_and_location() {
        let response = redirect(StatusCode::FOUND, "/login");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()["location"], "/login");
    }
}
