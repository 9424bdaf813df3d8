//! CORS header injection.
//!
//! Every response gets the configured `Access-Control-Allow-Origin` and
//! `Access-Control-Allow-Methods` values, and pre-flight `OPTIONS` requests
//! are answered directly without reaching the inner handler. The values come
//! from an explicit [`CorsConfig`] rather than process-wide constants so
//! tests can vary them.

use axum::body::Body;
use axum::http::header::{self, HeaderValue, InvalidHeaderValue};
use axum::http::{Method, Request, StatusCode};
use axum::response::IntoResponse;
use tower::{service_fn, ServiceExt};

use super::{BoxHandler, Middleware};

/// Header values the CORS middleware attaches to every response.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origin: HeaderValue,
    pub allowed_methods: HeaderValue,
}

impl CorsConfig {
    /// Build a config from string values, validating them as header values.
    pub fn new(origin: &str, methods: &str) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            allowed_origin: HeaderValue::from_str(origin)?,
            allowed_methods: HeaderValue::from_str(methods)?,
        })
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: HeaderValue::from_static("*"),
            allowed_methods: HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
        }
    }
}

/// Attach the configured CORS headers to every response; short-circuit
/// `OPTIONS` with a 200.
pub fn cors(config: CorsConfig) -> Middleware {
    Box::new(move |inner: BoxHandler| {
        let config = config.clone();
        BoxHandler::new(service_fn(move |req: Request<Body>| {
            let inner = inner.clone();
            let config = config.clone();
            async move {
                let mut response = if req.method() == Method::OPTIONS {
                    StatusCode::OK.into_response()
                } else {
                    inner.oneshot(req).await?
                };

                let headers = response.headers_mut();
                headers.insert(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    config.allowed_origin.clone(),
                );
                headers.insert(
                    header::ACCESS_CONTROL_ALLOW_METHODS,
                    config.allowed_methods.clone(),
                );
                Ok(response)
            }
        }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::compose;
    use crate::middleware::testing::not_found_handler;

    fn request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn preflight_is_answered_with_the_configured_headers() {
        let config = CorsConfig::default();
        let handler = compose(not_found_handler(), vec![cors(config.clone())]);

        let response = handler
            .oneshot(request(Method::OPTIONS, "/sample"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&config.allowed_origin)
        );
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_METHODS),
            Some(&config.allowed_methods)
        );
    }

    #[tokio::test]
    async fn headers_are_added_to_delegated_responses() {
        let config = CorsConfig::new("https://app.example.com", "GET, POST").unwrap();
        let handler = compose(not_found_handler(), vec![cors(config)]);

        let response = handler.oneshot(request(Method::GET, "/sample")).await.unwrap();

        // The inner handler's status is preserved, headers are still set.
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://app.example.com"
        );
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST"
        );
    }
}
