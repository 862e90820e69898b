//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the redirect and health handlers
//! - Wire up middleware (request ID, tracing)
//! - Bind the listener from the validated config
//! - Serve until the listener fails

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::convert::Infallible;
use std::io::ErrorKind;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::RedirectConfig;
use crate::health::{self, HEALTH_PATHS};
use crate::http::response::RedirectResponse;

/// Fatal server errors. Nothing here is retried.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen endpoint could not be bound.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The listener failed while serving.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    /// The accept loop ended without an error.
    #[error("server stopped unexpectedly")]
    Stopped,
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RedirectConfig>,
}

/// HTTP server for the redirector.
pub struct HttpServer {
    router: Router,
    config: Arc<RedirectConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RedirectConfig) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            config: config.clone(),
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Unmapped paths fall back to the redirect handler rather than 404.
    fn build_router(state: AppState) -> Router {
        let mut router = Router::new().route("/", any(redirect_handler));
        for path in HEALTH_PATHS {
            router = router.route(path, any(health::liveness));
        }

        router
            .fallback(redirect_handler)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Bind a listener on the configured endpoint.
    ///
    /// An empty host binds `[::]` and drops to `0.0.0.0` when the host cannot
    /// open IPv6 sockets.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        let address = self.config.bind_address();
        let source = match TcpListener::bind(address.as_str()).await {
            Ok(listener) => return Ok(listener),
            Err(e) => e,
        };

        let fallback = match self.config.fallback_bind_address() {
            Some(fallback)
                if !matches!(
                    source.kind(),
                    ErrorKind::AddrInUse | ErrorKind::PermissionDenied
                ) =>
            {
                fallback
            }
            _ => return Err(ServerError::Bind { address, source }),
        };

        tracing::warn!(
            address = %address,
            fallback = %fallback,
            error = %source,
            "IPv6 bind failed, listening on IPv4 only"
        );
        let result = TcpListener::bind(fallback.as_str()).await;
        result.map_err(|source| ServerError::Bind {
            address: fallback,
            source,
        })
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Never returns `Ok`: leaving the accept loop is always an error.
    pub async fn run(self, listener: TcpListener) -> Result<Infallible, ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            redirect_code = self.config.redirect_code.as_u16(),
            destination = %self.config.destination,
            "HTTP server starting"
        );

        axum::serve(listener, self.router).await?;

        Err(ServerError::Stopped)
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RedirectConfig {
        &self.config
    }

    /// Consume the server, returning the fully layered router.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Redirect every request to the configured destination.
async fn redirect_handler(State(state): State<AppState>) -> Response {
    tracing::info!(destination = %state.config.destination, "Redirecting");
    RedirectResponse::new(state.config.redirect_code, &state.config.destination).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::observability::logging::capture::capture_logs;

    fn router(code: StatusCode, destination: &str) -> Router {
        HttpServer::new(RedirectConfig {
            listen_endpoint: "127.0.0.1:0".to_string(),
            redirect_code: code,
            destination: destination.to_string(),
        })
        .into_router()
    }

    async fn send(app: Router, method: Method, uri: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_len(response: Response) -> usize {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .len()
    }

    #[tokio::test]
    async fn test_root_redirects() {
        let app = router(StatusCode::TEMPORARY_REDIRECT, "https://example.com/x");
        let response = send(app, Method::GET, "/").await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://example.com/x"
        );
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(body_len(response).await, 0);
    }

    #[tokio::test]
    async fn test_redirect_logs_destination() {
        let (logs, _guard) = capture_logs();
        let app = router(StatusCode::FOUND, "https://example.com/logged");

        send(app, Method::GET, "/").await;

        let output = logs.contents();
        assert!(output.contains("Redirecting"), "{}", output);
        assert!(output.contains("https://example.com/logged"), "{}", output);
    }

    #[tokio::test]
    async fn test_health_route_does_not_log() {
        let (logs, _guard) = capture_logs();
        let app = router(StatusCode::FOUND, "https://example.com/logged");

        send(app, Method::GET, "/poll").await;

        let output = logs.contents();
        assert!(!output.contains("tiny_redirect"), "{}", output);
        assert!(!output.contains("https://example.com/logged"), "{}", output);
    }

    #[tokio::test]
    async fn test_unmapped_paths_redirect() {
        for uri in ["/anything", "/poll/extra", "/a/b/c?q=1", "/statistics"] {
            let app = router(StatusCode::MOVED_PERMANENTLY, "https://example.com/");
            let response = send(app, Method::POST, uri).await;

            assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY, "uri {}", uri);
            assert_eq!(
                response.headers().get(header::LOCATION).unwrap(),
                "https://example.com/"
            );
        }
    }

    #[tokio::test]
    async fn test_health_routes() {
        for uri in ["/poll", "/stat"] {
            for method in [Method::GET, Method::HEAD, Method::POST, Method::DELETE] {
                let app = router(StatusCode::SEE_OTHER, "https://example.com/");
                let response = send(app, method.clone(), uri).await;

                assert_eq!(response.status(), StatusCode::OK, "{} {}", method, uri);
                assert!(response.headers().get(header::LOCATION).is_none());
                assert_eq!(body_len(response).await, 0);
            }
        }
    }

    #[tokio::test]
    async fn test_incoming_request_id_is_propagated() {
        let app = router(StatusCode::FOUND, "https://example.com/");
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers().get("x-request-id").unwrap(), "abc-123");
    }

    #[tokio::test]
    async fn test_bind_failure_reports_address() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = taken.local_addr().unwrap().to_string();

        let server = HttpServer::new(RedirectConfig {
            listen_endpoint: endpoint.clone(),
            ..RedirectConfig::default()
        });

        match server.bind().await {
            Err(ServerError::Bind { address, .. }) => assert_eq!(address, endpoint),
            other => panic!("expected bind error, got {:?}", other.map(|_| ())),
        }
    }
}
