//! # HTTP Server
//!
//! Combines the endpoint routers, applies CORS and request logging, and runs
//! the listener until Ctrl-C.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderValue, StatusCode},
    middleware::{self, Next},
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::greeting_routes::greeting_routes;
use super::show_routes::show_routes;
use crate::datastore::Store;
use crate::envelope::Envelope;
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::shows::ShowHandler;

/// HTTP server for the shows API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `store` with default configuration
    pub fn new(store: Store) -> Self {
        Self::with_config(HttpServerConfig::default(), store)
    }

    /// Create a server over `store` with custom configuration
    pub fn with_config(config: HttpServerConfig, store: Store) -> Self {
        let router = build_router(&config, store);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        let local_addr = listener.local_addr()?.to_string();
        log_event_with_fields(Event::ServerListening, &[("addr", &local_addr)]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

/// Build the combined router with all endpoints
pub fn build_router(config: &HttpServerConfig, store: Store) -> Router {
    Router::new()
        .merge(greeting_routes())
        .merge(show_routes(ShowHandler::new(store)))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(log_requests))
                .layer(cors_layer(&config.cors_origins)),
        )
}

/// Empty origin list allows any origin
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins.iter().filter_map(|s| s.parse().ok()).collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

async fn not_found_handler() -> Envelope {
    Envelope::status(StatusCode::NOT_FOUND, "Not found")
}

async fn method_not_allowed_handler() -> Envelope {
    Envelope::status(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    let elapsed_us = started.elapsed().as_micros().to_string();
    log_event_with_fields(
        Event::HttpRequest,
        &[
            ("method", &method),
            ("path", &path),
            ("status", &status),
            ("elapsed_us", &elapsed_us),
        ],
    );
    response
}

async fn shutdown_signal() {
    // If the handler cannot be installed, serve until the process is killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datastore::InMemoryDatastore;
    use std::sync::Arc;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(Arc::new(InMemoryDatastore::new()));
        assert_eq!(server.socket_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(9090);
        let server = HttpServer::with_config(config, Arc::new(InMemoryDatastore::new()));
        assert_eq!(server.socket_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn test_cors_with_origin_list_builds() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = build_router(&config, Arc::new(InMemoryDatastore::new()));
    }
}
