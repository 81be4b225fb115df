//! HTTP server wiring

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::service::CommentService;

use super::api::create_router;

// ============================================================================
// App State
// ============================================================================

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Comment pipeline
    pub service: Arc<CommentService>,

    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    pub fn new(service: CommentService) -> Self {
        Self {
            service: Arc::new(service),
            start_time: Instant::now(),
        }
    }
}

// ============================================================================
// Server
// ============================================================================

/// API server
pub struct RaffleServer {
    config: Config,
    state: AppState,
}

impl RaffleServer {
    /// Create a new server
    pub fn new(config: Config) -> Result<Self, ServerError> {
        let service =
            CommentService::new(&config).map_err(|e| ServerError::ConfigError(e.to_string()))?;

        Ok(Self {
            config,
            state: AppState::new(service),
        })
    }

    /// Get the application state
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Address the server binds to
    pub fn bind_address(&self) -> SocketAddr {
        self.config.server.bind_address
    }

    /// Build the router with all routes
    pub fn build_router(&self) -> Router {
        let mut router = create_router(self.state.clone());

        if self.config.server.enable_cors {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        if self.config.server.enable_request_logging {
            router = router.layer(TraceLayer::new_for_http());
        }

        router
    }

    /// Start the server
    pub async fn start(&self) -> Result<(), ServerError> {
        self.start_with_shutdown(std::future::pending()).await
    }

    /// Start with graceful shutdown
    pub async fn start_with_shutdown(
        &self,
        shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<(), ServerError> {
        let router = self.build_router();
        let addr = self.bind_address();

        tracing::info!("Starting comment-raffle server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(e.to_string()))?;

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| ServerError::ServeError(e.to_string()))?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

// ============================================================================
// Server Errors
// ============================================================================

/// Server errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Failed to bind to address
    #[error("Failed to bind: {0}")]
    BindError(String),

    /// Server error
    #[error("Server error: {0}")]
    ServeError(String),
}

// ============================================================================
// Tests
// ============================================================================
