//! Application factory and HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing)
//! - Bind server to a listener and serve until shutdown
//!
//! # Design Decisions
//! - Build is separated from run: `App::build` never opens a socket, so
//!   tests can exercise settings and routes without binding a port
//! - Settings are shared with handlers via Arc, never mutated after build

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::AppSettings;
use crate::http::routes::register_routes;
use crate::lifecycle::shutdown_signal;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<AppSettings>,
}

/// A fully built, not-yet-serving application.
pub struct App {
    router: Router,
    settings: Arc<AppSettings>,
}

impl App {
    /// Build the application from validated settings.
    ///
    /// Registers all routes and middleware. Does not bind a socket.
    pub fn build(settings: AppSettings) -> Self {
        let settings = Arc::new(settings);
        let state = AppState {
            settings: settings.clone(),
        };

        let router = register_routes(state).layer(TraceLayer::new_for_http());

        Self { router, settings }
    }

    /// The router, cloneable for in-process testing without a listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// The settings this application was built from.
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Serve until a shutdown signal arrives.
    pub async fn serve(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            service_name = %self.settings.service_name,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
