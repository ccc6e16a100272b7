//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! AppSettings
//!     → server.rs (App::build: state + middleware)
//!     → routes.rs (register_routes: health + liveness endpoints)
//!     → App::serve (bind listener, graceful shutdown)
//! ```

pub mod routes;
pub mod server;

pub use server::{App, AppState};
