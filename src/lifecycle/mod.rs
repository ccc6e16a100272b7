//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse CLI → Load settings → Init logging → Build app → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     SIGTERM/SIGINT → graceful shutdown of the Axum server
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

pub mod shutdown;

pub use shutdown::shutdown_signal;
