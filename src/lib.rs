//! Configuration-driven HTTP service scaffold for agent subprojects.
//!
//! # Architecture Overview
//!
//! ```text
//!   --config app.yaml          ┌────────────────────────────────────┐
//!   --env    app.env           │            EXEC-AGENT              │
//!   ─────────────────────────▶ │                                    │
//!                              │  ┌────────┐      ┌─────────────┐   │
//!                              │  │ config │─────▶│ http::App   │   │
//!                              │  │ loader │      │  (factory)  │   │
//!                              │  └────────┘      └──────┬──────┘   │
//!                              │                         │          │
//!                              │                         ▼          │
//!     GET /          ◀─────────┼──────────────  ┌─────────────┐     │
//!     GET /v1/ping   ◀─────────┼──────────────  │   routes    │     │
//!                              │                └─────────────┘     │
//!                              │                                    │
//!                              │  Cross-cutting: observability,     │
//!                              │  lifecycle (graceful shutdown)     │
//!                              └────────────────────────────────────┘
//! ```
//!
//! Build is separated from run: [`http::App::build`] registers routes and
//! middleware without binding a socket; [`http::App::serve`] binds and runs.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::{load_settings, AppSettings, ConfigError};
pub use http::App;
