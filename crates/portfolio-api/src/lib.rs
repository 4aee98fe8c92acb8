//! Portfolio API
//!
//! HTTP surface of the portfolio site. Two routes, both backed by a
//! [`PortfolioStore`](portfolio_storage::PortfolioStore):
//!
//! - `GET /api/portfolio`: the profile, experience, education, skills and
//!   projects aggregate
//! - `POST /api/contact`: validate and store one contact message
//!
//! ## Lifecycle
//!
//! 1. [`startup::open_store`] connects to the configured backend.
//! 2. [`startup::initialize`] creates tables and seeds an empty store. It
//!    hands back the [`AppState`] the router is built from.
//! 3. [`startup::serve`] binds the listener and serves until shutdown.
//!
//! Seeding always completes before the first request is accepted.

pub mod cli;
pub mod config;
pub mod handler;
pub mod startup;
pub mod telemetry;

pub use cli::{Cli, Commands, LogFormat, StoreArgs, StoreBackend};
pub use config::{ConfigError, ServerConfig, StoreSettings};
pub use handler::{build_app, create_router, ApiError, AppState};

/// Server version (from Cargo.toml)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
