//! Portfolio Storage
//!
//! Single point of access to persisted portfolio state. The [`PortfolioStore`]
//! trait defines the contract; [`PgStore`] is the production implementation
//! over PostgreSQL and [`MemoryStore`] keeps everything in process for local
//! preview and tests.
//!
//! ## Operations
//!
//! - `get_portfolio`: profile plus all experience, education, skill and
//!   project rows, with the placeholder profile substituted when none exists
//! - `create_contact_message`: append one contact submission
//! - `seed_if_empty`: insert the seed dataset unless a profile already exists
//!
//! Reads take no transaction across tables. Nothing is retried.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod schema;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use postgres::{PgStore, PgStoreConfig};
pub use traits::{PortfolioStore, SeedCounts, SeedOutcome};

use std::sync::Arc;

/// Store handle shared across request handlers
pub type SharedStore = Arc<dyn PortfolioStore>;
