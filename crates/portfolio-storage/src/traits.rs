//! Store contract

use portfolio_core::{ContactMessage, NewContactMessage, PortfolioData, SeedData};
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

/// Core trait for portfolio stores
///
/// Implementations must be thread-safe; one instance is shared by every
/// request handler.
///
/// # Error Handling
///
/// Every failure of the underlying store surfaces as a `StoreError`. A
/// missing profile row is not a failure: `get_portfolio` substitutes the
/// placeholder profile instead.
#[async_trait::async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Short backend name for logs
    fn backend(&self) -> &'static str;

    /// Create the backing tables if they do not exist.
    ///
    /// Default implementation does nothing (for stores without a schema).
    async fn prepare_schema(&self) -> StoreResult<()> {
        Ok(())
    }

    /// Read the profile and every experience, education, skill and project
    /// row as one aggregate.
    async fn get_portfolio(&self) -> StoreResult<PortfolioData>;

    /// Append exactly one contact message. The store assigns `id` and
    /// `createdAt`.
    async fn create_contact_message(&self, input: &NewContactMessage) -> StoreResult<()>;

    /// Insert `seed` unless a profile row already exists.
    ///
    /// One existence check gates all five insert groups; when it finds a
    /// profile nothing is written.
    async fn seed_if_empty(&self, seed: &SeedData) -> StoreResult<SeedOutcome>;

    /// All stored contact messages, oldest first. Operator inspection only.
    async fn contact_messages(&self) -> StoreResult<Vec<ContactMessage>>;
}

/// Result of a seeding attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeedOutcome {
    /// A profile was already present; nothing written
    AlreadySeeded,
    /// The dataset was inserted
    Seeded(SeedCounts),
}

impl SeedOutcome {
    pub fn is_seeded(&self) -> bool {
        matches!(self, SeedOutcome::Seeded(_))
    }
}

/// Rows inserted per entity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCounts {
    pub profiles: usize,
    pub experience: usize,
    pub education: usize,
    pub skills: usize,
    pub projects: usize,
}

impl SeedCounts {
    pub fn of(seed: &SeedData) -> Self {
        Self {
            profiles: 1,
            experience: seed.experience.len(),
            education: seed.education.len(),
            skills: seed.skills.len(),
            projects: seed.projects.len(),
        }
    }
}
