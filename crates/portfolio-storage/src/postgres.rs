//! PostgreSQL store
//!
//! Production [`PortfolioStore`] backed by a `sqlx` connection pool.
//!
//! Aggregate reads run as five independent queries on the pool. Seeding
//! runs inside one transaction that first locks the `profile` table, so two
//! processes starting together cannot both observe an empty store, and a
//! failure part-way leaves nothing behind.

use portfolio_core::{
    ContactMessage, Education, Experience, NewContactMessage, PortfolioData, Profile, Project,
    SeedData, Skill,
};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::schema;
use crate::traits::{PortfolioStore, SeedCounts, SeedOutcome};

const SELECT_PROFILE: &str = "SELECT id, name, headline, summary, location, email, phone, \
     github_url, linkedin_url, hero_image_url, about_image_url FROM profile ORDER BY id LIMIT 1";
const SELECT_EXPERIENCE: &str = "SELECT id, title, company, location, start_date, end_date, \
     description FROM experience ORDER BY id";
const SELECT_EDUCATION: &str =
    "SELECT id, degree, institution, location, year FROM education ORDER BY id";
const SELECT_SKILLS: &str = "SELECT id, category, items FROM skills ORDER BY id";
const SELECT_PROJECTS: &str = "SELECT id, title, description, link, tags FROM projects ORDER BY id";
const SELECT_CONTACT_MESSAGES: &str =
    "SELECT id, name, email, message, created_at FROM contact_messages ORDER BY id";

/// Connection settings for [`PgStore`]
#[derive(Clone)]
pub struct PgStoreConfig {
    /// PostgreSQL connection string
    pub url: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
    /// How long to wait for a pooled connection
    pub connect_timeout: Duration,
}

impl PgStoreConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

// The URL usually embeds credentials.
impl fmt::Debug for PgStoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgStoreConfig")
            .field("url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// PostgreSQL-backed portfolio store
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Open a pool and verify connectivity.
    pub async fn connect(config: &PgStoreConfig) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect(&config.url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        info!(
            max_connections = config.max_connections,
            "Connected to PostgreSQL"
        );

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl PortfolioStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn prepare_schema(&self) -> StoreResult<()> {
        for statement in schema::ALL_TABLES {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| StoreError::Schema(e.to_string()))?;
        }
        debug!(tables = schema::ALL_TABLES.len(), "Schema ready");
        Ok(())
    }

    async fn get_portfolio(&self) -> StoreResult<PortfolioData> {
        let profile = sqlx::query_as::<_, Profile>(SELECT_PROFILE)
            .fetch_optional(&self.pool)
            .await?;
        let experience = sqlx::query_as::<_, Experience>(SELECT_EXPERIENCE)
            .fetch_all(&self.pool)
            .await?;
        let education = sqlx::query_as::<_, Education>(SELECT_EDUCATION)
            .fetch_all(&self.pool)
            .await?;
        let skills = sqlx::query_as::<_, Skill>(SELECT_SKILLS)
            .fetch_all(&self.pool)
            .await?;
        let projects = sqlx::query_as::<_, Project>(SELECT_PROJECTS)
            .fetch_all(&self.pool)
            .await?;

        Ok(PortfolioData::assemble(
            profile, experience, education, skills, projects,
        ))
    }

    async fn create_contact_message(&self, input: &NewContactMessage) -> StoreResult<()> {
        sqlx::query("INSERT INTO contact_messages (name, email, message) VALUES ($1, $2, $3)")
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn seed_if_empty(&self, seed: &SeedData) -> StoreResult<SeedOutcome> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("LOCK TABLE profile IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM profile)")
            .fetch_one(&mut *tx)
            .await?;
        if exists {
            tx.rollback().await?;
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let profile = &seed.profile;
        sqlx::query(
            "INSERT INTO profile (name, headline, summary, location, email, phone, github_url, \
             linkedin_url, hero_image_url, about_image_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(&profile.name)
        .bind(&profile.headline)
        .bind(&profile.summary)
        .bind(&profile.location)
        .bind(&profile.email)
        .bind(&profile.phone)
        .bind(&profile.github_url)
        .bind(&profile.linkedin_url)
        .bind(&profile.hero_image_url)
        .bind(&profile.about_image_url)
        .execute(&mut *tx)
        .await?;

        for experience in &seed.experience {
            sqlx::query(
                "INSERT INTO experience (title, company, location, start_date, end_date, \
                 description) VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(&experience.title)
            .bind(&experience.company)
            .bind(&experience.location)
            .bind(&experience.start_date)
            .bind(&experience.end_date)
            .bind(&experience.description)
            .execute(&mut *tx)
            .await?;
        }

        for education in &seed.education {
            sqlx::query(
                "INSERT INTO education (degree, institution, location, year) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(&education.degree)
            .bind(&education.institution)
            .bind(&education.location)
            .bind(&education.year)
            .execute(&mut *tx)
            .await?;
        }

        for skill in &seed.skills {
            sqlx::query("INSERT INTO skills (category, items) VALUES ($1, $2)")
                .bind(&skill.category)
                .bind(&skill.items)
                .execute(&mut *tx)
                .await?;
        }

        for project in &seed.projects {
            sqlx::query(
                "INSERT INTO projects (title, description, link, tags) VALUES ($1, $2, $3, $4)",
            )
            .bind(&project.title)
            .bind(&project.description)
            .bind(&project.link)
            .bind(&project.tags)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(SeedOutcome::Seeded(SeedCounts::of(seed)))
    }

    async fn contact_messages(&self) -> StoreResult<Vec<ContactMessage>> {
        let rows = sqlx::query_as::<_, ContactMessage>(SELECT_CONTACT_MESSAGES)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
