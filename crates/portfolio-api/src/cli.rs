//! Command-line interface
//!
//! ```bash
//! # Serve against PostgreSQL
//! DATABASE_URL=postgres://localhost/portfolio portfolio-api serve --port 5000
//!
//! # Local preview without a database
//! portfolio-api serve --store memory --log-format pretty
//!
//! # Seed a database and exit
//! portfolio-api seed --seed-file profile.yaml
//!
//! # Inspect received contact messages
//! portfolio-api messages
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use portfolio_storage::PgStoreConfig;

use crate::config::{ConfigError, ServerConfig, StoreSettings};

#[derive(Debug, Parser)]
#[command(name = "portfolio-api")]
#[command(about = "Portfolio site API - aggregate read and contact submission")]
#[command(version)]
pub struct Cli {
    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Prepare the store, seed it if empty, then start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "5000", env = "PORT")]
        port: u16,

        /// Allowed CORS origin (repeatable); omit for same-origin only
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,

        /// JSON or YAML file replacing the built-in seed dataset
        #[arg(long)]
        seed_file: Option<PathBuf>,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Prepare the store and seed it if empty, then exit
    Seed {
        /// JSON or YAML file replacing the built-in seed dataset
        #[arg(long)]
        seed_file: Option<PathBuf>,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Print stored contact messages as JSON
    Messages {
        #[command(flatten)]
        store: StoreArgs,
    },
}

/// Store selection and connection options
#[derive(Debug, Clone, Args)]
pub struct StoreArgs {
    /// Storage backend
    #[arg(long, value_enum, default_value_t = StoreBackend::Postgres, env = "PORTFOLIO_STORE")]
    pub store: StoreBackend,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, default_value = "5")]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection
    #[arg(long, default_value = "10")]
    pub connect_timeout_secs: u64,
}

impl StoreArgs {
    /// Resolve into validated store settings
    pub fn settings(&self) -> Result<StoreSettings, ConfigError> {
        match self.store {
            StoreBackend::Memory => Ok(StoreSettings::Memory),
            StoreBackend::Postgres => {
                let url = self
                    .database_url
                    .as_deref()
                    .filter(|url| !url.trim().is_empty())
                    .ok_or(ConfigError::MissingDatabaseUrl)?;
                if self.max_connections == 0 {
                    return Err(ConfigError::invalid_value(
                        "max-connections",
                        "must be at least 1",
                    ));
                }
                Ok(StoreSettings::Postgres(
                    PgStoreConfig::new(url)
                        .with_max_connections(self.max_connections)
                        .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs)),
                ))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreBackend {
    /// PostgreSQL through DATABASE_URL
    Postgres,
    /// In-process tables, lost on exit
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl Commands {
    /// Server settings for `serve`; `None` for other commands
    pub fn server_config(&self) -> Option<ServerConfig> {
        match self {
            Commands::Serve {
                host,
                port,
                cors_origins,
                ..
            } => Some(ServerConfig {
                host: host.clone(),
                port: *port,
                cors_origins: cors_origins.clone(),
                ..ServerConfig::default()
            }),
            _ => None,
        }
    }
}
