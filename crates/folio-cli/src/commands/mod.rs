//! CLI command definitions and dispatch.

pub mod config;
pub mod migrate;
pub mod password;
pub mod photos;
pub mod seed;
pub mod serve;

use anyhow::Context;
use clap::{Parser, Subcommand};

use folio_core::config::AppConfig;

use crate::output::OutputFormat;

/// Folio: bilingual photography portfolio server
#[derive(Debug, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding default.toml and the environment overlays
    #[arg(long, default_value = "config", env = "FOLIO_CONFIG_DIR")]
    pub config_dir: String,

    /// Environment overlay to load (config/{env}.toml)
    #[arg(short, long, default_value = "development", env = "FOLIO_ENV")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Apply pending PostgreSQL migrations
    Migrate,
    /// Insert the sample gallery into an empty store
    Seed,
    /// Hash an admin password for auth.admin_password_hash
    HashPassword(password::HashPasswordArgs),
    /// Inspect the gallery
    Photos(photos::PhotosArgs),
    /// Inspect configuration
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> anyhow::Result<()> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, self.load_config()?).await,
            Commands::Migrate => migrate::execute(self.load_config()?).await,
            Commands::Seed => seed::execute(self.load_config()?).await,
            Commands::HashPassword(args) => password::execute(args),
            Commands::Photos(args) => photos::execute(args, self.load_config()?, self.format).await,
            Commands::Config(args) => config::execute(args, self.load_config()?, self.format),
        }
    }

    /// Load configuration for the selected environment.
    pub fn load_config(&self) -> anyhow::Result<AppConfig> {
        tracing::debug!(config_dir = %self.config_dir, env = %self.env, "Loading configuration");
        AppConfig::load_from(&self.config_dir, &self.env).with_context(|| {
            format!(
                "Failed to load configuration from '{}' (env: {})",
                self.config_dir, self.env
            )
        })
    }
}
