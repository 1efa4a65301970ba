//! Gallery inspection commands.

use anyhow::Context;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use folio_core::config::AppConfig;
use folio_entity::{Category, Photo};
use folio_service::PhotoStats;

use crate::output::{self, OutputFormat};

/// Arguments for photo commands
#[derive(Debug, Args)]
pub struct PhotosArgs {
    /// Photo subcommand
    #[command(subcommand)]
    pub command: PhotosCommand,
}

/// Photo subcommands
#[derive(Debug, Subcommand)]
pub enum PhotosCommand {
    /// List photos in display order
    List {
        /// Include hidden photos
        #[arg(short, long)]
        all: bool,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show gallery statistics
    Stats,
}

/// Photo display row for table output
#[derive(Debug, Serialize, Tabled)]
struct PhotoRow {
    id: i32,
    title: String,
    category: String,
    position: i32,
    hidden: bool,
    hero: bool,
    slug: String,
}

impl From<&Photo> for PhotoRow {
    fn from(photo: &Photo) -> Self {
        Self {
            id: photo.id,
            title: photo.title.clone(),
            category: photo.category.to_string(),
            position: photo.position,
            hidden: photo.hidden,
            hero: photo.hero_eligible,
            slug: photo.slug(),
        }
    }
}

/// Category display row for stats output
#[derive(Debug, Serialize, Tabled)]
struct CategoryRow {
    category: String,
    count: usize,
    percentage: String,
}

/// Execute photo commands
pub async fn execute(
    args: &PhotosArgs,
    config: AppConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let store = folio_database::open_store(&config.database).await?;

    match &args.command {
        PhotosCommand::List { all, category } => {
            let category = category
                .as_deref()
                .map(str::parse::<Category>)
                .transpose()
                .context("Unknown category")?;
            let rows: Vec<PhotoRow> = store
                .list(*all)
                .await?
                .iter()
                .filter(|p| category.is_none_or(|c| p.category == c))
                .map(PhotoRow::from)
                .collect();
            output::print_list(&rows, format);
        }
        PhotosCommand::Stats => {
            let stats = PhotoStats::from_photos(&store.list(true).await?);
            match format {
                OutputFormat::Json => output::print_json(&stats),
                OutputFormat::Table => {
                    output::print_kv("Total", &stats.total.to_string());
                    output::print_kv("Visible", &stats.visible.to_string());
                    output::print_kv("Hidden", &stats.hidden.to_string());
                    output::print_kv("Hero eligible", &stats.hero_eligible.to_string());
                    let rows: Vec<CategoryRow> = stats
                        .categories
                        .iter()
                        .map(|c| CategoryRow {
                            category: c.category.to_string(),
                            count: c.count,
                            percentage: format!("{:.1}%", c.percentage),
                        })
                        .collect();
                    output::print_list(&rows, format);
                }
            }
        }
    }
    Ok(())
}
