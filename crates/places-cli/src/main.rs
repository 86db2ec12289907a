mod collect;
mod export;
mod map;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "places-cli")]
#[command(about = "Collect highly rated places near a point and render a drawing map")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search, filter and enrich places, then export them to a spreadsheet
    Collect {
        /// Search keyword; repeat to replace the configured list
        #[arg(long = "keyword")]
        keywords: Vec<String>,

        /// Minimum rating (inclusive) for a place to be kept
        #[arg(long, value_parser = parse_rating)]
        min_rating: Option<f64>,

        /// Minimum number of reviews for a place to be kept
        #[arg(long)]
        min_reviews: Option<u32>,

        /// Stop after this many places have been kept
        #[arg(long, value_parser = parse_limit)]
        limit: Option<usize>,

        /// Spreadsheet output path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Run the search and enrichment but print a summary instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },
    /// Render the interactive drawing map to an HTML file
    Map {
        /// HTML output path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Initial zoom level
        #[arg(long)]
        zoom: Option<u8>,

        /// Write the file without opening it in the browser
        #[arg(long)]
        no_open: bool,
    },
}

fn parse_rating(raw: &str) -> Result<f64, String> {
    places_core::config::parse_min_rating(raw)
}

fn parse_limit(raw: &str) -> Result<usize, String> {
    places_core::config::parse_limit(raw)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = places_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Collect {
            keywords,
            min_rating,
            min_reviews,
            limit,
            output,
            dry_run,
        } => {
            if !keywords.is_empty() {
                config.keywords = keywords;
            }
            if let Some(min_rating) = min_rating {
                config.min_rating = min_rating;
            }
            if let Some(min_reviews) = min_reviews {
                config.min_reviews = min_reviews;
            }
            if limit.is_some() {
                config.limit = limit;
            }
            if let Some(output) = output {
                config.output_path = output;
            }
            collect::run_collect(&config, dry_run).await
        }
        Commands::Map {
            output,
            zoom,
            no_open,
        } => {
            if let Some(output) = output {
                config.map.output_path = output;
            }
            if let Some(zoom) = zoom {
                config.map.zoom = zoom;
            }
            map::run_map(&config.map, !no_open)
        }
    }
}

#[cfg(test)]
mod tests;
