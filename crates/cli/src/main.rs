//! Vitrine CLI - inspect the catalog, replay cart sessions, watch the hero.
//!
//! # Usage
//!
//! ```bash
//! # List products and New Arrivals cards
//! vitrine catalog
//!
//! # Show a product page
//! vitrine product 1
//!
//! # Run the navbar search filter
//! vitrine search denim
//!
//! # Replay a scripted cart session and print the drawer
//! vitrine demo
//! vitrine demo --json
//!
//! # Watch the hero carousel rotate for 30 seconds
//! vitrine hero --seconds 30
//! ```
//!
//! Configuration comes from `VITRINE_*` environment variables and `.env`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use vitrine_storefront::Storefront;
use vitrine_storefront::config::{LogConfig, StorefrontConfig};
use vitrine_storefront::telemetry;

mod commands;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "Vitrine storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products and cards
    Catalog,
    /// Show a product as its detail page would
    Product {
        /// Product id; unknown ids show the default product
        id: String,
    },
    /// Filter products and cards by name
    Search {
        /// Case-insensitive substring
        query: String,
    },
    /// Replay a scripted cart and wishlist session
    Demo {
        /// Print the final cart snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the hero carousel and print each slide change
    Hero {
        /// How long to run
        #[arg(short, long, default_value_t = 21)]
        seconds: u64,

        /// Jump to this slide before the first tick
        #[arg(long)]
        start: Option<usize>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let _ = telemetry::init_tracing(&LogConfig::default());
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    // A subscriber may already be installed when embedded; keep going.
    let _ = telemetry::init_tracing(&config.log);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let storefront = Storefront::from_config(config)?;
    match cli.command {
        Commands::Catalog => commands::catalog::list(&storefront),
        Commands::Product { id } => commands::catalog::product(&storefront, &id),
        Commands::Search { query } => commands::catalog::search(&storefront, &query),
        Commands::Demo { json } => commands::demo::run(storefront, json)?,
        Commands::Hero { seconds, start } => {
            commands::hero::watch(&storefront, seconds, start).await;
        }
    }
    Ok(())
}
