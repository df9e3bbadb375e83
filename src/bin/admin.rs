//! CLI administration tool for the short URL service.
//!
//! Performs administrative operations against the PostgreSQL backend without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Delete every short URL and restart the counter
//! cargo run --bin shorturl-admin -- reset
//!
//! # View record count and counter value
//! cargo run --bin shorturl-admin -- stats
//!
//! # Check database connection
//! cargo run --bin shorturl-admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use shorturl::application::services::UrlService;
use shorturl::config::mask_connection_string;
use shorturl::domain::entities::IdScheme;
use shorturl::infrastructure::persistence::{PgCounterRepository, PgUrlRepository};
use shorturl::server::build_url_service;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing the short URL service.
#[derive(Parser)]
#[command(name = "shorturl-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Delete all short URLs and reset the counter
    Reset {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Reset { yes } => handle_reset(&pool, yes).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await?,
    }

    Ok(())
}

/// The server's [`UrlService`] over `pool`. Only storage operations are used.
fn url_service(pool: &PgPool) -> UrlService {
    let pool = Arc::new(pool.clone());
    build_url_service(
        Arc::new(PgUrlRepository::new(pool.clone())),
        Arc::new(PgCounterRepository::new(pool)),
        Duration::from_secs(5),
        IdScheme::default(),
    )
}

/// Deletes every record and restarts the counter at zero.
///
/// Asks for confirmation (default: No) unless `--yes` is given.
async fn handle_reset(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Reset Short URLs".bright_blue().bold());
    println!();

    let service = url_service(pool);

    let count = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!(
        "  Records to delete: {}",
        count.to_string().bright_yellow().bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete all short URLs and reset the counter?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let summary = service
        .reset()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to reset: {}", e))?;

    println!();
    println!(
        "{} ({} removed)",
        "✅ Database cleared and counter reset!".green().bold(),
        summary.removed
    );
    println!();

    Ok(())
}

/// Displays the record count and current counter value.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let service = url_service(pool);

    let records = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    let counter = service
        .counter_value()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!(
        "  Short URLs: {}",
        records.to_string().bright_green().bold()
    );
    match counter {
        Some(value) => println!("  Counter:    {}", value.to_string().bright_green().bold()),
        None => println!("  Counter:    {}", "not initialized".yellow()),
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  URL:        {}", mask_connection_string(database_url).bright_black());
            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
