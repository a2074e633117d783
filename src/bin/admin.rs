//! CLI administration tool for link-shortener.
//!
//! Inspects stored links and performs database operations without going
//! through the HTTP interface.
//!
//! # Usage
//!
//! ```bash
//! # List links, 20 per page
//! cargo run --bin admin -- links list --page 2
//!
//! # Show a single link
//! cargo run --bin admin -- links show abc123
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `MYSQL_USER` / `MYSQL_PASSWORD` / `MYSQL_HOST` / `MYSQL_DATABASE`
//! - `WEBSITE_URL` (optional): used to print full short URLs

use link_shortener::application::services::short_url;
use link_shortener::config::Config;
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::infrastructure::persistence::MySqlLinkRepository;
use link_shortener::server::run_migrations;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::MySqlPool;
use std::sync::Arc;

/// CLI tool for managing link-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect stored links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link inspection subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List links ordered by key
    List {
        /// Page number (1-indexed)
        #[arg(short, long, default_value_t = 1)]
        page: i64,

        /// Links per page
        #[arg(short = 's', long, default_value_t = 20)]
        page_size: i64,
    },

    /// Show a single link
    Show {
        /// Short key
        key: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;
    let website_url = std::env::var("WEBSITE_URL").ok();

    let pool = MySqlPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let repo = MySqlLinkRepository::new(Arc::new(pool.clone()));

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &repo, website_url).await?,
        Commands::Stats => handle_stats(&repo).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link inspection commands.
async fn handle_link_action(
    action: LinkAction,
    repo: &MySqlLinkRepository,
    website_url: Option<String>,
) -> Result<()> {
    match action {
        LinkAction::List { page, page_size } => list_links(repo, page, page_size).await,
        LinkAction::Show { key } => show_link(repo, &key, website_url.as_deref()).await,
    }
}

/// Lists one page of links.
///
/// # Output Format
///
/// ```text
/// Links (page 1)
///
///   Key     Visits  URL
///   ----------------------------------------------------------
///   aB3xY9  12      https://example.com/some/long/path
/// ```
async fn list_links(repo: &MySqlLinkRepository, page: i64, page_size: i64) -> Result<()> {
    if page < 1 || page_size < 1 {
        anyhow::bail!("--page and --page-size must be at least 1");
    }

    println!(
        "{}",
        format!("Links (page {})", page).bright_blue().bold()
    );
    println!();

    let links = repo
        .list(page, page_size)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<7} {:<7} {}",
        "Key".bright_white().bold(),
        "Visits".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "-".repeat(58).bright_black());

    for link in &links {
        println!(
            "  {:<7} {:<7} {}",
            link.id.cyan(),
            link.count.to_string().bright_green(),
            link.url
        );
    }

    println!();
    let total = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;
    println!("  Total: {}", total.to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Shows a single link with its short URL and visit count.
async fn show_link(
    repo: &MySqlLinkRepository,
    key: &str,
    website_url: Option<&str>,
) -> Result<()> {
    let link = repo
        .find_by_id(key)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Link not found")?;

    println!("  Key:    {}", link.id.cyan());
    println!("  URL:    {}", link.url);
    if let Some(base) = website_url {
        println!("  Short:  {}", short_url(base, &link.id).bright_yellow());
    }
    println!("  Visits: {}", link.count.to_string().bright_green().bold());

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of links
/// - Total number of visits across all links
async fn handle_stats(repo: &MySqlLinkRepository) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let links_count = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    let visits = repo
        .total_visits()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to sum visits: {}", e))?;

    println!(
        "  Links:   {}",
        links_count.to_string().bright_green().bold()
    );
    println!("  Visits:  {}", visits.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &MySqlPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").execute(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            run_migrations(pool).await?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
