//! CLI tool for inspecting the application's route table.
//!
//! # Usage
//!
//! ```bash
//! # Print the route table with hrefs under the configured base
//! cargo run --bin routes -- list
//!
//! # Resolve a request path the way the server does
//! cargo run --bin routes -- resolve /app/register
//!
//! # Validate base URL and route table (non-zero exit on error)
//! cargo run --bin routes -- check
//! ```
//!
//! # Environment Variables
//!
//! - `BASE_URL` (optional): history base, overridden by `--base`

use page_router::application::services::{Navigator, PageRouter};
use page_router::domain::{RouteTable, WebHistory};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for inspecting page routes.
#[derive(Parser)]
#[command(name = "routes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// History base URL (defaults to `BASE_URL`, then `/`)
    #[arg(short, long, global = true)]
    base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table
    List,

    /// Resolve a request path against the route table
    Resolve {
        /// Full request path, base included (e.g. "/app/login")
        path: String,
    },

    /// Validate base URL and route table
    Check,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let base = match cli.base {
        Some(base) => base,
        None => std::env::var("BASE_URL").unwrap_or_else(|_| "/".to_string()),
    };

    match cli.command {
        Commands::List => list_routes(&base)?,
        Commands::Resolve { path } => resolve_path(&base, &path)?,
        Commands::Check => check(&base)?,
    }

    Ok(())
}

fn build_router(base: &str) -> Result<PageRouter> {
    let history = WebHistory::new(base).context("Invalid base URL")?;
    Ok(PageRouter::new(Arc::new(RouteTable::app()), history))
}

/// Prints every route in table order.
fn list_routes(base: &str) -> Result<()> {
    let router = build_router(base)?;

    println!("{}", "Routes".bright_blue().bold());
    println!();
    println!(
        "{:<12} {:<10} {}",
        "PATH".bright_white().bold(),
        "VIEW".bright_white().bold(),
        "HREF".bright_white().bold()
    );

    for route in router.routes() {
        println!(
            "{:<12} {:<10} {}",
            route.path.cyan(),
            route.view.name(),
            router.history().href(&route.path).dimmed()
        );
    }

    println!();
    println!("Total: {}", router.routes().len().to_string().bright_white());

    Ok(())
}

/// Resolves `path` as an initial page load would.
fn resolve_path(base: &str, path: &str) -> Result<()> {
    let router = build_router(base)?;

    if !router.history().contains(path) {
        println!(
            "{} {} is outside base {}",
            "✗".red(),
            path.yellow(),
            router.history().base().cyan()
        );
        return Ok(());
    }

    let navigator = Navigator::start_at(router, path);
    let Some(navigation) = navigator.current() else {
        return Ok(());
    };

    match navigation.view {
        Some(view) => println!(
            "{} {} → {} ({})",
            "✓".green(),
            navigation.location.cyan(),
            view.name().bright_white().bold(),
            view.title()
        ),
        None => println!(
            "{} {} matches no route",
            "✗".red(),
            navigation.location.yellow()
        ),
    }

    Ok(())
}

/// Rebuilds the route table through validation and checks the base.
fn check(base: &str) -> Result<()> {
    let history = WebHistory::new(base).context("Invalid base URL")?;
    println!("{} Base URL: {}", "✓".green(), display_base(&history).cyan());

    let table = RouteTable::new(RouteTable::app().routes().to_vec())
        .context("Route table failed validation")?;
    println!("{} Route table: {} routes", "✓".green(), table.len());

    Ok(())
}

fn display_base(history: &WebHistory) -> &str {
    match history.base() {
        "" => "/",
        base => base,
    }
}
