//! Command-line lookup for social-links.
//!
//! Runs the same scrape-and-classify pipeline as the web form, once, and
//! prints the result.
//!
//! # Usage
//!
//! ```bash
//! # Look up a domain (OPENAI_API_KEY from the environment or .env)
//! cargo run --bin lookup -- example.com
//!
//! # Pass the key explicitly
//! cargo run --bin lookup -- https://example.com --api-key sk-...
//!
//! # Machine-readable output
//! cargo run --bin lookup -- example.com --json
//!
//! # Prompt for the domain
//! cargo run --bin lookup
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `social_links::config`), plus `OPENAI_API_KEY`
//! unless `--api-key` is given. Logs go to stderr and default to `warn`.

use social_links::config::Config;
use social_links::domain::entities::{ExtractionPath, LinkLookup};
use social_links::domain::ports::CredentialProvider;
use social_links::infrastructure::credentials::{EnvCredentials, StaticCredentials};
use social_links::server::build_service;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::Input;
use std::sync::Arc;

/// Find the social-media links on a web page.
#[derive(Parser)]
#[command(name = "lookup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Domain or URL to inspect (e.g. "example.com"); prompted for when omitted
    domain: Option<String>,

    /// API key for the classification endpoint (overrides OPENAI_API_KEY)
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env();
    config.validate()?;

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&log_level)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let domain = match cli.domain {
        Some(d) => d,
        None => Input::new()
            .with_prompt("Domain (e.g. example.com)")
            .interact_text()?,
    };

    let credentials: Arc<dyn CredentialProvider> = match cli.api_key {
        Some(key) => Arc::new(StaticCredentials::new(key)),
        None => Arc::new(EnvCredentials::default()),
    };

    let service = build_service(&config, credentials)?;

    if !cli.json {
        println!("{} {}", "🔎 Looking up".bright_blue().bold(), domain.cyan());
    }

    let lookup = service
        .find_social_links(&domain)
        .await
        .with_context(|| format!("Lookup failed for {domain}"))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&lookup)?);
    } else {
        print_lookup(&lookup);
    }

    Ok(())
}

/// Prints a human-readable summary of a lookup.
fn print_lookup(lookup: &LinkLookup) {
    println!();
    println!("  Target:  {}", lookup.target.cyan());
    println!("  Scraped: {} links", lookup.scraped.to_string().bright_white());

    let path = match lookup.social.path {
        ExtractionPath::Structured => "structured JSON reply".green(),
        ExtractionPath::LineScan => "line scan fallback".yellow(),
        ExtractionPath::Skipped => "not classified (no links)".dimmed(),
    };
    println!("  Parsed:  {}", path);
    println!();

    if lookup.social.links.is_empty() {
        println!("{}", "No social media links found.".yellow());
        return;
    }

    println!("{}", "Social media links:".bright_white().bold());
    for link in &lookup.social.links {
        println!("  • {}", link.bright_cyan());
    }
    println!();
}
