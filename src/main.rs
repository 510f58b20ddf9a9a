//! Discount Scout main entry point
//!
//! This is the command-line interface for the Discount Scout scanner.

use anyhow::Context;
use clap::Parser;
use discount_scout::config::{load_config_with_hash, validate_seed_url, Config};
use discount_scout::output::{format_records, print_summary, read_records};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Discount Scout: finds discounted products linked from a shop listing page
///
/// Discount Scout fetches the seed page, checks each on-site link for a
/// product page, reads its prices, and appends every discounted product to
/// the configured CSV file.
#[derive(Parser, Debug)]
#[command(name = "discount-scout")]
#[command(version)]
#[command(about = "Finds discounted products on a shop site", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Start from this listing page instead of the configured seed URL
    #[arg(long, value_name = "URL")]
    seed: Option<String>,

    /// Validate config and show what would be scanned without fetching anything
    #[arg(long, conflicts_with = "show")]
    dry_run: bool,

    /// Print the rows already in the CSV store and exit
    #[arg(long, conflicts_with = "dry_run")]
    show: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if let Some(seed) = cli.seed {
        validate_seed_url(&seed).context("invalid --seed URL")?;
        config.crawl.seed_url = seed;
    }

    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.show {
        handle_show(&config)?;
    } else {
        handle_scan(&config, cli.verbose > 0).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("discount_scout=info,warn"),
            1 => EnvFilter::new("discount_scout=debug,info"),
            2 => EnvFilter::new("discount_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the resolved configuration
fn handle_dry_run(config: &Config) {
    println!("=== Discount Scout Dry Run ===\n");

    println!("Crawl:");
    println!("  Seed URL: {}", config.crawl.seed_url);
    println!("  Discount rule: {:?}", config.crawl.discount_rule);

    println!("\nSite rules:");
    println!("  Domain token: {}", config.site.domain_token);
    println!("  Product marker class: {}", config.site.product_marker_class);
    println!("  Current price class: {}", config.site.current_price_class);
    println!("  Original price class: {}", config.site.original_price_class);

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);
    println!("  Timeout: {}s", config.http.timeout_secs);

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);

    println!("\n✓ Configuration is valid");
}

/// Handles the --show mode: prints the CSV store
fn handle_show(config: &Config) -> anyhow::Result<()> {
    let path = Path::new(&config.output.csv_path);
    let records = read_records(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    println!("{} rows in {}\n", records.len(), path.display());
    print!("{}", format_records(&records));

    Ok(())
}

/// Handles the main scan: pipeline, export, summary
///
/// The seed page's full link set is printed when `show_links` is set (-v).
async fn handle_scan(config: &Config, show_links: bool) -> anyhow::Result<()> {
    tracing::info!("Starting scan from {}", config.crawl.seed_url);

    let report = discount_scout::run(config)
        .await
        .context("discount scan failed")?;

    print_summary(&report, show_links);
    tracing::info!("Scan completed successfully");

    Ok(())
}
