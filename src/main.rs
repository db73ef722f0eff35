//! Mailsift main entry point
//!
//! Command-line interface for extracting email addresses from the
//! websites listed in a shared spreadsheet.

use clap::Parser;
use mailsift::config::{load_config_with_hash, Config};
use mailsift::output::{copy_block, export_csv, render_table};
use mailsift::runner::{ConsoleReporter, Coordinator};
use mailsift::sheet::load_sheet;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Mailsift: extract email addresses from websites listed in a spreadsheet
///
/// Takes a publicly shared Google Sheets link, reads the website column,
/// visits every site with the configured extraction strategies, and
/// writes a Website,Emails results table.
#[derive(Parser, Debug)]
#[command(name = "mailsift")]
#[command(version = "1.0.0")]
#[command(about = "Extract email addresses from websites listed in a spreadsheet", long_about = None)]
struct Cli {
    /// Shared spreadsheet link (must be viewable by anyone with the link)
    #[arg(value_name = "SHEET_URL")]
    sheet: String,

    /// Path to TOML configuration file (defaults apply if omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Name of the column holding one website per row
    #[arg(long, value_name = "NAME")]
    column: Option<String>,

    /// Path the results CSV is written to
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Print a tab-separated copy block after the run
    #[arg(long)]
    copy: bool,

    /// Load the sheet and show what would be processed without fetching
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or run on defaults
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    // Command-line overrides
    if let Some(column) = &cli.column {
        config.output.website_column = column.clone();
    }
    if let Some(out) = &cli.out {
        config.output.results_path = out.display().to_string();
    }

    let coordinator = Coordinator::new(config.clone())?;

    // Input stage: any failure here halts before processing starts
    let table = load_sheet(coordinator.engine().client(), &cli.sheet).await?;
    let websites = table.websites(&config.output.website_column)?;
    tracing::info!("Loaded {} websites from spreadsheet", websites.len());

    if cli.dry_run {
        handle_dry_run(&config, &websites);
        return Ok(());
    }

    // Run discovery, strictly one site at a time
    let mut reporter = ConsoleReporter;
    let summary = coordinator.run(&websites, &mut reporter).await;

    tracing::info!(
        "Extraction complete: {} emails across {} sites in {:.1}s ({} hit the time budget)",
        summary.total_emails,
        summary.records.len(),
        summary.elapsed.as_secs_f64(),
        summary.sites_timed_out
    );

    print!("{}", render_table(&summary.records));

    export_csv(&summary.records, std::path::Path::new(&config.output.results_path))?;

    if cli.copy {
        println!("\nCopy the block below into your sheet:\n");
        println!("{}", copy_block(&summary.records));
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("mailsift=info,warn"),
            1 => EnvFilter::new("mailsift=debug,info"),
            2 => EnvFilter::new("mailsift=trace,debug"),
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

/// Handles the --dry-run mode: shows what would be processed
fn handle_dry_run(config: &Config, websites: &[String]) {
    println!("=== Mailsift Dry Run ===\n");

    println!("Discovery:");
    println!("  Page timeout: {}s", config.discovery.page_timeout_secs);
    println!("  Site budget: {}s", config.discovery.site_budget_secs);
    println!("  Crawl depth: {}", config.discovery.crawl_depth);
    println!("  Crawl page cap: {}", config.discovery.crawl_max_pages);

    println!("\nActive strategies:");
    for (name, enabled) in [
        ("body", config.strategies.body),
        ("metadata", config.strategies.metadata),
        ("scripts", config.strategies.scripts),
        ("comments", config.strategies.comments),
        ("mailto", config.strategies.mailto),
        ("subpages", config.strategies.subpages),
        ("crawl", config.strategies.crawl),
        ("whois-fallback", config.strategies.whois_fallback),
        ("rendered", config.strategies.rendered),
    ] {
        if enabled {
            println!("  - {}", name);
        }
    }

    println!("\nWebsites ({}):", websites.len());
    for website in websites {
        println!("  - {}", website);
    }

    println!("\nOutput:");
    println!("  Results: {}", config.output.results_path);

    println!("\n✓ Would process {} websites", websites.len());
}
