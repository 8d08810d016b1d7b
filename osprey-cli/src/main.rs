//! Osprey CLI
//!
//! Independent OSINT utilities under one binary: dual-route leak search,
//! Indian mobile-prefix lookup, and PhoneInfoga link cleanup.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use osprey_core::{report, DEFAULT_RESULT_PATH};
use osprey_net::{RouteMode, SearchConfig};
use osprey_phone::{dedupe_by_category, extract_links, format_report, keep_set, PrefixError, PrefixTable};

#[derive(Parser)]
#[command(name = "osprey")]
#[command(author, version, about = "Osprey: small OSINT toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (0-3)
    #[arg(short, long, default_value = "1")]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Search breach indexes for a leaked credential
    Search {
        /// Email, phone or username to search
        query: String,

        /// Force the Tor/.onion mirror
        #[arg(long, conflicts_with = "clearnet")]
        tor: bool,

        /// Force the clearnet endpoint
        #[arg(long)]
        clearnet: bool,

        /// Result file (default: output/leaksearch_result.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Look up the operator and circle of an Indian mobile number
    Prefix {
        /// 10-digit mobile number
        number: String,

        /// Prefix table CSV (defaults to the bundled table)
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Pretty-print PhoneInfoga links read from stdin
    Links {
        /// Comma-separated block names to keep
        #[arg(long, default_value = "Social media,Reputation,Individuals")]
        keep: String,
    },

    /// Extract PhoneInfoga URL blocks from a file into structured JSON
    Extract {
        /// Input PhoneInfoga result file (text)
        #[arg(long = "in", short, default_value = "output/result.txt")]
        input: PathBuf,

        /// Destination JSON file
        #[arg(long = "out", short, default_value = "output/clean_socials.json")]
        output: PathBuf,

        /// Comma-separated block names to keep
        #[arg(long, short, default_value = "Social media,Reputation")]
        keep: String,
    },

    /// Check Tor connection status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    match cli.command {
        Commands::Search {
            query,
            tor,
            clearnet,
            output,
        } => run_search(&query, tor, clearnet, output).await?,
        Commands::Prefix { number, csv } => run_prefix(&number, csv)?,
        Commands::Links { keep } => run_links(&keep)?,
        Commands::Extract { input, output, keep } => run_extract(&input, &output, &keep)?,
        Commands::Status => check_status().await,
    }

    Ok(())
}

async fn run_search(query: &str, tor: bool, clearnet: bool, output: Option<PathBuf>) -> Result<()> {
    if query.trim().is_empty() {
        bail!("Query must not be empty");
    }

    let mode = if tor {
        RouteMode::OnionOnly
    } else if clearnet {
        RouteMode::ClearnetOnly
    } else {
        RouteMode::Auto
    };

    let config = SearchConfig::default();
    let out_path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_RESULT_PATH));

    println!("🔍 Query: {}", query);

    match osprey_net::search_and_save(query, mode, &config, &out_path).await? {
        Some(hit) => {
            println!("✅ {} hits found via {}", hit.records.len(), hit.route);
            println!("📄 Results saved to: {}", out_path.display());
        }
        None => {
            // still exit 0: the absent file is the signal
            println!("❌ Finished: no data found on any route.");
        }
    }

    Ok(())
}

fn run_prefix(number: &str, csv: Option<PathBuf>) -> Result<()> {
    let table = match csv {
        Some(path) => PrefixTable::from_path(&path)
            .with_context(|| format!("Failed to load prefix table: {}", path.display()))?,
        None => PrefixTable::bundled()?,
    };

    match table.lookup(number) {
        Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
        Err(e @ PrefixError::InvalidNumber) => {
            let error = serde_json::json!({ "error": e.to_string() });
            println!("{}", serde_json::to_string_pretty(&error)?);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn run_links(keep: &str) -> Result<()> {
    let keep = keep_set(keep);
    let stdin = io::stdin();
    let rows = extract_links(stdin.lock(), &keep)?;
    print!("{}", format_report(&dedupe_by_category(&rows)));
    Ok(())
}

fn run_extract(input: &Path, output: &Path, keep: &str) -> Result<()> {
    let keep = keep_set(keep);

    let file = File::open(input)
        .with_context(|| format!("Input file not found: {}", input.display()))?;
    let rows = extract_links(BufReader::new(file), &keep)?;

    report::save_json(output, &rows)?;
    println!("✅ Extracted {} URLs → {}", rows.len(), output.display());

    Ok(())
}

async fn check_status() {
    println!("🔌 Checking Tor connection...\n");

    let config = SearchConfig::default();
    let proxy = config.socks_addr.clone().unwrap_or_default();

    match osprey_net::check_tor_connection(&config).await {
        Ok(true) => {
            println!("✅ Tor is running and accessible");
            println!("   Proxy: {}", proxy);
        }
        Ok(false) => {
            println!("❌ Tor is not accessible");
            println!("   Expected proxy at: {}", proxy);
            println!("\n   To install Tor:");
            println!("   - Linux: sudo apt install tor");
            println!("   - Mac: brew install tor");
            println!("   - Then start: sudo systemctl start tor (or brew services start tor)");
        }
        Err(e) => {
            println!("❌ Error checking Tor: {}", e);
        }
    }
}
