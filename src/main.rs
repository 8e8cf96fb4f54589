use clap::Parser;
use screenx::ingest::{load_reference_csv, require_columns};
use screenx::{MatchConfig, Matcher, Query, NAME_ADDRESS_THRESHOLD, NAME_ONLY_THRESHOLD};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Screen a name (and optionally an address) against a CSV watchlist
#[derive(Parser, Debug)]
#[command(name = "screenx")]
#[command(about = "Fuzzy name and address screening against a watchlist", long_about = None)]
struct Args {
    /// Path to the reference CSV (headered; "name" column required,
    /// "address" required when --address is given)
    watchlist: PathBuf,

    /// Party name to screen
    #[arg(short, long)]
    name: String,

    /// Party address to screen
    #[arg(short, long)]
    address: Option<String>,

    /// Similarity cutoff in [0,1]; defaults to 0.85 for name-only
    /// screening and 0.75 for name+address
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Keep only the best K matches
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Worker pool size (defaults to the number of CPUs)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("screenx v{}", env!("CARGO_PKG_VERSION"));
    info!("Watchlist: {:?}", args.watchlist);

    let reference = load_reference_csv(&args.watchlist)?;
    info!("Loaded {} reference rows", reference.len());

    let mut columns = vec!["name"];
    let mut query = Query::new().with_field("name", args.name.as_str());
    if let Some(address) = &args.address {
        columns.push("address");
        query = query.with_field("address", address.as_str());
    }
    require_columns(&reference, columns)?;

    let threshold = args.threshold.unwrap_or(if args.address.is_some() {
        NAME_ADDRESS_THRESHOLD
    } else {
        NAME_ONLY_THRESHOLD
    });

    let matcher = Matcher::new(MatchConfig {
        threshold,
        top_k: args.top_k,
        worker_count: args.workers,
        ..Default::default()
    })?;

    let results = matcher.run(&query, &reference)?;

    if results.is_empty() {
        println!("No records found with a similarity score greater than {threshold}.");
        return Ok(());
    }

    println!("Matching results (score > {threshold}):");
    for record in &results {
        print!("  row {:>6}  composite {:.4}", record.index, record.composite);
        for fs in &record.field_scores {
            print!("  {} {:.4} ({})", fs.field, fs.score, fs.raw);
        }
        println!();
    }
    info!("{} of {} rows matched", results.len(), reference.len());

    Ok(())
}
