//! haversine CLI - average great-circle distance over a pairs document.

use std::{num::NonZeroUsize, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use haversine::{
    avec::{self, Config, Source, file},
    sans::formula::EARTH_RADIUS_KM,
};
use tracing_subscriber::EnvFilter;

/// Average the haversine distance over every coordinate pair in a document.
///
/// The document must look like `{"pairs":[{"x0":..., "y0":..., "x1":...,
/// "y1":...}, ...]}`, with one record per line and every coordinate written
/// with exactly six fractional digits.
#[derive(Parser, Debug)]
#[command(name = "haversine")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Pairs document to average.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Number of worker threads (defaults to available parallelism).
    #[arg(short, long, env = "HAVERSINE_THREADS")]
    threads: Option<NonZeroUsize>,

    /// Sphere radius; the average is reported in the same unit.
    #[arg(short, long, default_value_t = EARTH_RADIUS_KM)]
    radius: f64,

    /// Read the file into memory instead of mapping it.
    #[arg(long)]
    no_mmap: bool,

    /// Also run the generic JSON decoder and report its result.
    #[arg(long)]
    baseline: bool,

    /// Log progress to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let mut config = Config {
        radius: cli.radius,
        source: if cli.no_mmap { Source::Read } else { Source::Map },
        ..Config::default()
    };
    if let Some(threads) = cli.threads {
        config = config.with_partitions(threads.get());
    }

    let start = Instant::now();

    let buffer = file::open(&cli.input, config.source)
        .with_context(|| format!("Failed to open {}", cli.input.display()))?;
    let summary = avec::decode_slice(&buffer, &config)
        .with_context(|| format!("Failed to decode {}", cli.input.display()))?;

    let elapsed = start.elapsed();

    println!("Result: {}", summary.average);
    println!("Threads = {}", summary.partitions);
    println!("Count = {}", summary.count);
    println!("Total = {elapsed:?}");
    println!(
        "Throughput = {:.0} haversines/second",
        summary.count as f64 / elapsed.as_secs_f64()
    );

    if cli.baseline {
        report_baseline(&buffer, config.radius)
            .with_context(|| format!("Generic decode of {} failed", cli.input.display()))?;
    }

    Ok(())
}

#[cfg(feature = "baseline")]
fn report_baseline(buffer: &[u8], radius: f64) -> Result<()> {
    let start = Instant::now();
    let baseline = avec::baseline::decode(buffer, radius)?;
    let elapsed = start.elapsed();

    println!("Baseline: {}", baseline.average);
    println!("Baseline total = {elapsed:?}");

    Ok(())
}

#[cfg(not(feature = "baseline"))]
fn report_baseline(_: &[u8], _: f64) -> Result<()> {
    anyhow::bail!("built without the `baseline` feature")
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "haversine=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
