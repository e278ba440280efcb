//! haversine-generate CLI - write a random coordinate pair document.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use haversine_generate::write_pairs;
use rand::{SeedableRng, rngs::StdRng};

/// Write a random coordinate pair document.
#[derive(Parser, Debug)]
#[command(name = "haversine-generate")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of pairs to write.
    #[arg(short, long, default_value_t = 10_000_000)]
    count: usize,

    /// Output file path (stdout if omitted).
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Seed for a reproducible document.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut w: BufWriter<Box<dyn Write>> = BufWriter::new(match &cli.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    });

    write_pairs(&mut w, cli.count, &mut rng)?;
    w.flush()?;

    Ok(())
}
