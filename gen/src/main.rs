use std::{
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use clap::Parser;
use log::{error, info};
use matrix_fixture::rng::FixtureRng;

/// Benchmark tiers, one fixture pair per tier.
const SIZES: [usize; 3] = [100, 1000, 10_000];

/// Operand roles in the downstream multiplication.
const ROLES: [char; 2] = ['A', 'B'];

#[derive(Parser)]
pub struct Args {
    /// Seed for the fixture rng. Random if unset.
    #[clap(long)]
    seed: Option<u64>,

    #[clap(long, default_value = ".")]
    out_dir: PathBuf,
}

fn fixture_path(out_dir: &Path, role: char, n: usize) -> PathBuf {
    out_dir.join(format!("matrix_{role}_{n}.txt"))
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Draw and log a seed if none was pinned
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("generating fixture pairs with seed {seed}");

    let mut rng = FixtureRng::new(seed);

    for n in SIZES {
        for role in ROLES {
            let path = fixture_path(&args.out_dir, role, n);

            let start = Instant::now();
            if let Err(e) =
                matrix_fixture::generate(&mut rng, n, &path)
            {
                error!(
                    "failed to generate {}: {e:?}",
                    path.display()
                );
                process::exit(1);
            }

            info!(
                "wrote {} in {} ms",
                path.display(),
                start.elapsed().as_millis()
            );
        }
    }
}
