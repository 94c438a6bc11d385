//! Clustering Demo Binary
//!
//! Generates seeded synthetic blobs, clusters them, and prints a JSON
//! summary of the partition to stdout.

use clap::Parser;
use clap::ValueEnum;
use planar_kmeans::*;

#[derive(Parser)]
#[command(author, version, about = "Cluster synthetic planar blobs with k-means", long_about = None)]
struct Args {
    /// Number of clusters
    #[arg(short, long)]
    k: usize,
    /// Number of synthetic blobs
    #[arg(long, default_value_t = 4)]
    centers: usize,
    /// Points per blob
    #[arg(long, default_value_t = 256)]
    size: usize,
    /// Half-width of each blob
    #[arg(long, default_value_t = 20.0)]
    spread: Coordinate,
    /// Seed for both data generation and clustering (falls back to KMEANS_SEED)
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many refinement passes
    #[arg(long)]
    max_iterations: Option<usize>,
    /// Initial centroid selection
    #[arg(long, value_enum, default_value_t = Init::PlusPlus)]
    seeding: Init,
    /// Compare every point against every centroid
    #[arg(long)]
    naive: bool,
    /// Truncate centroids to the integer grid
    #[arg(long)]
    lattice: bool,
    /// Log every iteration
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Init {
    Random,
    PlusPlus,
}

impl From<Init> for Seeding {
    fn from(init: Init) -> Self {
        match init {
            Init::Random => Seeding::Random,
            Init::PlusPlus => Seeding::PlusPlus,
        }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        let mut config = Config::new(args.k)
            .seeding(Seeding::from(args.seeding))
            .accelerated(!args.naive)
            .precision(if args.lattice {
                Precision::Lattice
            } else {
                Precision::Real
            });
        config.max_iterations = args.max_iterations;
        config.seed = args.seed.or_else(seed_from_env);
        config
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.verbose);
    let config = Config::from(&args);
    let seed = config.seed.unwrap_or_else(rand::random);
    let points = Blobs::new(args.centers, args.size)
        .with_spread(args.spread)
        .points(seed);
    let partition = config.seed(seed).fit(&points)?;
    let summary = serde_json::json!({
        "seed": partition.seed(),
        "iterations": partition.iterations(),
        "converged": partition.converged(),
        "rms": partition.rms(),
        "sizes": partition.sizes(),
        "kmeans": partition.kmeans(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
