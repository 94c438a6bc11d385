//! Lloyd's k-means for planar points.
//!
//! Partitions an in-memory set of 2D points into K disjoint clusters.
//! Seeding follows a k-means++ style spread, and refinement prunes
//! candidate centroids with a triangle-inequality bound on the
//! inter-centroid distances (Phillips 2002).
//!
//! ## Pipeline
//!
//! 1. **Seed** — pick K distinct centroids from the point set
//! 2. **Assign** — place every point in its nearest centroid's cluster
//! 3. **Refine** — recenter, rebuild the distance table, reassign, repeat
//!
//! ## Entry Points
//!
//! - [`cluster`] — partition with default options
//! - [`Config`] — tune seeding, pruning, precision, iteration cap, seed
//! - [`barycenter`] — coordinate-wise mean of a point set

pub mod kmeans;

pub use kmeans::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Point coordinates in the plane.
pub type Coordinate = f32;
/// Euclidean distances and distance-derived errors.
pub type Energy = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// K-MEANS DEFAULTS
// ============================================================================
/// Pruned refinement unless told otherwise.
pub const KMEANS_ACCELERATED: bool = true;
/// Iteration cap. None runs until no point moves.
pub const KMEANS_MAX_ITERATIONS: Option<usize> = None;
/// Side length of the square that `Point::random` samples from.
pub const KMEANS_ARBITRARY_EXTENT: Coordinate = 1000.0;
/// Environment variable consulted for a seed when none is given explicitly.
pub const KMEANS_SEED_VAR: &str = "KMEANS_SEED";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging.
/// INFO by default, DEBUG when `verbose` is set.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

/// Seed from the `KMEANS_SEED` environment variable, if set and numeric.
pub fn seed_from_env() -> Option<u64> {
    std::env::var(KMEANS_SEED_VAR)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
}
