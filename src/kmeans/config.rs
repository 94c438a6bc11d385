use super::*;
use crate::KMEANS_ACCELERATED;
use crate::KMEANS_MAX_ITERATIONS;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Deserialize;
use serde::Serialize;

/// Options for a single clustering run.
///
/// Only `k` is required. Without a seed a fresh one is drawn and logged,
/// so any run can be replayed by passing that seed back in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub k: usize,
    pub max_iterations: Option<usize>,
    pub seed: Option<u64>,
    pub seeding: Seeding,
    pub accelerated: bool,
    pub precision: Precision,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            k: 1,
            max_iterations: KMEANS_MAX_ITERATIONS,
            seed: None,
            seeding: Seeding::default(),
            accelerated: KMEANS_ACCELERATED,
            precision: Precision::default(),
        }
    }
}

impl Config {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }
    pub fn max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn seeding(mut self, seeding: Seeding) -> Self {
        self.seeding = seeding;
        self
    }
    pub fn accelerated(mut self, accelerated: bool) -> Self {
        self.accelerated = accelerated;
        self
    }
    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Partitions `points` into exactly `k` groups, in centroid order.
    pub fn cluster(&self, points: &[Point]) -> Result<Vec<Vec<Point>>> {
        self.fit(points).map(|partition| partition.clusters())
    }

    /// Seeds an RNG from the configured seed (or a fresh one) and runs.
    pub fn fit(&self, points: &[Point]) -> Result<Partition> {
        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!("{:<32}{:<32}", "kmeans seed", seed);
        let ref mut rng = SmallRng::seed_from_u64(seed);
        self.solve(points, rng, Some(seed))
    }

    /// Runs with a caller-supplied random source. The configured seed is ignored.
    pub fn fit_with<R: Rng>(&self, points: &[Point], rng: &mut R) -> Result<Partition> {
        self.solve(points, rng, None)
    }

    fn solve<R: Rng>(&self, points: &[Point], rng: &mut R, seed: Option<u64>) -> Result<Partition> {
        log::info!("{:<32}{:<32}", "kmeans initializing", format!("n={} k={}", points.len(), self.k));
        let kmeans = self.seeding.seed(points, self.k, rng)?;
        log::info!("{:<32}{:<32}", "kmeans assigning", format!("{:?}", self.seeding));
        let mut lloyd = Lloyd::new(points, kmeans)
            .with_precision(self.precision)
            .with_accelerated(self.accelerated);
        log::info!("{:<32}{:<32}", "kmeans iterating", format!("accelerated={}", self.accelerated));
        let (iterations, converged) = lloyd.run(self.max_iterations);
        log::info!(
            "{:<32}{:<32}",
            if converged { "kmeans converged" } else { "kmeans stopped" },
            format!("t={} rms={:.3} evals={}", iterations, lloyd.rms(), lloyd.evaluations())
        );
        Ok(Partition::from((lloyd, iterations, converged, seed)))
    }
}

/// Partitions `points` into `k` clusters with default options.
pub fn cluster(points: &[Point], k: usize) -> Result<Vec<Vec<Point>>> {
    Config::new(k).cluster(points)
}
