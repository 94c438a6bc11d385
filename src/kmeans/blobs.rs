use super::*;
use crate::Coordinate;
use crate::KMEANS_ARBITRARY_EXTENT;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Synthetic point clouds: isotropic square blobs around random centers.
///
/// Fixture for tests, benchmarks, and the `cluster` binary. Output is a
/// pure function of the seed.
#[derive(Debug, Clone, Copy)]
pub struct Blobs {
    centers: usize,
    size: usize,
    spread: Coordinate,
}

impl Blobs {
    /// `centers` blobs of `size` points each.
    pub fn new(centers: usize, size: usize) -> Self {
        Self {
            centers,
            size,
            spread: KMEANS_ARBITRARY_EXTENT / 50.0,
        }
    }
    /// Half-width of each blob.
    pub fn with_spread(mut self, spread: Coordinate) -> Self {
        self.spread = spread.abs();
        self
    }
    /// Generates the points, blob by blob.
    pub fn points(&self, seed: u64) -> Vec<Point> {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let centers = (0..self.centers)
            .map(|_| {
                Point::new(
                    rng.random_range(0.0..KMEANS_ARBITRARY_EXTENT),
                    rng.random_range(0.0..KMEANS_ARBITRARY_EXTENT),
                )
            })
            .collect::<Vec<Point>>();
        centers
            .iter()
            .flat_map(|c| std::iter::repeat(*c).take(self.size))
            .map(|c| {
                Point::new(
                    c.x() + rng.random_range(-self.spread..=self.spread),
                    c.y() + rng.random_range(-self.spread..=self.spread),
                )
            })
            .collect()
    }
}
