use super::*;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashSet;

/// Initial centroid selection.
///
/// Both strategies return K pairwise non-coincident points taken from
/// the input, and both reject K larger than the number of distinct
/// point values up front instead of searching forever.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seeding {
    /// K distinct point values drawn uniformly without replacement.
    Random,
    /// Start from a uniform pick, then repeatedly take the nearest
    /// not-yet-chosen point to a randomly chosen existing centroid.
    #[default]
    PlusPlus,
}

impl Seeding {
    /// Picks K distinct centroids from `points`.
    pub fn seed<R: Rng>(&self, points: &[Point], k: usize, rng: &mut R) -> Result<Vec<Point>> {
        validate(points, k)?;
        match self {
            Self::Random => Ok(Self::random(points, k, rng)),
            Self::PlusPlus => Self::plusplus(points, k, rng),
        }
    }

    fn random<R: Rng>(points: &[Point], k: usize, rng: &mut R) -> Vec<Point> {
        let ref mut seen = HashSet::new();
        let distinct = points
            .iter()
            .filter(|p| seen.insert(p.key()))
            .copied()
            .collect::<Vec<Point>>();
        rand::seq::index::sample(rng, distinct.len(), k)
            .into_iter()
            .map(|i| distinct[i])
            .collect()
    }

    fn plusplus<R: Rng>(points: &[Point], k: usize, rng: &mut R) -> Result<Vec<Point>> {
        let mut kmeans = Vec::with_capacity(k);
        kmeans.push(points[rng.random_range(0..points.len())]);
        while kmeans.len() < k {
            let reference = kmeans[rng.random_range(0..kmeans.len())];
            let nearest = points
                .iter()
                .filter(|p| kmeans.iter().all(|c: &Point| !c.coincides(p)))
                .min_by(|a, b| reference.distance(a).total_cmp(&reference.distance(b)))
                .copied()
                .ok_or(Error::TooManyClusters {
                    k,
                    distinct: kmeans.len(),
                })?;
            log::trace!("seeded {} near {}", nearest, reference);
            kmeans.push(nearest);
        }
        Ok(kmeans)
    }
}

/// Number of distinct point values.
pub fn distinct(points: &[Point]) -> usize {
    points
        .iter()
        .map(Point::key)
        .collect::<HashSet<(u32, u32)>>()
        .len()
}

/// Checks the preconditions shared by every entry point.
pub fn validate(points: &[Point], k: usize) -> Result<()> {
    if points.is_empty() {
        return Err(Error::EmptyPoints);
    }
    if let Some(index) = points
        .iter()
        .position(|p| !p.x().is_finite() || !p.y().is_finite())
    {
        return Err(Error::NonFinite { index });
    }
    if k == 0 {
        return Err(Error::ZeroClusters);
    }
    let distinct = distinct(points);
    if k > distinct {
        return Err(Error::TooManyClusters { k, distinct });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn grid() -> Vec<Point> {
        (0..5)
            .flat_map(|x| (0..4).map(move |y| Point::new(x as f32, y as f32)))
            .collect()
    }

    fn pairwise_distinct(kmeans: &[Point]) -> bool {
        kmeans
            .iter()
            .enumerate()
            .all(|(i, a)| kmeans[..i].iter().all(|b| !a.coincides(b)))
    }

    #[test]
    fn plusplus_picks_distinct_input_points() {
        let ref points = grid();
        for seed in 0..32 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let kmeans = Seeding::PlusPlus.seed(points, 7, rng).unwrap();
            assert_eq!(kmeans.len(), 7);
            assert!(pairwise_distinct(&kmeans));
            assert!(kmeans.iter().all(|c| points.contains(c)));
        }
    }

    #[test]
    fn random_picks_distinct_input_points() {
        let ref points = grid();
        for seed in 0..32 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let kmeans = Seeding::Random.seed(points, 7, rng).unwrap();
            assert_eq!(kmeans.len(), 7);
            assert!(pairwise_distinct(&kmeans));
            assert!(kmeans.iter().all(|c| points.contains(c)));
        }
    }

    #[test]
    fn plusplus_skips_duplicates() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
        ];
        for seed in 0..16 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let kmeans = Seeding::PlusPlus.seed(&points, 2, rng).unwrap();
            assert!(pairwise_distinct(&kmeans));
        }
    }

    #[test]
    fn plusplus_takes_nearest_to_reference() {
        // with two centroids the reference is always the first pick
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(9.0, 0.0),
        ];
        for seed in 0..16 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let kmeans = Seeding::PlusPlus.seed(&points, 2, rng).unwrap();
            let expected = if kmeans[0].x() == 1.0 { 0.0 } else { 1.0 };
            assert_eq!(kmeans[1].x(), expected);
        }
    }

    #[test]
    fn seeding_is_deterministic_under_seed() {
        let ref points = grid();
        let a = Seeding::PlusPlus.seed(points, 5, &mut SmallRng::seed_from_u64(7));
        let b = Seeding::PlusPlus.seed(points, 5, &mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn validation_rejects_bad_arguments() {
        let ref points = grid();
        assert_eq!(validate(&[], 1), Err(Error::EmptyPoints));
        assert_eq!(validate(points, 0), Err(Error::ZeroClusters));
        assert_eq!(
            validate(points, 21),
            Err(Error::TooManyClusters { k: 21, distinct: 20 })
        );
        assert_eq!(
            validate(&[Point::new(0.0, 0.0), Point::new(f32::NAN, 0.0)], 1),
            Err(Error::NonFinite { index: 1 })
        );
        assert_eq!(validate(points, 20), Ok(()));
    }

    #[test]
    fn tiny_separations_seed_as_distinct() {
        let points = [Point::new(0.0, 0.0), Point::new(1e-30, 0.0)];
        assert_eq!(validate(&points, 2), Ok(()));
        for seeding in [Seeding::PlusPlus, Seeding::Random] {
            for seed in 0..8 {
                let ref mut rng = SmallRng::seed_from_u64(seed);
                let kmeans = seeding.seed(&points, 2, rng).unwrap();
                assert_eq!(kmeans.len(), 2);
                assert!(pairwise_distinct(&kmeans));
            }
        }
    }

    #[test]
    fn duplicates_do_not_count_as_distinct() {
        let points = [Point::new(1.0, 1.0), Point::new(1.0, 1.0)];
        assert_eq!(distinct(&points), 1);
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(
            Seeding::PlusPlus.seed(&points, 2, rng),
            Err(Error::TooManyClusters { k: 2, distinct: 1 })
        );
    }
}
