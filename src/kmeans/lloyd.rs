use super::*;
use crate::Energy;
use crate::KMEANS_ACCELERATED;

/// Lloyd's assignment/update loop over an arena of points.
///
/// Clusters are not stored as lists. Each point carries the index of
/// the centroid it is assigned to, so moving a point is a single label
/// write and the clusters always partition the input exactly.
///
/// # Refinement (Phillips 2002)
///
/// Every pass recenters the clusters, measures all centroid pairs,
/// and sorts each centroid's neighbors by distance. A point at distance
/// r from its own centroid c walks those neighbors nearest first and
/// stops at the first c' with d(c, c') ≥ 2r: by the triangle inequality
/// d(x, c') ≥ d(c, c') - r ≥ r, so neither c' nor anything farther can
/// beat the current assignment.
///
/// # Implementation
///
/// - `new()` — Unaccelerated nearest-centroid assignment
/// - `step()` — One recenter + reassign pass, returning the move count
/// - `run()` — Passes until no point moves or the cap is reached
#[derive(Debug, Clone)]
pub struct Lloyd<'a> {
    points: &'a [Point],
    kmeans: Vec<Point>,
    labels: Vec<usize>,
    precision: Precision,
    accelerated: bool,
    evaluations: usize,
}

impl<'a> Lloyd<'a> {
    /// Assigns every point to its nearest seed centroid.
    ///
    /// # Panics
    ///
    /// If `kmeans` is empty. [`Seeding::seed`] never returns an empty set.
    pub fn new(points: &'a [Point], kmeans: Vec<Point>) -> Self {
        assert!(!kmeans.is_empty(), "k-means needs at least one centroid");
        let mut lloyd = Self {
            points,
            kmeans,
            labels: Vec::with_capacity(points.len()),
            precision: Precision::default(),
            accelerated: KMEANS_ACCELERATED,
            evaluations: 0,
        };
        lloyd.labels = (0..points.len()).map(|i| lloyd.neighbor(i).0).collect();
        lloyd.evaluations = points.len() * lloyd.k();
        lloyd
    }
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }
    pub fn with_accelerated(mut self, accelerated: bool) -> Self {
        self.accelerated = accelerated;
        self
    }

    pub fn points(&self) -> &[Point] {
        self.points
    }
    pub fn kmeans(&self) -> &[Point] {
        &self.kmeans
    }
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }
    pub fn k(&self) -> usize {
        self.kmeans.len()
    }
    pub fn n(&self) -> usize {
        self.points.len()
    }
    /// Point-to-centroid distance computations so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Nearest centroid to point i in O(K). Ties go to the lowest index.
    pub fn neighbor(&self, i: usize) -> (usize, Energy) {
        nearest(&self.kmeans, &self.points[i])
    }

    /// Moves every non-empty cluster's centroid to its barycenter.
    /// Empty clusters keep their previous centroid.
    pub fn recenter(&mut self) {
        let mut sums = vec![Centroid::identity(); self.k()];
        self.labels
            .iter()
            .zip(self.points)
            .for_each(|(&j, p)| sums[j] = sums[j].absorb(p));
        for (j, sum) in sums.iter().enumerate() {
            match sum.mean(self.precision) {
                Some(mean) => self.kmeans[j] = mean,
                None => log::debug!("degenerate cluster {} keeps {}", j, self.kmeans[j]),
            }
        }
    }

    /// One adjustment pass. Returns how many points changed cluster.
    pub fn step(&mut self) -> usize {
        self.recenter();
        let scans = if self.accelerated {
            let ref table = Distances::from(self.kmeans.as_slice());
            let ref neighbors = Neighbors::from(table);
            (0..self.n())
                .map(|i| self.pruned(i, table, neighbors))
                .collect::<Vec<(usize, usize)>>()
        } else {
            (0..self.n())
                .map(|i| self.exhaustive(i))
                .collect::<Vec<(usize, usize)>>()
        };
        let mut moved = 0;
        for (label, (target, evaluations)) in self.labels.iter_mut().zip(scans) {
            self.evaluations += evaluations;
            if *label != target {
                *label = target;
                moved += 1;
            }
        }
        moved
    }

    /// Runs passes until one moves nothing, or until `limit` passes.
    /// At least one pass always runs. Returns (passes, converged).
    pub fn run(&mut self, limit: Option<usize>) -> (usize, bool) {
        let limit = limit.map(|n| n.max(1));
        let mut t = 0;
        loop {
            let moved = self.step();
            t += 1;
            log::debug!("{:<32}{:<32}", format!("iteration {}", t), format!("moved {}", moved));
            if moved == 0 {
                return (t, true);
            }
            if limit.is_some_and(|n| t >= n) {
                log::warn!("stopped after {} iterations without converging", t);
                self.recenter();
                return (t, false);
            }
        }
    }

    /// Root-mean-square distance from each point to its centroid.
    pub fn rms(&self) -> Energy {
        (self.inertia() / self.n() as Energy).sqrt()
    }

    /// Sum of squared distances from each point to its centroid.
    pub fn inertia(&self) -> Energy {
        self.points
            .iter()
            .zip(self.labels.iter())
            .map(|(p, &j)| p.distance(&self.kmeans[j]))
            .map(|d| d * d)
            .sum()
    }

    /// Best target for point i, scanning neighbors of its current
    /// centroid nearest first and stopping at the pruning bound.
    /// Returns (target, distance computations).
    fn pruned(&self, i: usize, table: &Distances, neighbors: &Neighbors) -> (usize, usize) {
        let ref x = self.points[i];
        let home = self.labels[i];
        let r = x.distance(&self.kmeans[home]);
        let mut best = (home, r);
        let mut evaluations = 1;
        for &j in neighbors.row(home) {
            if prunes(table.get(home, j), r) {
                break;
            }
            evaluations += 1;
            best = closer(best, (j, x.distance(&self.kmeans[j])), home);
        }
        (best.0, evaluations)
    }

    /// Best target for point i against every centroid.
    fn exhaustive(&self, i: usize) -> (usize, usize) {
        let ref x = self.points[i];
        let home = self.labels[i];
        let best = (0..self.k())
            .filter(|&j| j != home)
            .map(|j| (j, x.distance(&self.kmeans[j])))
            .fold((home, x.distance(&self.kmeans[home])), |best, candidate| {
                closer(best, candidate, home)
            });
        (best.0, self.k())
    }
}

/// Nearest of `kmeans` to `x`, with its distance. Ties go to the lowest index.
pub fn nearest(kmeans: &[Point], x: &Point) -> (usize, Energy) {
    kmeans
        .iter()
        .enumerate()
        .map(|(j, c)| (j, x.distance(c)))
        .fold((0, Energy::INFINITY), |best, (j, d)| {
            if d < best.1 { (j, d) } else { best }
        })
}

/// Whether a centroid `separation` away from a point's own centroid,
/// and everything beyond it, can be skipped for a point at distance `r`.
///
/// The exact bound is `separation >= 2r`. Both sides are rounded, so a
/// point on the bisector could see the far centroid one ulp closer than
/// its own. The slack covers that rounding, and the absolute term covers
/// subnormal distances.
fn prunes(separation: Energy, r: Energy) -> bool {
    separation >= 2.0 * r * (1.0 + 8.0 * Energy::EPSILON) + Energy::MIN_POSITIVE
}

/// Keeps the strictly closer of two (centroid, distance) candidates.
///
/// A point only leaves `home` for a strictly smaller distance. Among
/// other centroids at equal distance the lower index wins, which makes
/// the result independent of the order candidates are visited in.
fn closer(best: (usize, Energy), candidate: (usize, Energy), home: usize) -> (usize, Energy) {
    match candidate.1.total_cmp(&best.1) {
        std::cmp::Ordering::Less => candidate,
        std::cmp::Ordering::Equal if best.0 != home && candidate.0 < best.0 => candidate,
        _ => best,
    }
}
