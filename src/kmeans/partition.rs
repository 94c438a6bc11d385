use super::*;
use crate::Energy;
use serde::Serialize;

/// The outcome of one clustering run.
///
/// `labels[i]` is the cluster of input point i, so the clusters
/// partition the input exactly. Centroids are the barycenters of
/// their members, except that an empty cluster keeps its last position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Partition {
    points: Vec<Point>,
    kmeans: Vec<Point>,
    labels: Vec<usize>,
    iterations: usize,
    converged: bool,
    seed: Option<u64>,
}

impl Partition {
    pub fn kmeans(&self) -> &[Point] {
        &self.kmeans
    }
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }
    pub fn k(&self) -> usize {
        self.kmeans.len()
    }
    /// Refinement passes that ran.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    /// Whether the last pass moved nothing.
    pub fn converged(&self) -> bool {
        self.converged
    }
    /// Seed that reproduces this run, when the run built its own RNG.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    /// Members of cluster j, in input order.
    pub fn cluster(&self, j: usize) -> Vec<Point> {
        self.points
            .iter()
            .zip(self.labels.iter())
            .filter(|(_, l)| **l == j)
            .map(|(p, _)| *p)
            .collect()
    }
    /// All K clusters, indexed by centroid.
    pub fn clusters(&self) -> Vec<Vec<Point>> {
        let mut clusters = vec![Vec::new(); self.k()];
        self.points
            .iter()
            .zip(self.labels.iter())
            .for_each(|(p, &j)| clusters[j].push(*p));
        clusters
    }
    /// Cluster sizes, indexed by centroid.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.k()];
        self.labels.iter().for_each(|&j| sizes[j] += 1);
        sizes
    }
    /// Nearest centroid to an arbitrary point. Ties go to the lowest index.
    pub fn nearest(&self, x: &Point) -> usize {
        nearest(&self.kmeans, x).0
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
    /// Root-mean-square distance from each point to its centroid.
    pub fn rms(&self) -> Energy {
        (self.inertia() / self.points.len() as Energy).sqrt()
    }
}

impl From<(Lloyd<'_>, usize, bool, Option<u64>)> for Partition {
    fn from((lloyd, iterations, converged, seed): (Lloyd<'_>, usize, bool, Option<u64>)) -> Self {
        Self {
            points: lloyd.points().to_vec(),
            kmeans: lloyd.kmeans().to_vec(),
            labels: lloyd.labels().to_vec(),
            iterations,
            converged,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partition() -> Partition {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(12.0, 0.0),
        ];
        let mut lloyd = Lloyd::new(&points, vec![points[0], points[1]]);
        let (t, converged) = lloyd.run(None);
        Partition::from((lloyd, t, converged, None))
    }

    #[test]
    fn clusters_follow_labels() {
        let partition = partition();
        assert!(partition.converged());
        assert_eq!(partition.labels(), &[0, 1, 0, 1]);
        assert_eq!(partition.sizes(), vec![2, 2]);
        assert_eq!(
            partition.clusters(),
            vec![
                vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0)],
                vec![Point::new(10.0, 0.0), Point::new(12.0, 0.0)],
            ]
        );
        assert_eq!(partition.cluster(1), partition.clusters()[1]);
    }

    #[test]
    fn centroids_and_errors() {
        let partition = partition();
        assert_eq!(
            partition.kmeans(),
            &[Point::new(1.0, 0.0), Point::new(11.0, 0.0)]
        );
        assert_eq!(partition.inertia(), 4.0);
        assert_eq!(partition.rms(), 1.0);
    }

    #[test]
    fn nearest_classifies_new_points() {
        let partition = partition();
        assert_eq!(partition.nearest(&Point::new(-5.0, 3.0)), 0);
        assert_eq!(partition.nearest(&Point::new(9.0, -1.0)), 1);
        assert_eq!(partition.nearest(&Point::new(6.0, 0.0)), 0);
    }
}
