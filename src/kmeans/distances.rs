use super::*;
use crate::Energy;

/// Pairwise distances between the current centroids.
///
/// Dense row-major K×K storage. Symmetric with a zero diagonal,
/// since each off-diagonal pair is measured once and mirrored.
/// Rebuilt every iteration and dropped at the end of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Distances {
    k: usize,
    values: Vec<Energy>,
}

impl Distances {
    /// Number of centroids.
    pub fn k(&self) -> usize {
        self.k
    }
    /// Distance between centroids i and j.
    pub fn get(&self, i: usize, j: usize) -> Energy {
        self.values[i * self.k + j]
    }
    /// Row i: distances from centroid i to every centroid.
    pub fn row(&self, i: usize) -> &[Energy] {
        &self.values[i * self.k..(i + 1) * self.k]
    }
}

impl From<&[Point]> for Distances {
    fn from(kmeans: &[Point]) -> Self {
        let k = kmeans.len();
        let mut values = vec![0.0; k * k];
        for i in 0..k {
            for j in 0..i {
                let d = kmeans[i].distance(&kmeans[j]);
                values[i * k + j] = d;
                values[j * k + i] = d;
            }
        }
        Self { k, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(0.0, 4.0),
        ]
    }

    #[test]
    fn table_is_symmetric_with_zero_diagonal() {
        let ref kmeans = square();
        let table = Distances::from(kmeans.as_slice());
        assert_eq!(table.k(), 4);
        for i in 0..4 {
            assert_eq!(table.get(i, i), 0.0);
            for j in 0..4 {
                assert_eq!(table.get(i, j), table.get(j, i));
                assert_eq!(table.get(i, j), kmeans[i].distance(&kmeans[j]));
            }
        }
        assert_eq!(table.get(0, 2), 5.0);
    }

    #[test]
    fn single_centroid_table() {
        let table = Distances::from([Point::new(1.0, 1.0)].as_slice());
        assert_eq!(table.k(), 1);
        assert_eq!(table.row(0), &[0.0]);
    }
}
