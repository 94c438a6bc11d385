use super::*;

/// For each centroid, the other centroids sorted by ascending distance.
///
/// Row i has K-1 entries and never contains i itself. Equal distances
/// keep the lower index first, so the order is a pure function of the
/// distance table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbors {
    k: usize,
    order: Vec<usize>,
}

impl Neighbors {
    /// Candidates for centroid i, nearest first.
    pub fn row(&self, i: usize) -> &[usize] {
        let w = self.k - 1;
        &self.order[i * w..(i + 1) * w]
    }
}

impl From<&Distances> for Neighbors {
    fn from(table: &Distances) -> Self {
        let k = table.k();
        let order = (0..k)
            .flat_map(|i| {
                let row = table.row(i);
                let mut others = (0..k).filter(|&j| j != i).collect::<Vec<usize>>();
                others.sort_by(|&a, &b| row[a].total_cmp(&row[b]).then(a.cmp(&b)));
                others
            })
            .collect::<Vec<usize>>();
        Self { k, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_sort_by_distance_and_skip_self() {
        let kmeans = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(4.0, 0.0),
        ];
        let ref table = Distances::from(kmeans.as_slice());
        let neighbors = Neighbors::from(table);
        assert_eq!(neighbors.row(0), &[2, 3, 1]);
        assert_eq!(neighbors.row(1), &[3, 2, 0]);
        assert_eq!(neighbors.row(2), &[0, 3, 1]);
        assert_eq!(neighbors.row(3), &[2, 0, 1]);
    }

    #[test]
    fn ties_keep_lower_index_first() {
        let kmeans = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(-1.0, 0.0),
        ];
        let ref table = Distances::from(kmeans.as_slice());
        assert_eq!(Neighbors::from(table).row(0), &[1, 2, 3]);
    }

    #[test]
    fn single_centroid_has_no_candidates() {
        let ref table = Distances::from([Point::new(0.0, 0.0)].as_slice());
        assert!(Neighbors::from(table).row(0).is_empty());
    }
}
