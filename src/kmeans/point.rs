use crate::Arbitrary;
use crate::Coordinate;
use crate::Energy;
use crate::KMEANS_ARBITRARY_EXTENT;
use serde::Deserialize;
use serde::Serialize;

/// A point in the plane.
///
/// Points carry no identity beyond their coordinates: two points with
/// equal coordinates are the same value. The engine never mutates a
/// point, it only moves labels between clusters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: Coordinate,
    y: Coordinate,
}

impl Point {
    pub const fn new(x: Coordinate, y: Coordinate) -> Self {
        Self { x, y }
    }
    pub fn x(&self) -> Coordinate {
        self.x
    }
    pub fn y(&self) -> Coordinate {
        self.y
    }
    /// Euclidean distance, evaluated in f64 and rounded once.
    pub fn distance(&self, other: &Self) -> Energy {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt() as Energy
    }
    /// Same value as `other`. Agrees with [`Point::key`], so anything
    /// counted as distinct can also be seeded as distinct.
    pub fn coincides(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
    /// Bit pattern key, for counting distinct values.
    /// Negative zero is folded into positive zero so that
    /// coincident points always share a key.
    pub fn key(&self) -> (u32, u32) {
        ((self.x + 0.0).to_bits(), (self.y + 0.0).to_bits())
    }
}

impl From<(Coordinate, Coordinate)> for Point {
    fn from((x, y): (Coordinate, Coordinate)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (Coordinate, Coordinate) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Arbitrary for Point {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self::new(
            rng.random_range(0.0..KMEANS_ARBITRARY_EXTENT),
            rng.random_range(0.0..KMEANS_ARBITRARY_EXTENT),
        )
    }
}
