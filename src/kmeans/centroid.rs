use super::*;
use crate::Coordinate;
use serde::Deserialize;
use serde::Serialize;

/// How a barycenter is rounded back into the working coordinate type.
///
/// Sums accumulate in f64 and are divided by the member count in f64
/// either way. `Lattice` then truncates each coordinate toward zero,
/// which keeps centroids on the integer grid. Truncation shifts later
/// distance comparisons and can change which fixed point a run settles on.
/// Recentering is then no longer a strict descent step, so lattice runs
/// on adversarial inputs should set an iteration cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Precision {
    #[default]
    Real,
    Lattice,
}

impl Precision {
    fn round(&self, x: f64) -> Coordinate {
        match self {
            Self::Real => x as Coordinate,
            Self::Lattice => x.trunc() as Coordinate,
        }
    }
}

/// Running coordinate sums of the points absorbed into a cluster.
///
/// The absorb pattern builds a mean without a second pass:
/// fold points into the identity, then collapse into a [`Point`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Centroid {
    x: f64,
    y: f64,
    n: usize,
}

impl Centroid {
    /// Empty accumulator.
    pub const fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            n: 0,
        }
    }
    /// Adds one point's coordinates.
    pub fn absorb(self, p: &Point) -> Self {
        Self {
            x: self.x + p.x() as f64,
            y: self.y + p.y() as f64,
            n: self.n + 1,
        }
    }
    /// Number of points absorbed.
    pub fn n(&self) -> usize {
        self.n
    }
    /// The mean, or None if nothing was absorbed.
    pub fn mean(&self, precision: Precision) -> Option<Point> {
        match self.n {
            0 => None,
            n => Some(Point::new(
                precision.round(self.x / n as f64),
                precision.round(self.y / n as f64),
            )),
        }
    }
}

impl<'a> FromIterator<&'a Point> for Centroid {
    fn from_iter<I: IntoIterator<Item = &'a Point>>(iter: I) -> Self {
        iter.into_iter().fold(Self::identity(), Self::absorb)
    }
}

/// Coordinate-wise arithmetic mean of a non-empty point set.
pub fn barycenter(points: &[Point]) -> Result<Point> {
    points
        .iter()
        .collect::<Centroid>()
        .mean(Precision::Real)
        .ok_or(Error::EmptyPoints)
}
