//! K-means clustering of planar points.
//!
//! ## Core Types
//!
//! - [`Point`] — Immutable (x, y) pair
//! - [`Centroid`] — Running coordinate sums that collapse into a barycenter
//! - [`Distances`] — Pairwise centroid distances for one iteration
//! - [`Neighbors`] — Per-centroid ordering of the other centroids by distance
//! - [`Partition`] — Final centroids and per-point labels
//!
//! ## Algorithms
//!
//! - [`Seeding`] — Initial centroid selection (k-means++ or uniform)
//! - [`Lloyd`] — Assignment/update loop with triangle-inequality pruning
//! - [`Config`] — Options for a single clustering run
//! - [`Blobs`] — Seeded synthetic point clouds
mod blobs;
mod centroid;
mod config;
mod distances;
mod error;
mod lloyd;
mod neighbors;
mod partition;
mod point;
mod seeding;

pub use blobs::*;
pub use centroid::*;
pub use config::*;
pub use distances::*;
pub use error::*;
pub use lloyd::*;
pub use neighbors::*;
pub use partition::*;
pub use point::*;
pub use seeding::*;
