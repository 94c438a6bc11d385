use thiserror::Error as ThisError;

/// Invalid arguments, surfaced to the caller before any clustering work begins.
///
/// An empty cluster mid-run is not an error: it keeps its previous
/// centroid and the run continues.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("invalid argument: no points to cluster")]
    EmptyPoints,
    #[error("invalid argument: point {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    #[error("invalid argument: k must be at least 1")]
    ZeroClusters,
    #[error("invalid argument: k = {k} exceeds the {distinct} distinct points")]
    TooManyClusters { k: usize, distinct: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
