use thiserror::Error;

/// Errors returned by the stratified clusterer.
#[derive(Debug, Error)]
pub enum Error {
    /// Data and stratification coordinate disagree on the number of frames.
    #[error("length mismatch: {data} data frames but {stratify} stratification values")]
    LengthMismatch {
        /// Number of data frames.
        data: usize,
        /// Number of stratification values.
        stratify: usize,
    },

    /// Strata boundaries are not strictly ascending.
    #[error("strata boundaries not strictly ascending at index {index}")]
    UnsortedBoundaries {
        /// Index of the first cutpoint that is not below its successor.
        index: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Operation requires a fitted clusterer.
    #[error("{operation} called before fit")]
    NotFitted {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// Prediction routed points into a stratum that had no training data.
    #[error("stratum {stratum} received {n_points} points but holds no fitted model")]
    UnfittedStratum {
        /// The stratum index.
        stratum: usize,
        /// Number of points routed into it.
        n_points: usize,
    },

    /// Produced assignment count does not match the input frame count.
    #[error("assignment mismatch: expected {expected} assignments, produced {found}")]
    AssignmentMismatch {
        /// Input frame count.
        expected: usize,
        /// Assignments actually produced.
        found: usize,
    },

    /// Trajectories in a batch have unequal lengths.
    #[error("ragged batch: expected trajectory length {expected}, found {found}")]
    RaggedBatch {
        /// Length of the first trajectory.
        expected: usize,
        /// Length of the offending trajectory.
        found: usize,
    },

    /// Error reported by the underlying clustering model.
    #[error("clustering model error: {0}")]
    Model(String),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
