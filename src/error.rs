use thiserror::Error;

/// Errors returned by the clustering and sampling routines in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A mean was requested over zero vectors.
    #[error("empty input")]
    EmptyInput,

    /// A weighted draw was requested over an empty pool.
    #[error("cannot select from an empty pool")]
    EmptyPool,

    /// Every weight in the pool is zero and the caller asked for this to be rejected.
    #[error("total weight is zero")]
    ZeroTotalWeight,

    /// A weight is negative, NaN, or infinite.
    #[error("invalid weight at index {index}: {weight}")]
    InvalidWeight {
        /// Position of the offending weight.
        index: usize,
        /// The offending value.
        weight: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Vectors in one call have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
