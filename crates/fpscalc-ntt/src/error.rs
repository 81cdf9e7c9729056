//! Transform-level errors.

/// Error type for transform and convolution calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NttError {
    /// Transform length is not a power of two.
    #[error("transform length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    /// Transform length exceeds the 2-adic capacity of the modulus.
    #[error("transform length {requested} exceeds the modulus capacity of {max}")]
    CapacityExceeded {
        /// Requested length.
        requested: usize,
        /// Largest supported length.
        max: usize,
    },

    /// Attempted to invert the zero representative.
    #[error("division by zero representative")]
    ZeroInverse,
}
