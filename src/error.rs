//! Error types for the indexed sum store.

use thiserror::Error;

/// Error variants for prefix-sum operations.
///
/// Indices and capacities are carried as `i128` so that both `usize` and
/// signed caller input can be reported without truncation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested capacity is negative or cannot be allocated.
    #[error("invalid capacity: {0}")]
    InvalidCapacity(i128),

    /// An index was provided outside `[0, len)`.
    #[error("index out of bounds: {index} (len is {len})")]
    IndexOutOfBounds {
        /// The offending index, as the caller passed it.
        index: i128,
        /// The logical element count of the structure.
        len: usize,
    },

    /// A stored slot or a running sum left the range of the element type.
    /// The structure was left unchanged.
    #[error("arithmetic overflow at index {index}")]
    Overflow {
        /// The 0-based index whose update or query overflowed.
        index: usize,
    },
}

/// A specialized Result type for prefix-sum operations.
pub type Result<T> = std::result::Result<T, Error>;
