//! Error types for buffer operations.

use thiserror::Error;

/// Result type for buffer operations.
pub type Result<T> = std::result::Result<T, IndexError>;

/// The single error kind raised for out-of-range offset/range arguments.
///
/// Raised synchronously, before any mutation of storage or history takes
/// place; a failed operation leaves the buffer exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("offset {offset} is out of bounds (len: {len})")]
    OutOfBounds { offset: usize, len: usize },
    #[error("range start {start} is greater than end {end}")]
    InvertedRange { start: usize, end: usize },
}
