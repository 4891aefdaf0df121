//! Plain text debug dumps of solver matrices and vectors.
//!
//! Matrices use a 1-based triplet layout with a trailing dimension line
//! and values print with 18 digits after the decimal point, so existing
//! downstream tools can load the dumps unchanged.

use crate::algebra::SparseFormatError;
use thiserror::Error;

mod dump;
pub use dump::*;
mod format;
pub use format::*;

/// Error type returned when writing or reading dumps.
#[derive(Error, Debug)]
pub enum DumpError {
    /// Underlying file or stream failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A line could not be interpreted
    #[error("Malformed dump at line {line}: {reason}")]
    Parse { line: usize, reason: String },
    /// The dump ended without a dimension line
    #[error("Dump has no dimension sentinel line")]
    MissingSentinel,
    /// The entries do not form a valid CSC matrix
    #[error("Dump does not describe a valid matrix: {0}")]
    Format(#[from] SparseFormatError),
}
