//! Shared error types used across submodules.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum CoilError {
    /// Constructor inputs disagree in length; nothing is built.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    /// An operation was invoked on a filament with no points.
    #[error("empty geometry: {0}")]
    EmptyGeometry(&'static str),
    /// An operation needs more (distinct) points than the filament has.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// A MAKEGRID source does not exist; raised before any parsing begins.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// A MAKEGRID body record carried enough tokens to be a point but one of
    /// its numeric fields does not parse. Short records are not errors; they
    /// are the format's trailer and terminate the scan silently.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord {
        /// One-based line number in the source.
        line: usize,
        /// What failed to parse.
        reason: String,
    },
    /// Wraps underlying I/O failures.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CoilError>;
