//! Crate-level error type.
//!
//! Parsing reports [ParsingError]s and histogram construction and export
//! report [HistogramError]s; [PhyloError] combines them with I/O failures
//! and failed subclade lookups for callers driving the whole workflow.

use crate::histogram::HistogramError;
use crate::parser::ParsingError;
use thiserror::Error;

/// Main error type of phylogrowth operations
#[derive(Error, Debug)]
pub enum PhyloError {
    /// I/O errors (file missing, permission denied, read/write failures)
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Invalid tree file content
    #[error("parsing tree, {0}")]
    Parse(#[from] ParsingError),

    /// Requested subclade is not part of the tree
    #[error("could not find specified subclade {0}")]
    NotFound(String),

    /// Histogram construction or export failed
    #[error(transparent)]
    Histogram(#[from] HistogramError),
}

/// Type alias for Results using PhyloError
pub type Result<T> = std::result::Result<T, PhyloError>;
