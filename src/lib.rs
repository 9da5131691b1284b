//! Phylogrowth is a library to parse indented phylogenetic trees with TMRCA
//! estimates and to derive population growth histograms from them.
//!
//! Core functionality provided:
//! - Parser: Reads the indented tree format (one clade or sample per line,
//!   nesting given by indentation, `TMRCA <years>` age estimates,
//!   `id:<ID>` samples, `//` comments, `*` for single-lineage lines).
//!   See [crate::parser].
//! - Tree model: [Clade] owns its subclades and [Sample]s directly.
//!   Traversals are iterative. See [crate::model].
//! - Subclade search by SNP name ([Clade::subclade]).
//! - Age values: [Clade::tmrcas] returns one TMRCA per new lineage, the
//!   input for a [Histogram].
//! - Writer: Renders trees back to the indented format and writes tree
//!   files with a header. See [crate::writer].
//! - Histogram: Fixed-width buckets with CSV, TXT and PNG (via gnuplot)
//!   export. See [crate::histogram].
//!
//! # Example
//! ```
//! use phylogrowth::histogram::Histogram;
//! use phylogrowth::parse_tree_str;
//!
//! let tree = parse_tree_str(
//!     "R1b TMRCA 4800\n\
//!      \tP312 TMRCA 4500\n\
//!      \t\tid:A1\n\
//!      \t\tid:A2\n\
//!      \t\tid:A3\n\
//!      \tid:B1\n",
//! )?;
//!
//! let p312 = tree.subclade("P312").unwrap();
//! assert_eq!(p312.num_samples(), 3);
//!
//! let hist = Histogram::new(&tree.tmrcas(), 100)?;
//! assert_eq!(hist.bins(), &[(4500, 2), (4600, 0), (4700, 0), (4800, 1)]);
//! # Ok::<(), phylogrowth::error::PhyloError>(())
//! ```

pub mod error;
pub mod histogram;
pub mod model;
pub mod parser;
pub mod writer;

pub use crate::error::PhyloError;
pub use crate::histogram::Histogram;
pub use crate::model::{Clade, Sample};

use crate::parser::{ParsingError, TreeParser};
use std::path::Path;

// ============================================================================
// Quick API
// ============================================================================
/// Parses a tree file using default settings, returning the root [Clade].
///
/// See [TreeParser::parse_file] for full documentation.
pub fn parse_tree_file<P: AsRef<Path>>(path: P) -> Result<Clade, PhyloError> {
    TreeParser::default().parse_file(path)
}

/// Parses a tree from a string using default settings,
/// returning the root [Clade].
///
/// See [TreeParser::parse_str] for full documentation.
pub fn parse_tree_str<S: AsRef<str>>(text: S) -> Result<Clade, ParsingError> {
    TreeParser::default().parse_str(text.as_ref())
}
