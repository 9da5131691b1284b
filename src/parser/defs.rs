//! Markers and defaults of the indented tree text format.
//!
//! These are the defaults of [ParserConfig](crate::parser::ParserConfig);
//! a parser configured otherwise does not look at them.

/// Line comment marker "//"
pub(crate) const COMMENT_MARKER: &str = "//";

/// Marker of a sample line "id:"
pub(crate) const SAMPLE_MARKER: &str = "id:";

/// Marker of the age estimate of a clade "TMRCA"
pub(crate) const TMRCA_MARKER: &str = "TMRCA";

/// Bytes skipped from the start of [TMRCA_MARKER] before the age is read,
/// i.e. the marker plus one separator ("TMRCA 4500", "TMRCA:4500")
pub(crate) const TMRCA_SKIP: usize = 6;

/// Lines containing this marker are samples not yet established in the tree
pub(crate) const NEW_MARKER: &str = "new";

/// Trailing marker of a single-lineage line whose descendants get flattened
pub(crate) const STAR_MARKER: char = '*';

/// Maximal nesting depth accepted by the tree parser
pub(crate) const DEFAULT_MAX_DEPTH: usize = 1024;

/// Default indentation unit of rendered trees (one tab per level)
pub(crate) const DEFAULT_INDENT_UNIT: &str = "\t";

/// Default line terminator of rendered trees and exported data
pub(crate) const DEFAULT_LINE_TERMINATOR: &str = "\r\n";
