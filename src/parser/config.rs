//! Configuration of the markers recognized by the tree parser.

use crate::parser::defs::*;

// =#========================================================================#=
// PARSER CONFIG
// =#========================================================================#=
/// Markers and limits used when turning text lines into a tree.
///
/// The defaults describe the usual tree file format:
///
/// | Setting | Default | Meaning |
/// |---------|---------|---------|
/// | `comment_marker` | `//` | Start of a line comment |
/// | `sample_marker` | `id:` | Line is a sample, ID follows the marker |
/// | `tmrca_marker` | `TMRCA` | Age estimate of a clade follows |
/// | `tmrca_skip` | `6` | Bytes skipped from marker start before the age |
/// | `new_marker` | `new` | Line is skipped (sample not yet established) |
/// | `star_marker` | `*` | Trailing marker of a single-lineage line |
/// | `max_depth` | `1024` | Maximal nesting depth of clades |
///
/// # Example
/// ```
/// use phylogrowth::parser::ParserConfig;
///
/// let config = ParserConfig::default()
///     .with_comment_marker("#")
///     .with_max_depth(64);
/// assert_eq!(config.comment_marker, "#");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    pub comment_marker: String,
    pub sample_marker: String,
    pub tmrca_marker: String,
    pub tmrca_skip: usize,
    pub new_marker: String,
    pub star_marker: char,
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            comment_marker: COMMENT_MARKER.to_string(),
            sample_marker: SAMPLE_MARKER.to_string(),
            tmrca_marker: TMRCA_MARKER.to_string(),
            tmrca_skip: TMRCA_SKIP,
            new_marker: NEW_MARKER.to_string(),
            star_marker: STAR_MARKER,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Sets the marker starting a line comment.
    pub fn with_comment_marker(mut self, marker: impl Into<String>) -> Self {
        self.comment_marker = marker.into();
        self
    }

    /// Sets the marker identifying sample lines.
    pub fn with_sample_marker(mut self, marker: impl Into<String>) -> Self {
        self.sample_marker = marker.into();
        self
    }

    /// Sets the marker preceding the age estimate and the number of bytes
    /// skipped from its start before the age is read.
    pub fn with_tmrca_marker(mut self, marker: impl Into<String>, skip: usize) -> Self {
        self.tmrca_marker = marker.into();
        self.tmrca_skip = skip;
        self
    }

    /// Sets the marker of lines to ignore.
    pub fn with_new_marker(mut self, marker: impl Into<String>) -> Self {
        self.new_marker = marker.into();
        self
    }

    /// Sets the trailing marker of single-lineage lines.
    pub fn with_star_marker(mut self, marker: char) -> Self {
        self.star_marker = marker;
        self
    }

    /// Sets the maximal nesting depth; deeper trees are rejected.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
