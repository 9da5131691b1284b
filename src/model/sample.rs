//! Sample (leaf) of a phylogenetic tree.

use std::fmt;

// =#========================================================================#=
// SAMPLE
// =#========================================================================#=
/// A genetic sample from a single person, a leaf of the tree.
///
/// Keeps the text line it was parsed from and the ID extracted from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Text line used in the text representation of the tree
    text: String,
    /// ID of the sample, e.g. a kit number
    id: String,
}

impl Sample {
    /// Creates a new sample.
    ///
    /// # Arguments
    /// * `text` - The (trimmed) line of text describing this sample
    /// * `id` - The ID of this sample
    pub fn new(text: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            id: id.into(),
        }
    }

    /// Returns the text line of this sample.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the ID of this sample.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id:{}", self.id)
    }
}
