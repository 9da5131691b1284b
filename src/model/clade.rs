//! Clade (inner vertex) of a phylogenetic tree, and traversals over it.
//!
//! A [Clade] owns its subclades and [Sample]s directly, so a tree is just
//! its root clade and a subtree is just a reference to (or clone of) one
//! of its clades. Traversals use explicit stacks instead of recursion, so
//! arbitrarily deep trees can be processed once they are built.

use crate::model::sample::Sample;
use crate::writer::{RenderConfig, render};
use std::fmt;

/// Age estimate (years before present) of the most recent common ancestor.
///
/// `0.0` means the age is unknown.
pub type Tmrca = f64;

/// Sentinel for an unknown [Tmrca]
pub const UNKNOWN_TMRCA: Tmrca = 0.0;

// =$========================================================================$=
// CLADE
// =$========================================================================$=
/// A phylogenetic clade with its TMRCA estimate.
///
/// # Structure
/// - Subclades and samples are stored in the order they appear in the input.
/// - The clade exclusively owns both; there are no parent references.
/// - `tmrca` is finite; [UNKNOWN_TMRCA] if not given.
#[derive(Debug, Clone, PartialEq)]
pub struct Clade {
    /// Text line used in the text representation of the tree
    text: String,
    /// Name of the first SNP that characterizes this clade
    snp: String,
    /// Estimated age of this clade
    tmrca: Tmrca,
    subclades: Vec<Clade>,
    samples: Vec<Sample>,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl Clade {
    /// Creates a new clade without subclades and samples.
    ///
    /// # Arguments
    /// * `text` - The (trimmed) line of text describing this clade
    /// * `snp` - Name of the SNP characterizing this clade
    /// * `tmrca` - Age estimate, [UNKNOWN_TMRCA] if unknown
    pub fn new(text: impl Into<String>, snp: impl Into<String>, tmrca: Tmrca) -> Self {
        Self {
            text: text.into(),
            snp: snp.into(),
            tmrca,
            subclades: Vec::new(),
            samples: Vec::new(),
        }
    }

    /// Appends a subclade (after all previously added ones).
    pub fn add_subclade(&mut self, clade: Clade) {
        self.subclades.push(clade);
    }

    /// Appends a sample (after all previously added ones).
    pub fn add_sample(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Returns the text line of this clade.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the name of the SNP characterizing this clade.
    pub fn snp(&self) -> &str {
        &self.snp
    }

    /// Returns the TMRCA estimate, [UNKNOWN_TMRCA] if not known.
    pub fn tmrca(&self) -> Tmrca {
        self.tmrca
    }

    /// Returns whether a TMRCA estimate is known for this clade.
    pub fn has_tmrca(&self) -> bool {
        self.tmrca != UNKNOWN_TMRCA
    }

    /// Returns the direct subclades.
    pub fn subclades(&self) -> &[Clade] {
        &self.subclades
    }

    /// Returns the samples directly attached to this clade.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the number of branches leaving this clade,
    /// i.e. the number of direct subclades plus samples.
    pub fn num_branches(&self) -> usize {
        self.subclades.len() + self.samples.len()
    }

    /// Returns the number of clades in this subtree, including this one.
    pub fn num_clades(&self) -> usize {
        self.pre_order_iter().count()
    }

    /// Returns the number of samples in this subtree.
    pub fn num_samples(&self) -> usize {
        self.pre_order_iter().map(|c| c.samples.len()).sum()
    }
}

// ============================================================================
// Traversals (pub)
// ============================================================================
impl Clade {
    /// Returns the TMRCAs of all new lineages in this subtree.
    ///
    /// A clade with `n` branches (subclades plus samples) splits into `n`
    /// lineages, `n - 1` of which are new; each of those contributes the
    /// clade's TMRCA once. A clade with unknown TMRCA contributes nothing,
    /// and neither does anything below it.
    ///
    /// Values are ordered as the clades in a pre-order traversal.
    ///
    /// # Example
    /// ```
    /// use phylogrowth::model::{Clade, Sample};
    ///
    /// let mut root = Clade::new("P312 TMRCA 4500", "P312", 4500.0);
    /// let mut u152 = Clade::new("U152 TMRCA 4400", "U152", 4400.0);
    /// u152.add_sample(Sample::new("id:A1", "A1"));
    /// u152.add_sample(Sample::new("id:A2", "A2"));
    /// root.add_subclade(u152);
    /// root.add_sample(Sample::new("id:B1", "B1"));
    ///
    /// assert_eq!(root.tmrcas(), vec![4500.0, 4400.0]);
    /// ```
    pub fn tmrcas(&self) -> Vec<Tmrca> {
        let mut values = Vec::new();
        let mut stack = vec![self];

        while let Some(clade) = stack.pop() {
            if !clade.has_tmrca() {
                continue;
            }

            let new_lineages = clade.num_branches().saturating_sub(1);
            values.extend(std::iter::repeat_n(clade.tmrca, new_lineages));

            // Push in reverse, so first subclade is processed first
            stack.extend(clade.subclades.iter().rev());
        }

        values
    }

    /// Returns the first clade of this subtree (in pre-order) that contains
    /// `clade_name`, see [Clade::contains].
    ///
    /// # Returns
    /// `Some(&Clade)` for the first match (possibly `self`), `None` otherwise
    pub fn subclade(&self, clade_name: &str) -> Option<&Clade> {
        self.pre_order_iter().find(|c| c.contains(clade_name))
    }

    /// Checks if the text line of this clade contains `clade_name`.
    ///
    /// Only true if the first occurrence of `clade_name` is not followed
    /// by a digit, so that `CTS45` is not found in `CTS4528`.
    ///
    /// # Example
    /// ```
    /// use phylogrowth::model::Clade;
    ///
    /// let clade = Clade::new("CTS4528 TMRCA 4500", "CTS4528", 4500.0);
    /// assert!(clade.contains("CTS4528"));
    /// assert!(!clade.contains("CTS45"));
    /// assert!(clade.contains("TMRCA"));
    /// ```
    pub fn contains(&self, clade_name: &str) -> bool {
        match self.text.find(clade_name) {
            Some(idx) => {
                let end = idx + clade_name.len();
                // Search term must not be part of a longer SNP name
                !self
                    .text
                    .as_bytes()
                    .get(end)
                    .is_some_and(|b| b.is_ascii_digit())
            }
            None => false,
        }
    }

    /// Returns an iterator over the clades of this subtree in pre-order
    /// (parents before children, children in input order).
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter { stack: vec![self] }
    }
}

impl fmt::Display for Clade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, 0, &RenderConfig::default()))
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
/// Iterator for pre-order traversal of clades (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
pub struct PreOrderIter<'a> {
    stack: Vec<&'a Clade>,
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Clade;

    fn next(&mut self) -> Option<Self::Item> {
        let clade = self.stack.pop()?;

        // Push subclades onto stack (last first, so first is processed first)
        self.stack.extend(clade.subclades.iter().rev());

        Some(clade)
    }
}
