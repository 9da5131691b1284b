//! Data model for phylogenetic trees with TMRCA estimates.
//!
//! # Tree representation
//! A tree is represented by its root [Clade]. Each clade owns its subclades
//! and its [Sample]s (the leaves) in input order. Clades and samples are kept
//! in separate vectors, so the kind of each child is known statically.
//!
//! # Traversals
//! * [`Clade::tmrcas`] - TMRCAs of all new lineages, input for histograms
//! * [`Clade::subclade`] - Search a subtree by SNP name
//! * [`Clade::pre_order_iter`] - Iterate over all clades of a subtree
//!
//! Trees are typically constructed by the
//! [TreeParser](crate::parser::TreeParser) and rendered back to text by the
//! [writer](crate::writer).

pub mod clade;
pub mod sample;

pub use clade::{Clade, PreOrderIter, Tmrca, UNKNOWN_TMRCA};
pub use sample::Sample;
