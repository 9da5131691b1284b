//! Parser for phylogenetic trees in the indented text format.
//!
//! Parsing happens in two stages:
//! 1. The [preprocessor] turns raw lines into [LineRecord]s
//!    (comments, blank lines and new samples removed, starred lineages
//!    flattened, indentation measured).
//! 2. The [TreeParser] builds the [Clade](crate::model::Clade) tree from
//!    the records by recursive descent over the indentation.

pub mod config;
pub(crate) mod defs;
pub mod parsing_error;
pub mod preprocessor;
pub mod tree_parser;
pub mod utils;

pub use config::ParserConfig;
pub use parsing_error::{ParsingError, ParsingErrorType};
pub use preprocessor::{LineRecord, preprocess};
pub use tree_parser::TreeParser;
