//! Error types for the indented tree parser.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while building a tree from text lines.

use crate::parser::preprocessor::LineRecord;
use std::error::Error;
use std::fmt;

/// Maximal number of characters of the offending line kept as context
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur while parsing a tree.
#[derive(PartialEq, Debug, Clone)]
pub enum ParsingErrorType {
    NoValidLines,
    InvalidTmrca(String),
    InvalidSample,
    MaxDepthExceeded(usize),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (line number and line text).
#[derive(Debug)]
pub struct ParsingError {
    kind: ParsingErrorType,
    line_number: Option<usize>,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and the offending line
    pub fn from_record(kind: ParsingErrorType, record: &LineRecord) -> Self {
        Self {
            kind,
            line_number: Some(record.line_number),
            context: record.text.chars().take(DEFAULT_CONTEXT_LENGTH).collect(),
        }
    }

    /// Convenience constructor for InvalidTmrca
    pub fn invalid_tmrca(record: &LineRecord, token: &str) -> Self {
        Self::from_record(ParsingErrorType::InvalidTmrca(token.to_string()), record)
    }

    /// Convenience constructor for InvalidSample
    pub fn invalid_sample(record: &LineRecord) -> Self {
        Self::from_record(ParsingErrorType::InvalidSample, record)
    }

    /// Convenience constructor for MaxDepthExceeded
    pub fn max_depth_exceeded(record: &LineRecord, max_depth: usize) -> Self {
        Self::from_record(ParsingErrorType::MaxDepthExceeded(max_depth), record)
    }

    /// Create a ParsingError without line context
    pub fn without_context(kind: ParsingErrorType) -> Self {
        Self {
            kind,
            line_number: None,
            context: String::new(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the (1-based) line number where the error occurred, if known
    pub fn line_number(&self) -> Option<usize> {
        self.line_number
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Line number prefix
        if let Some(line_number) = self.line_number {
            write!(f, "line: {line_number}, ")?;
        }

        match &self.kind {
            ParsingErrorType::NoValidLines => write!(f, "no valid lines in file, nothing to do")?,
            ParsingErrorType::InvalidTmrca(token) => {
                write!(f, "could not convert TMRCA value to float: {token}")?
            }
            ParsingErrorType::InvalidSample => write!(f, "could not parse sample")?,
            ParsingErrorType::MaxDepthExceeded(max) => {
                write!(f, "tree nesting exceeds maximal depth of {max}")?
            }
        }

        if !self.context.is_empty() {
            write!(f, "\n  Context: {}", self.context)?;
        }

        Ok(())
    }
}

impl Error for ParsingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}
