//! Line preprocessing for the indented tree format.
//!
//! Turns raw text lines into an ordered list of [LineRecord]s, which is what
//! the [TreeParser](crate::parser::TreeParser) consumes:
//! 1. Comments and blank lines are removed, as are lines marking new
//!    (not yet established) samples.
//! 2. Indentation is measured and the text trimmed.
//! 3. Starred single-lineage lines (e.g. `CTS4528*`) are removed and their
//!    descendants are moved up to the indentation of the starred line.

use crate::parser::ParserConfig;
use crate::parser::parsing_error::{ParsingError, ParsingErrorType};
use crate::parser::utils::{count_indent, strip_comment};

// =#========================================================================#=
// LINE RECORD
// =#========================================================================#=
/// A meaningful line of a tree file.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    /// Line number in the original input (1-based)
    pub line_number: usize,
    /// Number of leading whitespace characters
    pub indent: usize,
    /// Trimmed text of the line, without comment
    pub text: String,
}

impl LineRecord {
    pub fn new(line_number: usize, indent: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            indent,
            text: text.into(),
        }
    }
}

// ============================================================================
// Preprocessing (pub)
// ============================================================================
/// Converts raw lines into the [LineRecord]s that describe a tree.
///
/// # Arguments
/// * `lines` - Raw lines of text in file order (without line terminators)
/// * `config` - Markers to use, see [ParserConfig]
///
/// # Returns
/// * `Ok(Vec<LineRecord>)` - Records in file order, never empty
/// * `Err(ParsingError)` - If no valid line is left after filtering
pub fn preprocess<I, S>(lines: I, config: &ParserConfig) -> Result<Vec<LineRecord>, ParsingError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let records = filter_lines(lines, config);
    let num_filtered = records.len();

    let records = flatten_single_lineages(records, config.star_marker);
    log::debug!(
        "preprocessed {} lines, {} remain after flattening starred lineages",
        num_filtered,
        records.len()
    );

    if records.is_empty() {
        return Err(ParsingError::without_context(ParsingErrorType::NoValidLines));
    }
    Ok(records)
}

/// Removes comments, blank lines and new samples, and measures indentation.
///
/// The check for new samples is a plain substring match on the line without
/// its comment, so any line containing the marker (e.g. `new`) is skipped.
pub fn filter_lines<I, S>(lines: I, config: &ParserConfig) -> Vec<LineRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        let Some(content) = strip_comment(line.as_ref(), &config.comment_marker) else {
            continue;
        };
        if content.contains(config.new_marker.as_str()) {
            continue;
        }

        records.push(LineRecord::new(
            index + 1,
            count_indent(content),
            content.trim(),
        ));
    }
    records
}

/// Converts lines below a starred line, for example `CTS4528*`, into
/// siblings of that line.
///
/// The starred line itself is dropped and every following line with larger
/// indentation gets the indentation of the starred line, until a line with
/// the same or smaller indentation ends the block. A new starred line always
/// replaces the current block.
pub fn flatten_single_lineages(records: Vec<LineRecord>, star: char) -> Vec<LineRecord> {
    let mut result = Vec::with_capacity(records.len());
    let mut star_indent: Option<usize> = None;

    for mut record in records {
        if record.text.ends_with(star) {
            star_indent = Some(record.indent);
            continue;
        }

        match star_indent {
            Some(indent) if record.indent > indent => {
                // Line belongs to the starred branch
                record.indent = indent;
            }
            Some(_) => {
                // Line is outside the starred block
                star_indent = None;
            }
            None => {}
        }
        result.push(record);
    }

    result
}
