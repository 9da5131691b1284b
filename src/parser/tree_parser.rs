//! Structs and logic to build a tree from indented lines.
//!
//! This module provides the [TreeParser] struct, which offers methods to
//! parse files, readers or strings in the indented tree format into a
//! [Clade] tree.

use crate::error::PhyloError;
use crate::model::{Clade, Sample, Tmrca, UNKNOWN_TMRCA};
use crate::parser::ParserConfig;
use crate::parser::parsing_error::{ParsingError, ParsingErrorType};
use crate::parser::preprocessor::{LineRecord, preprocess};
use crate::parser::utils::{extract_id, slice_from};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

// =#========================================================================#=
// TREE PARSER
// =#========================================================================#=
/// Parser for phylogenetic trees in an indented text format.
///
/// # Format
/// * One clade or sample per line, nesting given by indentation
///   (number of leading whitespace characters)
/// * `// comment` until end of line; blank lines are ignored
/// * `id:` marks a sample, e.g. `id:YF01234`
/// * `TMRCA <number>` gives the age estimate of a clade
/// * A trailing `*` marks a single-lineage line; its descendants become
///   siblings and the line itself is dropped
/// * Lines containing `new` are ignored
///
/// All markers can be changed via [ParserConfig].
///
/// # Example
/// ```
/// use phylogrowth::parser::TreeParser;
///
/// let input = "\
/// P312 TMRCA 4500
///     U152 TMRCA 4400
///         id:A1
///         id:A2
///     id:B1
/// ";
/// let tree = TreeParser::default().parse_str(input)?;
/// assert_eq!(tree.snp(), "P312");
/// assert_eq!(tree.num_samples(), 3);
/// assert_eq!(tree.tmrcas(), vec![4500.0, 4400.0]);
/// # Ok::<(), phylogrowth::parser::ParsingError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeParser {
    config: ParserConfig,
}

// ============================================================================
// Construction (pub)
// ============================================================================
impl TreeParser {
    /// Creates a new [TreeParser] with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this parser.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}

// ============================================================================
// API Parsing (pub)
// ============================================================================
impl TreeParser {
    /// Parses a tree file.
    ///
    /// # Arguments
    /// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
    ///
    /// # Returns
    /// * `Ok(Clade)` - Root of the parsed tree
    /// * `Err(PhyloError)` - If the file cannot be read or the tree is invalid
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Clade, PhyloError> {
        let path = path.as_ref();
        log::debug!("reading tree from {}", path.display());
        let file = File::open(path)?;
        self.parse_reader(BufReader::new(file))
    }

    /// Parses a tree from a buffered reader, reading it until EOF.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Clade, PhyloError> {
        let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
        Ok(self.parse_lines(lines)?)
    }

    /// Parses a tree from a string.
    pub fn parse_str(&self, text: &str) -> Result<Clade, ParsingError> {
        self.parse_lines(text.lines())
    }

    /// Parses a tree from raw lines of text (without line terminators).
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<Clade, ParsingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records = preprocess(lines, &self.config)?;
        self.parse_records(&records)
    }

    /// Builds a tree from preprocessed records.
    ///
    /// The first record is the root; all following records with larger
    /// indentation form its subtree. Records after the root's block
    /// (same or smaller indentation than the root) are ignored.
    ///
    /// # Returns
    /// * `Ok(Clade)` - Root of the tree
    /// * `Err(ParsingError)` - On the first invalid line; no partial tree is returned
    pub fn parse_records(&self, records: &[LineRecord]) -> Result<Clade, ParsingError> {
        let Some((first, rest)) = records.split_first() else {
            return Err(ParsingError::without_context(ParsingErrorType::NoValidLines));
        };

        let mut root = self.new_clade(first)?;
        let consumed = self.attach_children(&mut root, first.indent, rest, 0)?;

        if consumed < rest.len() {
            log::warn!(
                "ignoring {} lines after the root block, starting at line {}",
                rest.len() - consumed,
                rest[consumed].line_number
            );
        }
        log::debug!(
            "parsed tree with {} clades and {} samples",
            root.num_clades(),
            root.num_samples()
        );

        Ok(root)
    }
}

// ============================================================================
// Parsing Logic (private)
// ============================================================================
impl TreeParser {
    /// Adds all subclades and samples in the block below `parent` to it.
    ///
    /// The block ends with the first record with indentation of at most
    /// `parent_indent`. The first record of the block determines the
    /// indentation of the children; deeper records belong to the preceding
    /// child clade and are consumed by its recursive call.
    ///
    /// # Returns
    /// Number of records consumed from `records`
    fn attach_children(
        &self,
        parent: &mut Clade,
        parent_indent: usize,
        records: &[LineRecord],
        depth: usize,
    ) -> Result<usize, ParsingError> {
        let mut child_indent: Option<usize> = None;
        let mut pos = 0;

        while let Some(record) = records.get(pos) {
            if record.indent <= parent_indent {
                // Beginning of next block
                break;
            }
            pos += 1;

            let indent = *child_indent.get_or_insert(record.indent);
            if record.indent != indent {
                // Not a direct child, e.g. below a sample
                continue;
            }

            if depth >= self.config.max_depth {
                return Err(ParsingError::max_depth_exceeded(record, self.config.max_depth));
            }

            if self.is_sample(record) {
                parent.add_sample(self.new_sample(record)?);
            } else {
                let mut clade = self.new_clade(record)?;
                pos += self.attach_children(&mut clade, record.indent, &records[pos..], depth + 1)?;
                parent.add_subclade(clade);
            }
        }

        Ok(pos)
    }

    fn is_sample(&self, record: &LineRecord) -> bool {
        record.text.contains(self.config.sample_marker.as_str())
    }

    /// Creates a clade (without children) from a record.
    fn new_clade(&self, record: &LineRecord) -> Result<Clade, ParsingError> {
        let snp = extract_id(&record.text);
        let tmrca = self.parse_tmrca(record)?;
        Ok(Clade::new(record.text.as_str(), snp, tmrca))
    }

    /// Reads the age estimate from the first token after the TMRCA marker.
    ///
    /// Any finite number is accepted, negative ones included; `inf` and
    /// `NaN` are rejected.
    fn parse_tmrca(&self, record: &LineRecord) -> Result<Tmrca, ParsingError> {
        let Some(idx) = record.text.find(self.config.tmrca_marker.as_str()) else {
            return Ok(UNKNOWN_TMRCA);
        };

        let rest = slice_from(&record.text, idx + self.config.tmrca_skip);
        match rest.split_whitespace().next() {
            Some(token) => match token.parse::<Tmrca>() {
                Ok(tmrca) if tmrca.is_finite() => Ok(tmrca),
                _ => Err(ParsingError::invalid_tmrca(record, token)),
            },
            None => Ok(UNKNOWN_TMRCA),
        }
    }

    /// Creates a sample from a record, reading its ID after the sample marker.
    fn new_sample(&self, record: &LineRecord) -> Result<Sample, ParsingError> {
        let marker = self.config.sample_marker.as_str();
        let id_start = record
            .text
            .find(marker)
            .map(|idx| idx + marker.len())
            .ok_or_else(|| ParsingError::invalid_sample(record))?;

        let rest = &record.text[id_start..];
        if rest.is_empty() {
            return Err(ParsingError::invalid_sample(record));
        }

        Ok(Sample::new(record.text.as_str(), extract_id(rest)))
    }
}
