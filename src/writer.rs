//! Text rendering of trees and tree file writing.
//!
//! The rendering is the indented format read by the
//! [TreeParser](crate::parser::TreeParser), so a written tree can be parsed
//! again with the same shape, child order and identifiers.

use crate::model::Clade;
use crate::parser::defs::{COMMENT_MARKER, DEFAULT_INDENT_UNIT, DEFAULT_LINE_TERMINATOR};
use chrono::{Local, NaiveDate};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Format of the date in the tree file header, e.g. `2024 Mar 7`
const HEADER_DATE_FORMAT: &str = "%Y %b %-d";

/// Average characters per rendered line, used for the capacity estimate
const LINE_CHARS: usize = 24;

// =#========================================================================#=
// RENDER CONFIG
// =#========================================================================#=
/// Formatting of the rendered tree text.
///
/// | Option            | Default  |
/// |-------------------|----------|
/// | `indent_unit`     | `"\t"`   |
/// | `line_terminator` | `"\r\n"` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Prefix repeated once per nesting level
    pub indent_unit: String,
    /// Appended to every line, including the last
    pub line_terminator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
            line_terminator: DEFAULT_LINE_TERMINATOR.to_string(),
        }
    }
}

impl RenderConfig {
    /// Sets the prefix used for each nesting level.
    pub fn with_indent_unit(mut self, indent_unit: impl Into<String>) -> Self {
        self.indent_unit = indent_unit.into();
        self
    }

    /// Sets the line terminator.
    pub fn with_line_terminator(mut self, line_terminator: impl Into<String>) -> Self {
        self.line_terminator = line_terminator.into();
        self
    }
}

// =#========================================================================#=
// RENDERING
// =#========================================================================#=
/// Returns the text representation of the subtree rooted at `clade`.
///
/// Output is in pre-order: first the clade line `"{snp}, TMRCA: {tmrca}"`,
/// then its samples as `"id:{id}"` one level deeper, then each subclade
/// rendered one level deeper. The TMRCA is printed without decimals.
///
/// # Arguments
/// * `clade` - Root of the subtree to render
/// * `indent` - Nesting level of `clade` itself
/// * `config` - Indent unit and line terminator
///
/// # Example
/// ```
/// use phylogrowth::model::{Clade, Sample};
/// use phylogrowth::writer::{RenderConfig, render};
///
/// let mut root = Clade::new("P312 TMRCA 4500", "P312", 4500.0);
/// root.add_sample(Sample::new("id:A1", "A1"));
/// root.add_subclade(Clade::new("U152", "U152", 0.0));
///
/// let config = RenderConfig::default().with_indent_unit("  ").with_line_terminator("\n");
/// assert_eq!(
///     render(&root, 0, &config),
///     "P312, TMRCA: 4500\n  id:A1\n  U152, TMRCA: 0\n"
/// );
/// ```
pub fn render(clade: &Clade, indent: usize, config: &RenderConfig) -> String {
    let mut out = String::with_capacity(estimate_render_len(clade));
    let mut stack = vec![(clade, indent)];

    while let Some((clade, level)) = stack.pop() {
        let clade_line = format!("{}, TMRCA: {:.0}", clade.snp(), clade.tmrca());
        push_line(&mut out, level, config, &clade_line);
        for sample in clade.samples() {
            push_line(&mut out, level + 1, config, &sample.to_string());
        }

        // Reverse, so first subclade is rendered first
        stack.extend(clade.subclades().iter().rev().map(|sub| (sub, level + 1)));
    }

    out
}

fn push_line(out: &mut String, level: usize, config: &RenderConfig, content: &str) {
    for _ in 0..level {
        out.push_str(&config.indent_unit);
    }
    out.push_str(content);
    out.push_str(&config.line_terminator);
}

fn estimate_render_len(clade: &Clade) -> usize {
    let lines: usize = clade
        .pre_order_iter()
        .map(|c| 1 + c.samples().len())
        .sum();
    lines * LINE_CHARS
}

// =#========================================================================#=
// TREE FILES
// =#========================================================================#=
/// Returns the comment header of a tree file.
///
/// The header names the program, the command used to create the file and
/// the date, and ends with an empty line.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use phylogrowth::writer::{RenderConfig, tree_file_header};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// let config = RenderConfig::default().with_line_terminator("\n");
/// let header = tree_file_header("phylogrowth --treein tree.txt", date, &config);
/// assert!(header.ends_with("// 2024 Mar 7\n\n"));
/// ```
pub fn tree_file_header(command: &str, date: NaiveDate, config: &RenderConfig) -> String {
    let nl = &config.line_terminator;
    format!(
        "{COMMENT_MARKER} This tree was created by the phylogrowth program{nl}\
         {COMMENT_MARKER} Command used:{nl}\
         {COMMENT_MARKER} {command}{nl}\
         {COMMENT_MARKER} {}{nl}{nl}",
        date.format(HEADER_DATE_FORMAT)
    )
}

/// Writes a tree with header comment to `file`.
///
/// # Errors
/// Returns an I/O error if writing fails.
pub fn write_tree(file: File, clade: &Clade, command: &str, config: &RenderConfig) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    let today = Local::now().date_naive();

    writer.write_all(tree_file_header(command, today, config).as_bytes())?;
    writer.write_all(render(clade, 0, config).as_bytes())?;

    writer.flush()
}

/// Creates (or truncates) the file at `path` and writes the tree to it,
/// see [write_tree].
pub fn write_tree_file<P: AsRef<Path>>(
    path: P,
    clade: &Clade,
    command: &str,
    config: &RenderConfig,
) -> io::Result<()> {
    let path = path.as_ref();
    log::debug!("writing tree to {}", path.display());
    write_tree(File::create(path)?, clade, command, config)
}
