//! Utility functions for scanning lines of the indented tree format.
//!
//! This module provides the low-level scanning helpers shared by the
//! preprocessor and the tree parser: comment stripping, indentation counting,
//! identifier extraction and character-boundary-safe slicing.

/// Removes a line comment from a line of text.
///
/// A comment starts at the first occurrence of `marker` and runs until the
/// end of the line. If what remains is empty or only whitespace,
/// `None` is returned.
///
/// # Arguments
/// * `line` - The raw line of text
/// * `marker` - The comment marker, e.g. `//`
///
/// # Returns
/// `Some(&str)` with the (untrimmed) content before the comment,
/// or `None` if there is no content
///
/// # Examples
/// ```
/// # use phylogrowth::parser::utils::strip_comment;
/// assert_eq!(strip_comment("  M269 TMRCA 6400 // Bell Beaker", "//"), Some("  M269 TMRCA 6400 "));
/// assert_eq!(strip_comment("// only a comment", "//"), None);
/// assert_eq!(strip_comment(" \t ", "//"), None);
/// assert_eq!(strip_comment("L21", "//"), Some("L21"));
/// ```
pub fn strip_comment<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let content = match line.find(marker) {
        Some(idx) => &line[..idx],
        None => line,
    };

    if content.chars().all(char::is_whitespace) {
        None
    } else {
        Some(content)
    }
}

/// Counts the whitespace characters at the beginning of a line.
///
/// Every whitespace character counts as one unit of indentation,
/// a tab is not expanded to any tab width.
///
/// # Examples
/// ```
/// # use phylogrowth::parser::utils::count_indent;
/// assert_eq!(count_indent("P312"), 0);
/// assert_eq!(count_indent("    DF27"), 4);
/// assert_eq!(count_indent("\t\tZ195"), 2);
/// assert_eq!(count_indent(" \t Z272"), 3);
/// ```
pub fn count_indent(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Extracts the first ID (e.g. a SNP name) from a line of text.
///
/// An ID starts with one or more letters and ends with one or more digits.
/// Scanning skips everything up to the first letter, collects letters until
/// a digit shows up and then collects digits only. A letter after the digits,
/// or any character that is neither letter nor digit, ends the scan.
///
/// Letter numbers (e.g. `Ⅷ`) are neither letters nor digits. Other numeric
/// characters such as `²` count as digits.
///
/// # Arguments
/// * `text` - The text to scan
///
/// # Returns
/// The concatenated letters and digits, or an empty string if the text
/// contains no letter at all
///
/// # Examples
/// ```
/// # use phylogrowth::parser::utils::extract_id;
/// assert_eq!(extract_id("CTS4528 TMRCA 4500"), "CTS4528");
/// assert_eq!(extract_id("  *** 123 -"), "");
/// assert_eq!(extract_id("  *** no letters 123"), "no");
/// assert_eq!(extract_id("R1b1a2"), "R1");
/// assert_eq!(extract_id("123 ZZ11_1"), "ZZ11");
/// assert_eq!(extract_id("U106"), "U106");
/// ```
pub fn extract_id(text: &str) -> String {
    let mut id = String::new();
    let mut in_letters = false;
    let mut in_digits = false;

    for c in text.chars() {
        // Letter numbers like 'Ⅷ' are both, and count as neither
        let is_letter = c.is_alphabetic() && !c.is_numeric();
        let is_digit = c.is_numeric() && !c.is_alphabetic();

        if !in_letters && !is_letter {
            // Still searching for the start of the ID
            continue;
        } else if is_digit {
            in_digits = true;
            id.push(c);
        } else if is_letter && !in_digits {
            in_letters = true;
            id.push(c);
        } else {
            break;
        }
    }

    id
}

/// Returns the part of `text` starting at byte offset `pos`, moving `pos`
/// forward to the next character boundary if it lies inside a character.
///
/// # Returns
/// The remaining slice, empty if `pos` is at or beyond the end of `text`
///
/// # Examples
/// ```
/// # use phylogrowth::parser::utils::slice_from;
/// assert_eq!(slice_from("TMRCA 4500", 6), "4500");
/// assert_eq!(slice_from("TMRCA", 6), "");
/// assert_eq!(slice_from("TMRCA\u{00e9}12", 6), "12");
/// ```
pub fn slice_from(text: &str, pos: usize) -> &str {
    let mut start = pos;
    while start < text.len() && !text.is_char_boundary(start) {
        start += 1;
    }
    text.get(start..).unwrap_or("")
}

// =#========================================================================#=
// TESTS
// =#========================================================================#=
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_id_skips_leading_digits_and_symbols() {
        assert_eq!(extract_id("42 -> BY3332"), "BY3332");
        assert_eq!(extract_id("(FGC5494)"), "FGC5494");
    }

    #[test]
    fn test_extract_id_letter_numbers_end_scan() {
        assert_eq!(extract_id("AⅧ12"), "A");
        assert_eq!(extract_id("Ⅷ-R5"), "R5");
        assert_eq!(extract_id("B12Ⅷ3"), "B12");
    }

    #[test]
    fn test_extract_id_unicode_letters() {
        assert_eq!(extract_id("Ärger42 x"), "Ärger42");
    }

    #[test]
    fn test_extract_id_letters_only() {
        assert_eq!(extract_id("Root of the tree"), "Root");
    }

    #[test]
    fn test_extract_id_stops_at_punctuation() {
        assert_eq!(extract_id("S1194, TMRCA: 4000"), "S1194");
        assert_eq!(extract_id("Y-DNA"), "Y");
    }

    #[test]
    fn test_strip_comment_keeps_leading_whitespace() {
        assert_eq!(strip_comment("\t\tA123 // comment", "//"), Some("\t\tA123 "));
    }

    #[test]
    fn test_strip_comment_other_marker() {
        assert_eq!(strip_comment("A123 # comment", "#"), Some("A123 "));
        assert_eq!(strip_comment("# comment", "#"), None);
    }

    #[test]
    fn test_slice_from_beyond_end() {
        assert_eq!(slice_from("abc", 3), "");
        assert_eq!(slice_from("abc", 10), "");
    }
}
