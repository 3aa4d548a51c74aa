//! Line-oriented block search and removal
//!
//! The engine is pure: it works on string content and line indices and leaves
//! all file handling to the fixer module. Matching is literal substring
//! containment against raw line content, so marker whitespace is significant.

/// Literal substrings that delimit the section to remove
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMarkers {
    /// Substring identifying the first line of the section
    pub start: String,
    /// Substring identifying the closing line of the section
    pub end: String,
    /// Second substring that must appear on the same line as `end`
    pub end_qualifier: String,
}

impl BlockMarkers {
    /// Create markers from the three literal substrings
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        end_qualifier: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            end_qualifier: end_qualifier.into(),
        }
    }

    fn matches_start(&self, line: &str) -> bool {
        line.contains(&self.start)
    }

    fn matches_end(&self, line: &str) -> bool {
        line.contains(&self.end) && line.contains(&self.end_qualifier)
    }
}

/// Inclusive range of zero-based line indices occupied by a matched section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    /// Index of the start-marker line
    pub start: usize,
    /// Index of the end-marker line
    pub end: usize,
}

impl BlockSpan {
    /// Number of lines covered by the span, marker lines included
    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Split text into lines that keep their terminators.
///
/// Every byte of the input belongs to exactly one element, so concatenating
/// the result reproduces the input unchanged. `\r\n` stays attached to its
/// line and a file without a trailing newline yields a final element without
/// one.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Locate the section delimited by the markers.
///
/// The span starts at the first line containing the start marker and ends at
/// the first strictly later line containing both the end marker and its
/// qualifier. Returns `None` when either line is missing.
pub fn find_block(lines: &[&str], markers: &BlockMarkers) -> Option<BlockSpan> {
    let start = lines.iter().position(|line| markers.matches_start(line))?;
    let end = lines[start + 1..]
        .iter()
        .position(|line| markers.matches_end(line))
        .map(|offset| start + 1 + offset)?;

    Some(BlockSpan { start, end })
}

/// Remove the first matched section from `text`.
///
/// Content outside the span is preserved byte for byte. Returns the rewritten
/// text and the span that was cut, or `None` when no section matches.
pub fn remove_block(text: &str, markers: &BlockMarkers) -> Option<(String, BlockSpan)> {
    let lines = split_lines(text);
    let span = find_block(&lines, markers)?;

    let mut result = String::with_capacity(text.len());
    result.extend(lines[..span.start].iter().copied());
    result.extend(lines[span.end + 1..].iter().copied());

    Some((result, span))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> BlockMarkers {
        BlockMarkers::new("<section id=\"dup\">", "</section>", "<!-- generated -->")
    }

    #[test]
    fn test_split_lines_reassembles_input() {
        let text = "one\ntwo\r\nthree";
        let lines = split_lines(text);
        assert_eq!(lines, vec!["one\n", "two\r\n", "three"]);
        assert_eq!(lines.concat(), text);
    }

    #[test]
    fn test_find_block_simple() {
        let lines = vec![
            "<html>\n",
            "<section id=\"dup\">\n",
            "  content\n",
            "</section> <!-- generated -->\n",
            "</html>\n",
        ];
        let span = find_block(&lines, &markers()).expect("block should match");
        assert_eq!(span, BlockSpan { start: 1, end: 3 });
        assert_eq!(span.line_count(), 3);
    }

    #[test]
    fn test_find_block_missing_start() {
        let lines = vec!["<html>\n", "</section> <!-- generated -->\n"];
        assert_eq!(find_block(&lines, &markers()), None);
    }

    #[test]
    fn test_find_block_missing_end() {
        let lines = vec!["<section id=\"dup\">\n", "  content\n"];
        assert_eq!(find_block(&lines, &markers()), None);
    }

    #[test]
    fn test_end_requires_qualifier_on_same_line() {
        let lines = vec![
            "<section id=\"dup\">\n",
            "</section>\n",
            "<!-- generated -->\n",
        ];
        assert_eq!(find_block(&lines, &markers()), None);
    }

    #[test]
    fn test_end_before_start_does_not_qualify() {
        let lines = vec![
            "</section> <!-- generated -->\n",
            "<section id=\"dup\">\n",
            "  content\n",
        ];
        assert_eq!(find_block(&lines, &markers()), None);
    }

    #[test]
    fn test_end_must_be_strictly_after_start() {
        // A single line carrying all three literals is not a section.
        let lines = vec!["<section id=\"dup\"></section> <!-- generated -->\n"];
        assert_eq!(find_block(&lines, &markers()), None);
    }

    #[test]
    fn test_first_start_marker_wins() {
        let lines = vec![
            "<section id=\"dup\">\n",
            "  first\n",
            "<section id=\"dup\">\n",
            "  second\n",
            "</section> <!-- generated -->\n",
        ];
        let span = find_block(&lines, &markers()).expect("block should match");
        assert_eq!(span, BlockSpan { start: 0, end: 4 });
    }

    #[test]
    fn test_remove_block_preserves_surrounding_bytes() {
        let text = "keep1\n<section id=\"dup\">\n  dup\n</section> <!-- generated -->\nkeep2\n";
        let (updated, span) = remove_block(text, &markers()).expect("block should match");
        assert_eq!(updated, "keep1\nkeep2\n");
        assert_eq!(span, BlockSpan { start: 1, end: 3 });
    }

    #[test]
    fn test_remove_block_keeps_crlf_terminators() {
        let text = "keep1\r\n<section id=\"dup\">\r\n</section> <!-- generated -->\r\nkeep2\r\n";
        let (updated, _) = remove_block(text, &markers()).expect("block should match");
        assert_eq!(updated, "keep1\r\nkeep2\r\n");
    }

    #[test]
    fn test_remove_block_keeps_missing_final_newline() {
        let text = "<section id=\"dup\">\n</section> <!-- generated -->\nlast line no newline";
        let (updated, _) = remove_block(text, &markers()).expect("block should match");
        assert_eq!(updated, "last line no newline");
    }

    #[test]
    fn test_remove_block_none_on_miss() {
        assert_eq!(remove_block("nothing here\n", &markers()), None);
    }
}
