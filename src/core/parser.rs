//! Parser for the custom text blob.
//!
//! The blob is a list of entries separated by blank lines. Lines starting
//! with `#` are comments. No external dependencies.

/// One candidate logo text: its display lines, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entry {
    lines: Vec<String>,
}

impl Entry {
    /// Create an entry from its lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// The display lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the entry has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined with `\n`.
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }
}

/// Split text on `\r\n`, `\r` and `\n`.
///
/// Unlike [`str::lines`], a trailing line ending yields a final empty line,
/// and a lone `\r` counts as a line ending.
///
/// # Examples
///
/// ```
/// use bevy_menu_text::core::split_lines;
///
/// assert_eq!(split_lines("a\r\nb\rc\n"), vec!["a", "b", "c", ""]);
/// ```
pub fn split_lines(input: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = input.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                lines.push(&input[start..i]);
                // \r\n is one line ending
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            b'\n' => {
                lines.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    lines.push(&input[start..]);
    lines
}

/// Check if a line is a comment (non-empty and starting with `#`).
pub fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

/// Parse the custom text blob into entries.
///
/// # Syntax
///
/// - Entries are separated by empty lines
/// - Lines beginning with `#` are ignored
/// - The last entry does not need a trailing empty line
/// - Entries with no lines are dropped
///
/// Parsing never fails; malformed input produces fewer entries.
///
/// # Examples
///
/// ```
/// use bevy_menu_text::core::{parse_entries, Entry};
///
/// let entries = parse_entries("# two lines\nBEAT\nSABER\n\nhello");
/// assert_eq!(entries, vec![Entry::new(["BEAT", "SABER"]), Entry::new(["hello"])]);
/// ```
pub fn parse_entries(raw: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    if raw.is_empty() {
        return entries;
    }

    let mut current: Vec<String> = Vec::new();

    for line in split_lines(raw).into_iter().filter(|l| !is_comment(l)) {
        if line.is_empty() {
            if !current.is_empty() {
                entries.push(Entry {
                    lines: std::mem::take(&mut current),
                });
            }
        } else {
            current.push(line.to_string());
        }
    }

    // Last entry without a trailing blank line
    if !current.is_empty() {
        entries.push(Entry { lines: current });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_of(entries: &[Entry]) -> Vec<Vec<&str>> {
        entries
            .iter()
            .map(|e| e.lines().iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_entries("").is_empty());
    }

    #[test]
    fn test_parse_blank_line_delimited() {
        let entries = parse_entries("A\nB\n\nC\n\n");
        assert_eq!(lines_of(&entries), vec![vec!["A", "B"], vec!["C"]]);
    }

    #[test]
    fn test_parse_no_trailing_blank_line() {
        let entries = parse_entries("A\n\nB");
        assert_eq!(lines_of(&entries), vec![vec!["A"], vec!["B"]]);
    }

    #[test]
    fn test_parse_all_comments() {
        assert!(parse_entries("#a\n#b").is_empty());
    }

    #[test]
    fn test_parse_comments_anywhere() {
        let entries = parse_entries("#head\nA\n#mid\nB\n\n#only\n\nC\n#tail");
        assert_eq!(lines_of(&entries), vec![vec!["A", "B"], vec!["C"]]);
        for entry in &entries {
            assert!(entry.lines().iter().all(|l| !l.starts_with('#')));
        }
    }

    #[test]
    fn test_parse_hash_not_first_char() {
        let entries = parse_entries(" #not a comment\nC#");
        assert_eq!(lines_of(&entries), vec![vec![" #not a comment", "C#"]]);
    }

    #[test]
    fn test_parse_mixed_line_endings() {
        let entries = parse_entries("A\r\nB\r\rC\nD\r\n\r\nE");
        assert_eq!(lines_of(&entries), vec![vec!["A", "B"], vec!["C", "D"], vec!["E"]]);
    }

    #[test]
    fn test_parse_repeated_blank_lines() {
        let entries = parse_entries("\n\nA\n\n\n\nB\n\n\n");
        assert_eq!(lines_of(&entries), vec![vec!["A"], vec!["B"]]);
    }

    #[test]
    fn test_parse_keeps_whitespace() {
        let entries = parse_entries("  spaced  \n\t<color=#FF0000>red</color>");
        assert_eq!(
            lines_of(&entries),
            vec![vec!["  spaced  ", "\t<color=#FF0000>red</color>"]]
        );
    }

    #[test]
    fn test_parse_whitespace_line_is_content() {
        // Only a truly empty line delimits entries
        let entries = parse_entries("A\n \nB");
        assert_eq!(lines_of(&entries), vec![vec!["A", " ", "B"]]);
    }

    #[test]
    fn test_split_lines_crlf_is_single_break() {
        assert_eq!(split_lines("a\r\n\r\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_lines_no_breaks() {
        assert_eq!(split_lines("abc"), vec!["abc"]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_split_lines_multibyte() {
        assert_eq!(split_lines("é\nß\r✓"), vec!["é", "ß", "✓"]);
    }

    #[test]
    fn test_entry_joined() {
        let entry = Entry::new(["L1", "L2", "L3"]);
        assert_eq!(entry.joined(), "L1\nL2\nL3");
        assert_eq!(entry.len(), 3);
        assert!(!entry.is_empty());
        assert!(Entry::default().is_empty());
    }
}
