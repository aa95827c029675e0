//! Document title inference.
//!
//! Looks at the first non-blank line of a Markdown document and returns its
//! text when it is a level-one heading, either in prefix form (`# Title`) or
//! underlined with a run of `=` characters:
//!
//! ```text
//! Title
//! =====
//! ```
//!
//! Anything else yields an empty title. Only the raw bytes are inspected; the
//! Markdown engine is not involved.

/// Minimum length of a `=` underline.
const MIN_UNDERLINE_LEN: usize = 3;

/// Minimum length of a prefix heading line (`#`, a blank, one character).
const MIN_PREFIX_HEADER_LEN: usize = 3;

/// Extracts a title from raw Markdown content.
pub trait TitleExtractor {
    /// Returns the inferred title, or an empty string when there is none.
    fn extract_title(&self, content: &[u8]) -> String;
}

/// Title extractor for Markdown level-one headings.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownTitleExtractor;

impl MarkdownTitleExtractor {
    /// Creates a new extractor.
    pub fn new() -> Self {
        Self
    }
}

impl TitleExtractor for MarkdownTitleExtractor {
    fn extract_title(&self, content: &[u8]) -> String {
        extract_title(content)
    }
}

/// Extracts the title of a Markdown document.
///
/// # Example
///
/// ```
/// use mdtohtml::extract_title;
///
/// assert_eq!(extract_title(b"# My Title\n\nBody"), "My Title");
/// assert_eq!(extract_title(b"Title\n====\n"), "Title");
/// assert_eq!(extract_title(b"## Level2\n"), "");
/// ```
pub fn extract_title(content: &[u8]) -> String {
    let start = skip_blank_lines(content, 0);
    if start >= content.len() {
        return String::new();
    }

    let (line, next) = first_line(content, start);
    if line.is_empty() {
        return String::new();
    }

    if let Some(title) = prefix_header(line) {
        return title;
    }

    if is_underline(content, next) {
        return trim(line);
    }

    String::new()
}

fn skip_blank_lines(input: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < input.len() && matches!(input[i], b'\n' | b'\r') {
        i += 1;
    }
    i
}

/// Returns the line starting at `start` and the offset of the following line.
fn first_line(input: &[u8], start: usize) -> (&[u8], usize) {
    let end = input[start..]
        .iter()
        .position(|&b| b == b'\n' || b == b'\r')
        .map_or(input.len(), |offset| start + offset);

    let next = match &input[end..] {
        [b'\r', b'\n', ..] => end + 2,
        [] => end,
        _ => end + 1,
    };

    (&input[start..end], next)
}

fn prefix_header(line: &[u8]) -> Option<String> {
    if line.len() >= MIN_PREFIX_HEADER_LEN && line[0] == b'#' && matches!(line[1], b' ' | b'\t')
    {
        let title = trim(&line[2..]);
        if !title.is_empty() {
            return Some(title);
        }
    }
    None
}

/// Checks for a `===` underline (optionally followed by blanks) at `pos`.
fn is_underline(input: &[u8], pos: usize) -> bool {
    let rest = input.get(pos..).unwrap_or_default();

    let run = rest.iter().take_while(|&&b| b == b'=').count();
    if run < MIN_UNDERLINE_LEN {
        return false;
    }

    let after = &rest[run..];
    let blanks = after.iter().take_while(|&&b| matches!(b, b' ' | b'\t')).count();

    match after.get(blanks) {
        None => true,
        Some(&b) => b == b'\n' || b == b'\r',
    }
}

fn trim(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_header() {
        assert_eq!(extract_title(b"# My Title\n\nBody"), "My Title");
        assert_eq!(extract_title(b"#  Spaced  \n"), "Spaced");
        assert_eq!(extract_title(b"#\tTabbed\n"), "Tabbed");
    }

    #[test]
    fn test_prefix_header_without_newline() {
        assert_eq!(extract_title(b"# Only Line"), "Only Line");
    }

    #[test]
    fn test_prefix_requires_blank_after_hash() {
        assert_eq!(extract_title(b"#NoSpace\n"), "");
        assert_eq!(extract_title(b"## Level2\n"), "");
        assert_eq!(extract_title(b"# \n"), "");
    }

    #[test]
    fn test_underline_header() {
        assert_eq!(extract_title(b"Title\n====\n\nBody"), "Title");
        assert_eq!(extract_title(b"  Padded Title  \n===\n"), "Padded Title");
    }

    #[test]
    fn test_underline_at_end_of_input() {
        assert_eq!(extract_title(b"Title\n====="), "Title");
    }

    #[test]
    fn test_underline_trailing_blanks() {
        assert_eq!(extract_title(b"Title\n===  \t\nBody"), "Title");
    }

    #[test]
    fn test_underline_too_short() {
        assert_eq!(extract_title(b"Title\n==\nBody"), "");
        assert_eq!(extract_title(b"Title\n==\n"), "");
    }

    #[test]
    fn test_underline_with_trailing_text() {
        assert_eq!(extract_title(b"Title\n=== x\n"), "");
        assert_eq!(extract_title(b"Title\n====x\n"), "");
    }

    #[test]
    fn test_dash_underline_is_not_a_title() {
        assert_eq!(extract_title(b"Title\n----\n"), "");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(extract_title(b""), "");
        assert_eq!(extract_title(b"\n\n\r\n"), "");
    }

    #[test]
    fn test_leading_blank_lines_skipped() {
        assert_eq!(extract_title(b"\n\n# After Blanks\n"), "After Blanks");
        assert_eq!(extract_title(b"\r\n\r\nTitle\r\n===\r\n"), "Title");
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(extract_title(b"Title\r\n====\r\n"), "Title");
        assert_eq!(extract_title(b"Title\r====\r"), "Title");
        assert_eq!(extract_title(b"# CR Only\rBody"), "CR Only");
    }

    #[test]
    fn test_plain_paragraph_has_no_title() {
        assert_eq!(extract_title(b"Just some content without a title."), "");
    }

    #[test]
    fn test_underline_must_be_directly_after_first_line() {
        assert_eq!(extract_title(b"Title\n\n====\n"), "");
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let title = extract_title(b"# Caf\xE9\n");
        assert!(title.starts_with("Caf"));
    }

    #[test]
    fn test_trait_object() {
        let extractor: &dyn TitleExtractor = &MarkdownTitleExtractor::new();
        assert_eq!(extractor.extract_title(b"# Dyn\n"), "Dyn");
    }
}
