/// One slide's worth of text together with the limits it is checked against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBlock {
    /// Text as configured, possibly spanning several lines.
    pub raw: String,
    /// Inclusive per-line character limit.
    pub max_line_chars: usize,
    /// Inclusive line-count limit.
    pub max_lines: usize,
}

impl TextBlock {
    /// Create a block from raw text and its limits.
    pub fn new(raw: impl Into<String>, max_line_chars: usize, max_lines: usize) -> Self {
        Self {
            raw: raw.into(),
            max_line_chars,
            max_lines,
        }
    }

    /// Lines as they are counted and drawn.
    ///
    /// A single trailing blank line is dropped; an empty block has no lines.
    pub fn lines(&self) -> Vec<&str> {
        let mut lines: Vec<&str> = self.raw.lines().collect();
        if lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        lines
    }

    /// Same limits, different text.
    pub(crate) fn with_raw(&self, raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            max_line_chars: self.max_line_chars,
            max_lines: self.max_lines,
        }
    }
}

/// Number of characters a line counts for: Unicode scalars after trailing whitespace is removed.
pub(crate) fn line_char_count(line: &str) -> usize {
    line.trim_end().chars().count()
}
