//! Text helpers for source blocks and the live editor buffer.

use std::ops::Range;

/// Number of lines in `text`: newline count plus one.
///
/// Empty text still occupies one (empty) line, and a trailing newline opens
/// a new line, matching how the textarea displays it.
pub fn count_lines(text: &str) -> usize {
    text.bytes().filter(|byte| *byte == b'\n').count() + 1
}

/// Whether a content-editable element hides its placeholder.
///
/// Any text content, whitespace included, counts as content.
pub fn has_visible_content(text_content: &str) -> bool {
    !text_content.is_empty()
}

/// Trim an optional string and drop empty values.
///
/// # Returns
/// `None` when the input is missing or whitespace-only; otherwise the trimmed
/// string.
pub fn normalize_optional_nonempty(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Editable paste buffer with a char-indexed cursor and optional selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorBuffer {
    text: String,
    cursor: usize,
    selection: Option<Range<usize>>,
}

impl EditorBuffer {
    /// Create a buffer with the cursor at the end of `text`.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
            selection: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn line_count(&self) -> usize {
        count_lines(&self.text)
    }

    /// Move the cursor, clamped to the buffer, and drop any selection.
    pub fn set_cursor(&mut self, char_index: usize) {
        self.cursor = char_index.min(self.len_chars());
        self.selection = None;
    }

    /// Select a char range; the cursor moves to its end.
    pub fn select(&mut self, range: Range<usize>) {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);
        self.cursor = end;
        self.selection = (start < end).then_some(start..end);
    }

    /// Replace the whole text, e.g. from a paste or programmatic reset.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.cursor.min(self.len_chars());
        self.selection = None;
    }

    /// Insert a literal tab at the cursor instead of moving focus.
    ///
    /// A selection is replaced by the tab. The cursor ends up immediately
    /// after the inserted character.
    pub fn insert_tab(&mut self) {
        self.insert_str("\t");
    }

    /// Insert `value` at the cursor, replacing any selection.
    pub fn insert_str(&mut self, value: &str) {
        let range = self
            .selection
            .take()
            .unwrap_or(self.cursor..self.cursor);
        let start = byte_index(&self.text, range.start);
        let end = byte_index(&self.text, range.end);
        self.text.replace_range(start..end, value);
        self.cursor = range.start + value.chars().count();
    }

    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }
}
