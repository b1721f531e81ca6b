use std::ops::Range;

/// The editing surface a host exposes to the fixer.
///
/// Hosts dispatch paste and command events one at a time, so the methods
/// take `&mut self` and need no synchronization of their own.
pub trait Editor {
    /// Full text of the current note.
    fn value(&self) -> String;

    /// Replaces the full text of the current note.
    fn set_value(&mut self, text: &str);

    /// Replaces the current selection (or inserts at the cursor) with `text`.
    fn replace_selection(&mut self, text: &str);
}

/// In-memory [`Editor`] holding a buffer and a selection.
///
/// The selection is a byte range into the buffer; an empty range is a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringEditor {
    text: String,
    selection: Range<usize>,
}

impl StringEditor {
    /// Creates an editor with the cursor at the end of `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self {
            text,
            selection: end..end,
        }
    }

    /// Sets the selection, clamped to the buffer and snapped back to char boundaries.
    pub fn select(&mut self, range: Range<usize>) {
        let start = self.floor_char_boundary(range.start);
        let end = self.floor_char_boundary(range.end).max(start);
        self.selection = start..end;
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn floor_char_boundary(&self, index: usize) -> usize {
        let mut index = index.min(self.text.len());
        while !self.text.is_char_boundary(index) {
            index -= 1;
        }
        index
    }
}

impl Editor for StringEditor {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn set_value(&mut self, text: &str) {
        self.text = text.to_string();
        let end = self.text.len();
        self.selection = end..end;
    }

    fn replace_selection(&mut self, text: &str) {
        let Range { start, end } = self.selection.clone();
        self.text.replace_range(start..end, text);
        let cursor = start + text.len();
        self.selection = cursor..cursor;
    }
}
