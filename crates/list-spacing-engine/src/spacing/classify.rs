/// Classification of a single line containing only local facts.
///
/// Each line is classified independently without reference to the lines
/// around it, so nesting depth and surrounding blocks play no part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Starts with `-`, `*` or `N.` followed by whitespace, after any indent.
    ListItem,
    /// Empty after trimming whitespace.
    Blank,
    /// Anything else.
    Text,
}

/// Classifies a line into a [`LineKind`].
pub fn classify_line(line: &str) -> LineKind {
    if is_list_item(line) {
        LineKind::ListItem
    } else if is_blank(line) {
        LineKind::Blank
    } else {
        LineKind::Text
    }
}

/// Whitespace for line classification: Unicode whitespace plus the byte-order
/// mark, which notes saved with a UTF-8 BOM carry at the start of line one.
pub(crate) fn is_line_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Returns true if the line opens a bullet (`-`, `*`) or numbered (`1.`) list item.
///
/// Leading whitespace is ignored and the marker must be followed by at least
/// one whitespace character. A trailing `\r` left over from a CRLF line break
/// is not line content and never counts as that whitespace.
pub fn is_list_item(line: &str) -> bool {
    let content = line
        .strip_suffix('\r')
        .unwrap_or(line)
        .trim_start_matches(is_line_space);

    let after_marker = match content.strip_prefix(['-', '*']) {
        Some(rest) => rest,
        None => {
            let digits = content.len()
                - content
                    .trim_start_matches(|c: char| c.is_ascii_digit())
                    .len();
            if digits == 0 {
                return false;
            }
            match content[digits..].strip_prefix('.') {
                Some(rest) => rest,
                None => return false,
            }
        }
    };

    after_marker.starts_with(is_line_space)
}

/// Returns true if the line is empty once surrounding whitespace is trimmed.
pub fn is_blank(line: &str) -> bool {
    line.trim_matches(is_line_space).is_empty()
}
