use regex::Regex;
use std::sync::OnceLock;

// `\x{FEFF}` (byte-order mark) sits alongside `\s` everywhere, matching
// `is_line_space` in the line classifier.

/// A list marker anywhere in the text, at the start of a line.
fn list_marker_regex() -> &'static Regex {
    static LIST_MARKER: OnceLock<Regex> = OnceLock::new();
    LIST_MARKER.get_or_init(|| {
        Regex::new(r"(?m)^[\s\x{FEFF}]*([-*]|[0-9]+\.)[\s\x{FEFF}]")
            .expect("Invalid list marker regex")
    })
}

/// A blank line (empty or whitespace only) directly followed by a list marker.
///
/// `[^\S\n]` is whitespace other than a line feed, so the blank line may hold
/// spaces, tabs, a BOM or the `\r` of a CRLF break.
fn spaced_marker_regex() -> &'static Regex {
    static SPACED_MARKER: OnceLock<Regex> = OnceLock::new();
    SPACED_MARKER.get_or_init(|| {
        Regex::new(r"\n(?:[^\S\n]|\x{FEFF})*\n[\s\x{FEFF}]*([-*]|[0-9]+\.)[\s\x{FEFF}]")
            .expect("Invalid spaced marker regex")
    })
}

/// Cheap check for whether [`fix_list_spacing`](super::fix_list_spacing) could change `text`.
///
/// May report true for text the full pass leaves alone, but never reports
/// false for text the full pass would alter. Only the automatic paste path
/// uses this; the manual fix command always runs the full pass.
pub fn has_spaced_list_items(text: &str) -> bool {
    list_marker_regex().is_match(text) && spaced_marker_regex().is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- a\n\n- b")]
    #[case("1. a\n\n2. b")]
    #[case("- a\n\n\n\n* b")]
    #[case("- a\n   \n- b")]
    #[case("- a\r\n\r\n- b")]
    #[case("- a\n\t\n  10. b")]
    #[case("intro\n\n- a")]
    #[case("- a\n\u{feff}\n- b")]
    #[case("- a\n\n\u{feff}- b")]
    fn test_detects_blank_line_before_marker(#[case] text: &str) {
        assert!(has_spaced_list_items(text));
    }

    #[rstest]
    #[case("")]
    #[case("plain text\n\nmore text")]
    #[case("- a\n- b\n- c")]
    #[case("- a\n\nend")]
    #[case("-a\n\n-b")]
    #[case("+ a\n\n+ b")]
    #[case("1) a\n\n2) b")]
    fn test_rejects_text_without_spaced_markers(#[case] text: &str) {
        assert!(!has_spaced_list_items(text));
    }

    #[test]
    fn test_false_positive_is_allowed() {
        // Blank line before the first item, no item before it to join with.
        assert!(has_spaced_list_items("heading\n\n- only item"));
    }
}
