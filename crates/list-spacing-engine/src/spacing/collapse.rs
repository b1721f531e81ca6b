use log::{debug, trace};

use super::classify::{LineKind, classify_line};

/// Result of a full spacing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacingFix {
    /// The normalized text.
    pub text: String,
    /// Number of blank-line runs removed from between list items.
    pub collapsed_runs: usize,
    /// Total number of blank lines removed.
    pub removed_lines: usize,
}

impl SpacingFix {
    /// Whether the pass removed anything.
    pub fn changed(&self) -> bool {
        self.removed_lines > 0
    }
}

/// Removes blank-line runs that sit between two list items.
///
/// Every other line, blank or not, is kept verbatim and in order. Runs of any
/// length collapse to nothing; there is no "keep one blank line" mode.
pub fn fix_list_spacing(text: &str) -> String {
    fix_list_spacing_with_stats(text).text
}

/// Same pass as [`fix_list_spacing`], also counting what was removed.
///
/// Lines are split on `\n` and joined back with `\n`. A `\r` before the `\n`
/// stays on its line, so CRLF and mixed line endings survive untouched and a
/// removed CRLF blank line takes its `\r` with it.
pub fn fix_list_spacing_with_stats(text: &str) -> SpacingFix {
    let lines: Vec<&str> = text.split('\n').collect();
    let kinds: Vec<LineKind> = lines.iter().map(|line| classify_line(line)).collect();
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    let mut collapsed_runs = 0;
    let mut removed_lines = 0;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        kept.push(line);

        if kinds[i] != LineKind::ListItem {
            i += 1;
            continue;
        }

        let run_end = blank_run_end(&kinds, i + 1);
        let run_len = run_end - (i + 1);

        if run_len > 0 && kinds.get(run_end) == Some(&LineKind::ListItem) {
            // The next list item is re-examined on the following iteration.
            trace!(
                "collapsing {run_len} blank line(s) between lines {} and {}",
                i + 1,
                run_end + 1
            );
            collapsed_runs += 1;
            removed_lines += run_len;
        } else {
            kept.extend_from_slice(&lines[i + 1..run_end]);
        }
        i = run_end;
    }

    debug!(
        "list spacing pass: {} line(s) in, {collapsed_runs} run(s) collapsed, {removed_lines} line(s) removed",
        lines.len()
    );

    SpacingFix {
        text: kept.join("\n"),
        collapsed_runs,
        removed_lines,
    }
}

/// Index one past the run of blank lines starting at `start`.
fn blank_run_end(kinds: &[LineKind], start: usize) -> usize {
    kinds[start..]
        .iter()
        .position(|kind| *kind != LineKind::Blank)
        .map_or(kinds.len(), |offset| start + offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("- a\n\n- b\n\n- c", "- a\n- b\n- c")]
    #[case("1. a\n\n2. b", "1. a\n2. b")]
    #[case("text\n\n- a\n\n- b\n\nmore", "text\n\n- a\n- b\n\nmore")]
    #[case("- a\n\n\n- b", "- a\n- b")]
    #[case("- a\n\nend", "- a\n\nend")]
    #[case("no lists here\n\nat all\n", "no lists here\n\nat all\n")]
    fn test_scenarios(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(fix_list_spacing(input), expected);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(fix_list_spacing(""), "");
    }

    #[test]
    fn test_adjacent_items_untouched() {
        let input = "- a\n- b\n* c\n1. d";
        assert_eq!(fix_list_spacing(input), input);
    }

    #[test]
    fn test_nested_items_collapse() {
        let input = "- Parent item 1\n\n  - Child item 1\n\n  - Child item 2\n\n- Parent item 2";
        let expected = "- Parent item 1\n  - Child item 1\n  - Child item 2\n- Parent item 2";
        assert_eq!(fix_list_spacing(input), expected);
    }

    #[test]
    fn test_mixed_bullet_types_collapse() {
        let input = "- Dash item\n\n* Star item\n\n- Another dash";
        assert_eq!(
            fix_list_spacing(input),
            "- Dash item\n* Star item\n- Another dash"
        );
    }

    #[test]
    fn test_long_runs_collapse_to_nothing() {
        let input = "- Item 1\n\n\n- Item 2\n\n\n\n- Item 3";
        assert_eq!(fix_list_spacing(input), "- Item 1\n- Item 2\n- Item 3");
    }

    #[test]
    fn test_run_before_text_kept_even_if_list_follows_later() {
        let input = "- a\n\n\nnote\n- b";
        assert_eq!(fix_list_spacing(input), input);
    }

    #[test]
    fn test_leading_and_trailing_runs_kept() {
        let input = "\n\n- a\n\n- b\n\n";
        assert_eq!(fix_list_spacing(input), "\n\n- a\n- b\n\n");
    }

    #[test]
    fn test_whitespace_only_lines_count_as_blank() {
        assert_eq!(fix_list_spacing("- a\n   \n\t\n- b"), "- a\n- b");
    }

    #[test]
    fn test_kept_whitespace_only_lines_are_not_rewritten() {
        let input = "- a\n  \n\t\nclosing paragraph";
        assert_eq!(fix_list_spacing(input), input);
    }

    #[test]
    fn test_crlf_preserved() {
        let input = "- a\r\n\r\n- b\r\n\r\nafter\r\n";
        assert_eq!(fix_list_spacing(input), "- a\r\n- b\r\n\r\nafter\r\n");
    }

    #[test]
    fn test_mixed_line_endings_preserved() {
        let input = "- a\r\n\n- b\n\r\n- c\r\n";
        assert_eq!(fix_list_spacing(input), "- a\r\n- b\n- c\r\n");
    }

    #[test]
    fn test_stats_count_runs_and_lines() {
        let fix = fix_list_spacing_with_stats("- a\n\n- b\n\n\n- c\n\nend");
        assert_eq!(fix.text, "- a\n- b\n- c\n\nend");
        assert_eq!(fix.collapsed_runs, 2);
        assert_eq!(fix.removed_lines, 3);
        assert!(fix.changed());
    }

    #[test]
    fn test_stats_unchanged() {
        let fix = fix_list_spacing_with_stats("- a\n- b");
        assert_eq!(fix.collapsed_runs, 0);
        assert_eq!(fix.removed_lines, 0);
        assert!(!fix.changed());
    }

    #[test]
    fn test_byte_order_mark_on_first_line() {
        assert_eq!(fix_list_spacing("\u{feff}- a\n\n- b"), "\u{feff}- a\n- b");
        assert_eq!(fix_list_spacing("- a\n\u{feff}\n- b"), "- a\n- b");
    }

    #[test]
    fn test_blank_run_end() {
        use LineKind::{Blank, ListItem, Text};

        let kinds = [ListItem, Blank, Blank, ListItem];
        assert_eq!(blank_run_end(&kinds, 1), 3);
        assert_eq!(blank_run_end(&kinds, 3), 3);
        assert_eq!(blank_run_end(&[ListItem, Blank, Blank], 1), 3);
        assert_eq!(blank_run_end(&[ListItem, Text], 1), 1);
        assert_eq!(blank_run_end(&[ListItem], 1), 1);
    }
}
