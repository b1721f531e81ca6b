use log::{debug, info};

use super::editor::Editor;
use crate::spacing::{fix_list_spacing, fix_list_spacing_with_stats, has_spaced_list_items};

/// Command id hosts register the manual fix under.
pub const FIX_COMMAND_ID: &str = "fix-list-spacing";

/// Human readable name for the manual fix command.
pub const FIX_COMMAND_NAME: &str = "Fix list spacing in current note";

/// Settings the fixer is constructed with.
///
/// Hosts load these from wherever they persist settings and pass them in;
/// the normalizer itself never reads configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasteSettings {
    /// Fix list spacing automatically when text is pasted.
    pub auto_fix_on_paste: bool,
}

impl Default for PasteSettings {
    fn default() -> Self {
        Self {
            auto_fix_on_paste: true,
        }
    }
}

/// What happened to a paste event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    /// Auto-fix is switched off; the host pastes normally.
    Disabled,
    /// The clipboard held no plain text; the host pastes normally.
    NoText,
    /// The text has no blank line before a list marker; the host pastes normally.
    PassThrough,
    /// The fixed text was written over the selection.
    Replaced { fixed: String },
}

impl PasteOutcome {
    /// Whether the host must cancel its own paste handling.
    pub fn prevents_default(&self) -> bool {
        matches!(self, PasteOutcome::Replaced { .. })
    }
}

/// Entry points a host calls on paste and on the manual fix command.
#[derive(Debug, Clone, Default)]
pub struct ListPasteFixer {
    settings: PasteSettings,
}

impl ListPasteFixer {
    pub fn new(settings: PasteSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> PasteSettings {
        self.settings
    }

    /// Settings toggle; the host is responsible for persisting the new value.
    pub fn set_auto_fix_on_paste(&mut self, enabled: bool) {
        self.settings.auto_fix_on_paste = enabled;
    }

    /// Handles a paste of `clipboard` into `editor`.
    ///
    /// When the outcome is [`PasteOutcome::Replaced`] the editor has already
    /// received the text and the host should suppress its default paste.
    pub fn handle_paste<E: Editor + ?Sized>(
        &self,
        clipboard: Option<&str>,
        editor: &mut E,
    ) -> PasteOutcome {
        if !self.settings.auto_fix_on_paste {
            return PasteOutcome::Disabled;
        }

        let Some(text) = clipboard.filter(|text| !text.is_empty()) else {
            return PasteOutcome::NoText;
        };

        if !has_spaced_list_items(text) {
            return PasteOutcome::PassThrough;
        }

        let fix = fix_list_spacing_with_stats(text);
        debug!(
            "paste intercepted: {} blank line(s) removed across {} run(s)",
            fix.removed_lines, fix.collapsed_runs
        );
        editor.replace_selection(&fix.text);
        PasteOutcome::Replaced { fixed: fix.text }
    }

    /// Runs the full pass over the whole note, regardless of settings.
    ///
    /// The buffer is only replaced when the text actually changes. Returns
    /// whether it was.
    pub fn fix_current_note<E: Editor + ?Sized>(&self, editor: &mut E) -> bool {
        let content = editor.value();
        let fixed = fix_list_spacing(&content);
        if fixed == content {
            return false;
        }
        info!("{FIX_COMMAND_ID}: note updated");
        editor.set_value(&fixed);
        true
    }
}
