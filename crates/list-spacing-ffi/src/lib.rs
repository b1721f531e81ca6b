//! UniFFI bindings for editor hosts embedding list-spacing
//!
//! Exposes the normalizer to hosts written in Kotlin, Swift or Python: the
//! three pure capabilities as free functions, plus a paste fixer handle that
//! carries the host's auto-fix setting.

use list_spacing_engine as engine;
use list_spacing_engine::{ListPasteFixer, PasteOutcome, PasteSettings, StringEditor};
use std::sync::Mutex;

uniffi::setup_scaffolding!();

// ============ Standalone Functions ============

/// Collapse blank lines that sit between two list items.
#[uniffi::export]
pub fn fix_list_spacing(text: String) -> String {
    engine::fix_list_spacing(&text)
}

/// Whether a single line opens a `-`, `*` or `N.` list item.
#[uniffi::export]
pub fn is_list_item(line: String) -> bool {
    engine::is_list_item(&line)
}

/// Cheap pre-check: false means `fix_list_spacing` would return the text unchanged.
#[uniffi::export]
pub fn has_spaced_list_items(text: String) -> bool {
    engine::has_spaced_list_items(&text)
}

// ============ Paste Fixer Handle ============

/// Paste and command handling for one host, holding its settings.
///
/// The host loads `auto_fix_on_paste` from its own settings store, passes it
/// in, and calls `set_auto_fix_on_paste` when the user flips the toggle.
#[derive(uniffi::Object)]
pub struct PasteFixerHandle {
    inner: Mutex<ListPasteFixer>,
}

#[uniffi::export]
impl PasteFixerHandle {
    #[uniffi::constructor]
    pub fn new(auto_fix_on_paste: bool) -> Self {
        Self {
            inner: Mutex::new(ListPasteFixer::new(PasteSettings { auto_fix_on_paste })),
        }
    }

    pub fn auto_fix_on_paste(&self) -> bool {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        let fixer = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        fixer.settings().auto_fix_on_paste
    }

    pub fn set_auto_fix_on_paste(&self, enabled: bool) {
        let mut fixer = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        fixer.set_auto_fix_on_paste(enabled);
    }

    /// Decide what to do with a paste.
    ///
    /// `clipboard` is the plain-text clipboard content, or null when there is
    /// none. When `prevent_default` is set the host must cancel its paste and
    /// insert `fixed` over the selection itself.
    pub fn handle_paste(&self, clipboard: Option<String>) -> PasteResultDto {
        let fixer = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let mut scratch = StringEditor::default();
        let outcome = fixer.handle_paste(clipboard.as_deref(), &mut scratch);
        PasteResultDto::from_engine(outcome)
    }

    /// Manual fix command. Returns the new note text, or null if nothing changed.
    pub fn fix_note(&self, content: String) -> Option<String> {
        let fixer = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let mut editor = StringEditor::new(content);
        fixer
            .fix_current_note(&mut editor)
            .then(|| editor.text().to_string())
    }
}

// ============ DTOs ============

/// Outcome of a paste, flattened for foreign callers.
#[derive(Debug, PartialEq, uniffi::Record)]
pub struct PasteResultDto {
    /// "disabled", "no_text", "pass_through" or "replaced"
    pub kind: String,
    /// Whether the host must suppress its default paste
    pub prevent_default: bool,
    /// Text to insert when `kind` is "replaced"
    pub fixed: Option<String>,
}

impl PasteResultDto {
    fn from_engine(outcome: PasteOutcome) -> Self {
        let prevent_default = outcome.prevents_default();
        let (kind, fixed) = match outcome {
            PasteOutcome::Disabled => ("disabled", None),
            PasteOutcome::NoText => ("no_text", None),
            PasteOutcome::PassThrough => ("pass_through", None),
            PasteOutcome::Replaced { fixed } => ("replaced", Some(fixed)),
        };
        Self {
            kind: kind.to_string(),
            prevent_default,
            fixed,
        }
    }
}
