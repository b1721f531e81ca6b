//! Glue between an editing host and the normalizer.
//!
//! A host forwards two events here: a paste, with whatever plain text the
//! clipboard held, and the manual "fix list spacing" command. Both are plain
//! synchronous calls against an [`Editor`]; the host owns event dispatch and
//! settings persistence.

pub mod editor;
pub mod paste;

pub use editor::{Editor, StringEditor};
pub use paste::{
    FIX_COMMAND_ID, FIX_COMMAND_NAME, ListPasteFixer, PasteOutcome, PasteSettings,
};
