//! # List spacing normalizer
//!
//! Markdown copied out of chat tools and web pages often arrives as a "loose"
//! list, with a blank line between every item. This module turns those back
//! into tight lists without touching anything else in the document.
//!
//! The work happens line by line in two phases:
//!
//! 1. **Classify** ([`classify`]): each line is a list item, blank, or text.
//!    Only the line itself is inspected; there is no Markdown parse, so code
//!    fences, nesting and front matter are not recognized.
//! 2. **Collapse** ([`collapse`]): a blank-line run is dropped when it has a
//!    list item directly on both sides. All other lines pass through
//!    verbatim.
//!
//! [`detect`] holds the regex pre-check that paste handling uses to skip
//! clipboard text that cannot need the full pass.
//!
//! Everything here is a pure function of its input.

pub mod classify;
pub mod collapse;
pub mod detect;

pub use classify::{LineKind, classify_line, is_blank, is_list_item};
pub use collapse::{SpacingFix, fix_list_spacing, fix_list_spacing_with_stats};
pub use detect::has_spaced_list_items;
