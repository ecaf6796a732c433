// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(clippy::significant_drop_tightening)]

//! Email Quote Removal
//!
//! Separates the text a sender just wrote from the quoted history beneath
//! it, for both HTML and plain-text message bodies.
//!
//! # Features
//!
//! - Client specific HTML handlers (Gmail, Outlook, Thunderbird, Apple Mail,
//!   Yahoo, Proton, Zoho)
//! - Localized reply and forward header patterns for plain text
//! - Nesting depth control
//! - Remove quotes, or wrap them in a collapsible `<details>` container
//!
//! The HTML output is not sanitized. Run it through a sanitizer before
//! inserting it into a live document.
//!
//! # Example
//!
//! ```rust
//! use email_unquote::{Mode, UnquoteOptions, unquote_html, unquote_text};
//!
//! let text = unquote_text("Sounds good.\n\nOn 2024-01-15, a@b.com wrote:\n> Lunch?");
//! assert_eq!(text, "Sounds good.");
//!
//! let options = UnquoteOptions::default()
//!     .with_mode(Mode::Wrap)
//!     .with_label("Show quoted text");
//! let html = unquote_html(
//!     r#"<p>Sounds good.</p><div class="gmail_quote">Lunch?</div>"#,
//!     &options,
//! );
//! assert!(html.contains("<summary>Show quoted text</summary>"));
//! ```

mod collector;
mod error;
pub mod handlers;
mod message;
mod mutator;
pub mod patterns;
mod text;
pub mod tree;
mod types;
mod unquote;

pub use collector::collect;
pub use error::{Result, UnquoteError};
pub use handlers::{Handler, Rule, builtin_handlers};
pub use message::{MessageBodies, unquote_message};
pub use mutator::{apply, cleanup, cleanup_until_stable};
pub use text::scan;
pub use tree::{Document, NodeSet};
pub use types::*;
pub use unquote::{Unquote, unquote_html, unquote_text};
