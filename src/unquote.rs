//! Public entry point combining the pipelines per content type

use crate::collector;
use crate::handlers::{self, Handler};
use crate::mutator;
use crate::text;
use crate::tree::Document;
use crate::types::{DetectionMethod, UnquoteOptions, UnquoteResult};
use tracing::debug;

/// Unquotes the HTML and plain-text bodies of one message
///
/// # Example
///
/// ```rust
/// use email_unquote::{Unquote, UnquoteOptions};
///
/// let html = r#"<div>Thanks!</div><div class="gmail_quote">On Monday, Bob wrote:</div>"#;
/// let result = Unquote::new(Some(html), None, UnquoteOptions::default()).html();
///
/// assert_eq!(result.content, "<div>Thanks!</div>");
/// assert!(result.had_quotes);
/// ```
#[derive(Debug, Clone)]
pub struct Unquote<'a> {
    html: Option<&'a str>,
    text: Option<&'a str>,
    options: UnquoteOptions,
    handlers: &'a [Handler],
}

impl<'a> Unquote<'a> {
    #[must_use]
    pub fn new(html: Option<&'a str>, text: Option<&'a str>, options: UnquoteOptions) -> Self {
        Self {
            html,
            text,
            options,
            handlers: handlers::builtin_handlers(),
        }
    }

    /// Replace the built-in handler registry
    #[must_use]
    pub const fn with_handlers(mut self, handlers: &'a [Handler]) -> Self {
        self.handlers = handlers;
        self
    }

    #[must_use]
    pub const fn options(&self) -> &UnquoteOptions {
        &self.options
    }

    /// Unquote the HTML body using the handler registry
    #[must_use]
    pub fn html(&self) -> UnquoteResult {
        let Some(html) = self.html.filter(|html| !html.trim().is_empty()) else {
            return UnquoteResult::empty();
        };

        let document = Document::parse(html);
        let quoted = collector::collect(&document, self.handlers, &self.options);
        if quoted.is_empty() {
            return UnquoteResult::unchanged(html.trim());
        }

        mutator::apply(&document, &quoted, self.options.mode, &self.options.label);
        let content = document.serialize_body();
        debug!(
            "Unquoted HTML body ({:?}): {} -> {} bytes",
            self.options.mode,
            html.len(),
            content.len()
        );

        UnquoteResult::quoted(content.trim(), DetectionMethod::Handlers)
    }

    /// Unquote the plain-text body using the pattern scanner
    #[must_use]
    pub fn text(&self) -> UnquoteResult {
        match self.text.filter(|text| !text.trim().is_empty()) {
            Some(body) => text::scan(body),
            None => UnquoteResult::empty(),
        }
    }
}

/// Unquote an HTML body in one call, returning only the content
#[must_use]
pub fn unquote_html(html: &str, options: &UnquoteOptions) -> String {
    Unquote::new(Some(html), None, options.clone()).html().content
}

/// Unquote a plain-text body in one call, returning only the content
#[must_use]
pub fn unquote_text(text: &str) -> String {
    Unquote::new(None, Some(text), UnquoteOptions::default())
        .text()
        .content
}
