//! Client specific quote recognizers
//!
//! Every handler names a CSS selector locating a client's quote markup. A
//! handler may refine each match into the elements that actually hold the
//! quote, which lets it look at siblings or text before committing.

use crate::patterns;
use crate::tree::{self, NodeRef};
use std::borrow::Cow;

/// Maps a matched element to the elements to act on
pub type Refine = fn(&NodeRef) -> Vec<NodeRef>;

/// How a handler turns selector matches into quote elements
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Matched elements are quotes as-is
    Select,
    /// Matched elements are mapped through a refinement
    Refine(Refine),
}

/// A named quote recognizer for one client convention
#[derive(Debug, Clone)]
pub struct Handler {
    pub name: Cow<'static, str>,
    pub selector: Cow<'static, str>,
    pub rule: Rule,
}

impl Handler {
    /// Handler acting on every element matching `selector`
    pub fn select(
        name: impl Into<Cow<'static, str>>,
        selector: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            selector: selector.into(),
            rule: Rule::Select,
        }
    }

    /// Handler mapping every match of `selector` through `refine`
    pub fn refine(
        name: impl Into<Cow<'static, str>>,
        selector: impl Into<Cow<'static, str>>,
        refine: Refine,
    ) -> Self {
        Self {
            name: name.into(),
            selector: selector.into(),
            rule: Rule::Refine(refine),
        }
    }

    const fn builtin(name: &'static str, selector: &'static str, rule: Rule) -> Self {
        Self {
            name: Cow::Borrowed(name),
            selector: Cow::Borrowed(selector),
            rule,
        }
    }

    /// Apply the rule to a single selector match
    #[must_use]
    pub fn resolve(&self, matched: &NodeRef) -> Vec<NodeRef> {
        match self.rule {
            Rule::Select => vec![matched.clone()],
            Rule::Refine(refine) => refine(matched),
        }
    }
}

/// Outlook desktop: the header div, the `<hr>` drawn above it, and the
/// quoted body that follows
fn outlook_desktop(marker: &NodeRef) -> Vec<NodeRef> {
    let mut quoted = Vec::new();
    if let Some(hr) = tree::previous_element_sibling(marker)
        && tree::tag_name(&hr).as_deref() == Some("hr")
    {
        quoted.push(hr);
    }
    quoted.extend(tree::with_following_elements(marker));
    quoted
}

/// Gmail: the container `div.gmail_quote` stands for the whole quote, so the
/// `blockquote.gmail_quote` directly inside it is not counted again
fn gmail(quote: &NodeRef) -> Vec<NodeRef> {
    let inside_container = tree::tag_name(quote).as_deref() == Some("blockquote")
        && quote
            .parent()
            .is_some_and(|parent| tree::has_class(&parent, "gmail_quote"));
    if inside_container {
        Vec::new()
    } else {
        vec![quote.clone()]
    }
}

/// Gmail attribution line, only when no quote container already holds it
fn gmail_attr(attribution: &NodeRef) -> Vec<NodeRef> {
    if attribution
        .ancestors()
        .any(|ancestor| tree::has_class(&ancestor, "gmail_quote"))
    {
        Vec::new()
    } else {
        vec![attribution.clone()]
    }
}

fn with_following(marker: &NodeRef) -> Vec<NodeRef> {
    tree::with_following_elements(marker)
}

/// Thunderbird: the cite prefix only counts when the quote follows it
fn thunderbird(prefix: &NodeRef) -> Vec<NodeRef> {
    match tree::next_element_sibling(prefix) {
        Some(quote) if tree::is_cite_blockquote(&quote) => vec![prefix.clone(), quote],
        _ => Vec::new(),
    }
}

/// A cited blockquote whose previous sibling already carries a cited
/// blockquote continues that quote
fn cite_after_cite(quote: &NodeRef) -> Vec<NodeRef> {
    let Some(previous) = tree::previous_element_sibling(quote) else {
        return Vec::new();
    };
    let carries_cite = previous
        .inclusive_descendants()
        .any(|node| tree::is_cite_blockquote(&node));
    if carries_cite {
        vec![previous, quote.clone()]
    } else {
        Vec::new()
    }
}

fn preamble_blockquote(quote: &NodeRef) -> Vec<NodeRef> {
    if patterns::starts_with_header(&quote.text_contents()) {
        vec![quote.clone()]
    } else {
        Vec::new()
    }
}

static BUILTIN: [Handler; 15] = [
    Handler::builtin("gmail", ".gmail_quote", Rule::Refine(gmail)),
    Handler::builtin("gmail_attr", ".gmail_attr", Rule::Refine(gmail_attr)),
    Handler::builtin(
        "outlook_desktop",
        "#divRplyFwdMsg",
        Rule::Refine(outlook_desktop),
    ),
    Handler::builtin(
        "outlook_append_on_send",
        "#appendonsend",
        Rule::Refine(with_following),
    ),
    Handler::builtin(
        "outlook_web",
        r#"div[style*="border-top:solid #E1E1E1"], div[style*="border-top: solid #E1E1E1"], div[style*="border-top:solid #B5C4DF"]"#,
        Rule::Refine(with_following),
    ),
    Handler::builtin(
        "outlook_mobile",
        "#mail-editor-reference-message-container",
        Rule::Select,
    ),
    Handler::builtin("outlook_legacy", ".OutlookMessageHeader", Rule::Select),
    Handler::builtin("thunderbird", ".moz-cite-prefix", Rule::Refine(thunderbird)),
    Handler::builtin("thunderbird_forward", ".moz-forward-container", Rule::Select),
    Handler::builtin(
        "apple_mail",
        r#".apple-mail-modern blockquote[type="cite"], body[class*="apple-mail"] blockquote[type="cite"]"#,
        Rule::Select,
    ),
    Handler::builtin("yahoo", r#".yahoo_quoted[id*="yahoo_quoted"]"#, Rule::Select),
    Handler::builtin("protonmail", ".protonmail_quote", Rule::Select),
    Handler::builtin("zoho", ".zmail_extra", Rule::Select),
    Handler::builtin(
        "cite_after_cite",
        r#"blockquote[type="cite"]"#,
        Rule::Refine(cite_after_cite),
    ),
    Handler::builtin(
        "preamble_blockquote",
        "blockquote",
        Rule::Refine(preamble_blockquote),
    ),
];

/// The built-in handler registry
#[must_use]
pub fn builtin_handlers() -> &'static [Handler] {
    &BUILTIN
}
