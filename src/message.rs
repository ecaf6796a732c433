//! Unquoting the bodies of a raw MIME message

use crate::error::{Result, UnquoteError};
use crate::types::{UnquoteOptions, UnquoteResult};
use crate::unquote::Unquote;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Unquoted bodies of a message
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBodies {
    /// Result for the first `text/html` part, if any
    pub html: Option<UnquoteResult>,

    /// Result for the first `text/plain` part, if any
    pub text: Option<UnquoteResult>,
}

impl MessageBodies {
    /// Whether either body contained quotes
    #[must_use]
    pub fn had_quotes(&self) -> bool {
        [&self.html, &self.text]
            .into_iter()
            .flatten()
            .any(|result| result.had_quotes)
    }

    /// The best available content, HTML first
    #[must_use]
    pub fn best_content(&self) -> &str {
        if let Some(ref html) = self.html
            && !html.content.is_empty()
        {
            &html.content
        } else if let Some(ref text) = self.text {
            &text.content
        } else {
            ""
        }
    }
}

/// Parse raw message bytes and unquote its HTML and plain-text bodies
pub fn unquote_message(raw: &[u8], options: &UnquoteOptions) -> Result<MessageBodies> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| UnquoteError::Message(e.to_string()))?;
    let (text, html) = extract_body_parts(&parsed)?;

    let unquote = Unquote::new(html.as_deref(), text.as_deref(), options.clone());
    let bodies = MessageBodies {
        html: html.as_ref().map(|_| unquote.html()),
        text: text.as_ref().map(|_| unquote.text()),
    };

    debug!(
        "Unquoted message: html={} text={} quotes={}",
        bodies.html.is_some(),
        bodies.text.is_some(),
        bodies.had_quotes()
    );

    Ok(bodies)
}

/// A single-part message must decode; in a multipart one, parts that fail to
/// decode are skipped so the remaining bodies are still unquoted
fn extract_body_parts(parsed: &mailparse::ParsedMail) -> Result<(Option<String>, Option<String>)> {
    let mut text = None;
    let mut html = None;

    if parsed.subparts.is_empty() {
        let body = decode(parsed)?;
        if parsed.ctype.mimetype.to_lowercase().contains("text/html") {
            html = Some(body);
        } else {
            text = Some(body);
        }
    } else {
        extract_body_recursive(parsed, &mut text, &mut html);
    }

    Ok((text, html))
}

fn extract_body_recursive(
    parsed: &mailparse::ParsedMail,
    text: &mut Option<String>,
    html: &mut Option<String>,
) {
    for part in &parsed.subparts {
        if !part.subparts.is_empty() {
            extract_body_recursive(part, text, html);
            continue;
        }

        let content_type = part.ctype.mimetype.to_lowercase();
        let slot = if content_type.contains("text/plain") && text.is_none() {
            &mut *text
        } else if content_type.contains("text/html") && html.is_none() {
            &mut *html
        } else {
            continue;
        };
        match decode(part) {
            Ok(body) => *slot = Some(body),
            Err(e) => warn!("Skipping {content_type} part: {e}"),
        }
    }
}

fn decode(part: &mailparse::ParsedMail) -> Result<String> {
    part.get_body()
        .map_err(|e| UnquoteError::Decode(e.to_string()))
}
