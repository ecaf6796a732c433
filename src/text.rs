//! Plain-text quote truncation

use crate::patterns;
use crate::types::{DetectionMethod, UnquoteResult};
use tracing::debug;

/// Strip reply headers and trailing `>` quoted lines from `text`
#[must_use]
pub fn scan(text: &str) -> UnquoteResult {
    let (remaining, by_pattern) = match patterns::earliest_match(text) {
        Some((index, pattern)) => {
            debug!(
                "Truncating at {:?} {} pattern, offset {index}",
                pattern.kind, pattern.lang
            );
            (&text[..index], true)
        }
        None => (text, false),
    };

    let (remaining, by_prefix) = strip_quoted_tail(remaining);
    let content = remaining.trim();

    if by_pattern || by_prefix {
        UnquoteResult::quoted(content, DetectionMethod::Pattern)
    } else {
        UnquoteResult::unchanged(content)
    }
}

fn is_quoted_line(line: &str) -> bool {
    line.trim_start().starts_with('>')
}

/// Drop trailing `>` lines, skipping blank lines between them.
///
/// Stops at the last line that is neither blank nor quoted and keeps
/// everything up to and including it.
fn strip_quoted_tail(text: &str) -> (&str, bool) {
    let mut stripped = false;

    for (start, line) in line_starts(text).into_iter().rev() {
        if line.trim().is_empty() {
            continue;
        }
        if is_quoted_line(line) {
            stripped = true;
            continue;
        }
        return (&text[..start + line.len()], stripped);
    }

    let end = if stripped { 0 } else { text.len() };
    (&text[..end], stripped)
}

fn line_starts(text: &str) -> Vec<(usize, &str)> {
    let mut offset = 0;
    text.split('\n')
        .map(|line| {
            let start = offset;
            offset += line.len() + 1;
            (start, line)
        })
        .collect()
}
