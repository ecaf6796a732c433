//! Localized reply header and forward marker patterns

use regex::Regex;
use std::sync::LazyLock;

/// What a pattern recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// "On DATE, X wrote:" and header blocks of replies
    Reply,
    /// "Forwarded message" style separators
    Forward,
}

/// A compiled pattern and the language family it belongs to
#[derive(Debug)]
pub struct QuotePattern {
    pub lang: &'static str,
    pub kind: PatternKind,
    pub regex: Regex,
}

impl QuotePattern {
    fn new(lang: &'static str, kind: PatternKind, pattern: &str) -> Self {
        Self {
            lang,
            kind,
            regex: Regex::new(pattern).unwrap(),
        }
    }
}

// (lang, lead, verb) of "On DATE, X wrote:" style attribution lines
const ATTRIBUTION_TABLE: &[(&str, &str, &str)] = &[
    ("en", "On", r"wrote:"),
    ("fr", "Le", r"a\s+écrit\s*:"),
    ("de", "Am", r"schrieb[^\n]*:"),
    ("es", "El", r"escribió:"),
    ("it", r"(?:Il|In\sdata)", r"ha\s+scritto:"),
    ("pt", "Em", r"escreveu:"),
    ("nl", "Op", r"schreef[^\n]*:"),
    ("sv", "Den", r"skrev[^\n]*:"),
    ("pl", r"(?:W\sdniu|Dnia)", r"napisał(?:a|\(a\))?:"),
];

/// Attribution on one line, or wrapped once by the sending client.
///
/// A wrapped attribution needs a first line that does not end a sentence
/// and a second line that ends right after the verb.
fn attribution(lead: &str, verb: &str) -> String {
    format!(
        r"(?m)^[ \t]*{lead}\s(?:[^\n]+\s{verb}|[^\n]*[^.!?\s][ \t]*\r?\n[^\n]+\s{verb}[ \t]*\r?$)"
    )
}

const REPLY_TABLE: &[(&str, &str)] = &[
    ("ru", r"(?m)^[^\n]+(?:пишет|написал(?:а)?):"),
    ("ja", r"(?m)^[^\n]+(?:のメッセージ|書きました)[:：]"),
    ("en", r"(?mi)^[ \t]*-{3,}\s*Original Message\s*-{3,}"),
    ("de", r"(?mi)^[ \t]*-{3,}\s*Ursprüngliche Nachricht\s*-{3,}"),
    ("fr", r"(?mi)^[ \t]*-{3,}\s*Message d'origine\s*-{3,}"),
    ("es", r"(?mi)^[ \t]*-{3,}\s*Mensaje original\s*-{3,}"),
    ("en", r"(?m)^[ \t]*From:[ \t][^\n]+\r?\n[ \t]*(?:Sent|Date):[ \t]"),
    ("fr", r"(?m)^[ \t]*De\s?:[ \t][^\n]+\r?\n[ \t]*(?:Envoyé|Date)\s?:[ \t]"),
    ("de", r"(?m)^[ \t]*Von:[ \t][^\n]+\r?\n[ \t]*(?:Gesendet|Datum):[ \t]"),
];

const FORWARD_TABLE: &[(&str, &str)] = &[
    ("en", r"(?i)-{2,}\s*Forwarded message\s*-{2,}"),
    ("en", r"(?i)Begin forwarded message\s*:"),
    ("fr", r"(?i)Début du message (?:transféré|réexpédié)\s*:?"),
    ("fr", r"(?i)-{2,}\s*Message transféré\s*-{2,}"),
    ("de", r"(?i)-{2,}\s*Weitergeleitete Nachricht\s*-{2,}"),
    ("de", r"(?i)Anfang der weitergeleiteten Nachricht\s*:"),
    ("es", r"(?i)-{2,}\s*Mensaje reenviado\s*-{2,}"),
    ("es", r"(?i)Inicio del mensaje reenviado\s*:"),
    ("it", r"(?i)-{2,}\s*Messaggio inoltrato\s*-{2,}"),
    ("pt", r"(?i)-{2,}\s*Mensagem encaminhada\s*-{2,}"),
    ("nl", r"(?i)-{2,}\s*Doorgestuurd bericht\s*-{2,}"),
];

fn compile(kind: PatternKind, table: &[(&'static str, &str)]) -> Vec<QuotePattern> {
    table
        .iter()
        .map(|&(lang, pattern)| QuotePattern::new(lang, kind, pattern))
        .collect()
}

/// Reply header patterns
pub static REPLY_PATTERNS: LazyLock<Vec<QuotePattern>> = LazyLock::new(|| {
    ATTRIBUTION_TABLE
        .iter()
        .map(|&(lang, lead, verb)| {
            QuotePattern::new(lang, PatternKind::Reply, &attribution(lead, verb))
        })
        .chain(compile(PatternKind::Reply, REPLY_TABLE))
        .collect()
});

/// Forward marker patterns
pub static FORWARD_PATTERNS: LazyLock<Vec<QuotePattern>> =
    LazyLock::new(|| compile(PatternKind::Forward, FORWARD_TABLE));

/// All patterns, replies first
pub fn all_patterns() -> impl Iterator<Item = &'static QuotePattern> {
    REPLY_PATTERNS.iter().chain(FORWARD_PATTERNS.iter())
}

/// Whether `text` contains a forward marker
#[must_use]
pub fn is_forward(text: &str) -> bool {
    FORWARD_PATTERNS.iter().any(|p| p.regex.is_match(text))
}

/// Whether `text` opens with a reply header or forward marker
#[must_use]
pub fn starts_with_header(text: &str) -> bool {
    let text = text.trim_start();
    all_patterns().any(|p| p.regex.find(text).is_some_and(|m| m.start() == 0))
}

/// Byte offset of the earliest reply or forward marker in `text`
#[must_use]
pub fn earliest_match(text: &str) -> Option<(usize, &'static QuotePattern)> {
    all_patterns()
        .filter_map(|p| p.regex.find(text).map(|m| (m.start(), p)))
        .min_by_key(|(start, _)| *start)
}
