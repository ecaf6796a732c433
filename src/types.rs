//! Options and result types for unquoting

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the disclosure summary used when no translation is supplied
pub const DEFAULT_LABEL: &str = "Show embedded message";

/// What to do with detected quotes
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Delete quoted elements from the tree
    #[default]
    Remove,
    /// Keep quoted elements inside a collapsible container
    Wrap,
}

/// How many levels of nested quote blocks are acted upon
///
/// `Levels(0)` only touches the outermost block of each nesting chain.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "DepthRepr", into = "DepthRepr")]
pub enum Depth {
    Levels(u32),
    #[default]
    Infinite,
}

impl Depth {
    /// Whether a quote with `ancestors` quoted ancestors is within this depth
    #[must_use]
    pub fn allows(self, ancestors: usize) -> bool {
        match self {
            Self::Levels(max) => u32::try_from(ancestors).is_ok_and(|n| n <= max),
            Self::Infinite => true,
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Levels(n) => write!(f, "{n}"),
            Self::Infinite => write!(f, "infinite"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum DepthRepr {
    Levels(u32),
    Named(String),
}

impl TryFrom<DepthRepr> for Depth {
    type Error = String;

    fn try_from(repr: DepthRepr) -> Result<Self, Self::Error> {
        match repr {
            DepthRepr::Levels(n) => Ok(Self::Levels(n)),
            DepthRepr::Named(name) if name.eq_ignore_ascii_case("infinite") => Ok(Self::Infinite),
            DepthRepr::Named(name) => Err(format!("unknown depth: {name}")),
        }
    }
}

impl From<Depth> for DepthRepr {
    fn from(depth: Depth) -> Self {
        match depth {
            Depth::Levels(n) => Self::Levels(n),
            Depth::Infinite => Self::Named("infinite".into()),
        }
    }
}

/// Options controlling a single unquote call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UnquoteOptions {
    /// Remove or wrap detected quotes
    pub mode: Mode,

    /// Keep quote blocks whose text looks like a forwarded message.
    ///
    /// Applies to every such block, not only the first one.
    pub ignore_first_forward: bool,

    /// Maximum nesting depth of quote blocks to act on
    pub depth: Depth,

    /// Summary label of the disclosure container in wrap mode
    pub label: String,
}

impl Default for UnquoteOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Remove,
            ignore_first_forward: false,
            depth: Depth::Infinite,
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl UnquoteOptions {
    /// Read options from a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_depth(mut self, depth: Depth) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub const fn with_ignore_first_forward(mut self, ignore: bool) -> Self {
        self.ignore_first_forward = ignore;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the label by passing the default English key through `translate`
    #[must_use]
    pub fn localized(mut self, translate: impl FnOnce(&str) -> String) -> Self {
        self.label = translate(DEFAULT_LABEL);
        self
    }
}

/// Which subsystem detected the quotes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMethod {
    /// Client specific HTML handlers
    Handlers,
    /// Plain-text reply header patterns or `>` prefixed lines
    Pattern,
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handlers => write!(f, "handlers"),
            Self::Pattern => write!(f, "pattern"),
        }
    }
}

/// Outcome of an unquote call
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnquoteResult {
    /// Content with quotes removed or wrapped
    pub content: String,

    /// Whether any quote was found
    pub had_quotes: bool,

    /// Set exactly when `had_quotes` is true
    pub detection_method: Option<DetectionMethod>,
}

impl UnquoteResult {
    /// Result for empty input
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Content that contained no quotes
    #[must_use]
    pub fn unchanged(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            had_quotes: false,
            detection_method: None,
        }
    }

    /// Content from which quotes were removed or wrapped
    #[must_use]
    pub fn quoted(content: impl Into<String>, method: DetectionMethod) -> Self {
        Self {
            content: content.into(),
            had_quotes: true,
            detection_method: Some(method),
        }
    }
}
