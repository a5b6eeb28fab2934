// Affix bound literals
//
// A filter affix criterion is authored as a [min, max] pair of literals.
// A literal is one of:
//   - a numeral ("20", "3.5"),
//   - the open-bound sentinel "…",
//   - a numeral (or "…") wrapped in the fixed display markup, e.g.
//     "<span class='value'>20</span>".
// This module is the single place that grammar is interpreted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel meaning "no bound on this side".
pub const OPEN_BOUND: &str = "…";

/// Value an open upper bound resolves to.
pub const OPEN_UPPER: f64 = 1_000_000.0;

static MARKUP_WRAPPED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r".*>(.+)<.*").expect("markup literal pattern"));

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundError {
    #[error("unparseable bound literal {0:?}")]
    Unparseable(String),
}

/// One bound literal as stored in a filter record: either a plain number
/// or a string still carrying the sentinel or display markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundLiteral {
    Number(f64),
    Text(String),
}

impl BoundLiteral {
    /// True for the shapes the construction-time canonicalization rewrites
    /// to the open sentinel on the lower side: 0 or the empty string.
    pub fn is_open_lower(&self) -> bool {
        match self {
            BoundLiteral::Number(value) => *value == 0.0,
            BoundLiteral::Text(text) => text.is_empty() || text == OPEN_BOUND,
        }
    }

    /// Upper-side counterpart: the large sentinel value or the empty string.
    pub fn is_open_upper(&self) -> bool {
        match self {
            BoundLiteral::Number(value) => *value == OPEN_UPPER,
            BoundLiteral::Text(text) => text.is_empty() || text == OPEN_BOUND,
        }
    }

    fn resolve(&self, open_value: f64) -> Result<f64, BoundError> {
        match self {
            BoundLiteral::Number(value) => Ok(*value),
            BoundLiteral::Text(raw) => {
                let mut literal = raw.trim();
                if let Some(caps) = MARKUP_WRAPPED.captures(literal) {
                    literal = caps.get(1).map(|m| m.as_str().trim()).unwrap_or(literal);
                }
                if literal == OPEN_BOUND {
                    return Ok(open_value);
                }
                literal
                    .parse::<f64>()
                    .map_err(|_| BoundError::Unparseable(raw.clone()))
            }
        }
    }
}

/// The [min, max] pair for one affix criterion. Serialized as a two-element
/// array, matching the stored filter shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffixBounds(pub BoundLiteral, pub BoundLiteral);

impl AffixBounds {
    pub fn new(min: impl Into<BoundLiteral>, max: impl Into<BoundLiteral>) -> Self {
        Self(min.into(), max.into())
    }

    /// Resolve both literals; "…" maps to 0 below and the large sentinel
    /// above. An unparseable literal fails only the owning affix check.
    pub fn resolve(&self) -> Result<(f64, f64), BoundError> {
        Ok((self.0.resolve(0.0)?, self.1.resolve(OPEN_UPPER)?))
    }

    /// Rewrite legacy open-bound encodings (0 / 1000000 / "") to the "…"
    /// sentinel. Applied when a prefixless affix key is canonicalized.
    pub fn rewrite_open_sentinels(&mut self) {
        if self.0.is_open_lower() {
            self.0 = BoundLiteral::Text(OPEN_BOUND.to_string());
        }
        if self.1.is_open_upper() {
            self.1 = BoundLiteral::Text(OPEN_BOUND.to_string());
        }
    }
}

impl From<f64> for BoundLiteral {
    fn from(value: f64) -> Self {
        BoundLiteral::Number(value)
    }
}

impl From<&str> for BoundLiteral {
    fn from(value: &str) -> Self {
        BoundLiteral::Text(value.to_string())
    }
}
