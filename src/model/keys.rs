use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

pub const KEY_WIDTH: usize = 3;
pub const UNKNOWN_KEY: &str = "000";

/// Normalized RW or RT key: zero-padded to three digits, `000` for unknown.
///
/// Ordered numerically: shorter keys first, then lexicographically, which is
/// plain string order for three-digit keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AreaKey(String);

impl AreaKey {
    pub fn unknown() -> Self {
        AreaKey(UNKNOWN_KEY.to_string())
    }

    /// Strict parse. Missing, blank or non-numeric input yields `None`.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let digits = trimmed.trim_start_matches('0');
        Some(AreaKey(format!("{:0>width$}", digits, width = KEY_WIDTH)))
    }

    /// Lenient normalization used for grouping: malformed input becomes `000`.
    pub fn normalize(raw: Option<&str>) -> Self {
        Self::parse(raw).unwrap_or_else(Self::unknown)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_KEY
    }
}

impl Ord for AreaKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for AreaKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for AreaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for AreaKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AreaKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/keys.rs"]
mod tests;
