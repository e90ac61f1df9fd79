//! Allow-list predicates applied to request-based results.

use crate::ProbeResult;
use serde::{Deserialize, Serialize};

/// Returns true when `filter` is empty or when one of its comma-separated
/// candidates, trimmed, equals `value` exactly.
///
/// ```rust
/// use link_inspector::matches;
///
/// assert!(matches("200", ""));
/// assert!(matches("302", "200, 302"));
/// assert!(!matches("404", "200,302"));
/// ```
pub fn matches(value: &str, filter: &str) -> bool {
    allows(candidates(filter), value)
}

/// The four allow-lists, pre-split at startup and shared read-only by all tasks.
///
/// An empty list does not filter its dimension. A result is emitted only when
/// every dimension accepts it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterSpec {
    pub status_codes: Vec<String>,
    pub content_lengths: Vec<String>,
    pub content_types: Vec<String>,
    pub suffixes: Vec<String>,
}

impl FilterSpec {
    /// Build from the raw comma-separated option values.
    pub fn parse(status_codes: &str, content_lengths: &str, content_types: &str, suffixes: &str) -> Self {
        Self {
            status_codes: split_allow_list(status_codes),
            content_lengths: split_allow_list(content_lengths),
            content_types: split_allow_list(content_types),
            suffixes: split_allow_list(suffixes),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status_codes.is_empty()
            && self.content_lengths.is_empty()
            && self.content_types.is_empty()
            && self.suffixes.is_empty()
    }

    /// AND across the four dimensions. `label` is the bare suffix label
    /// (no brackets), empty when the content type was not recognised.
    pub fn accepts(&self, result: &ProbeResult, label: &str) -> bool {
        allows(as_strs(&self.status_codes), &result.status_code.to_string())
            && allows(as_strs(&self.content_lengths), &result.content_length.to_string())
            && allows(as_strs(&self.content_types), &result.content_type)
            && allows(as_strs(&self.suffixes), label)
    }
}

/// Trimmed comma-separated candidates; none at all for an empty string.
fn candidates(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',')
        .filter(move |_| !raw.is_empty())
        .map(str::trim)
}

fn split_allow_list(raw: &str) -> Vec<String> {
    candidates(raw).map(str::to_string).collect()
}

fn as_strs(list: &[String]) -> impl Iterator<Item = &str> {
    list.iter().map(String::as_str)
}

/// The single allow-list rule: no candidates admit everything, otherwise the
/// value must equal one candidate exactly.
fn allows<'a>(candidates: impl Iterator<Item = &'a str>, value: &str) -> bool {
    let mut candidates = candidates.peekable();
    candidates.peek().is_none() || candidates.any(|candidate| candidate == value)
}
