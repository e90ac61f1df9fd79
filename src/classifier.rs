//! URL classification
//!
//! Two independent ways of labelling a URL:
//!
//! - **passive**: the URL text ends with a known suffix, no request needed
//! - **active**: the server's declared content type maps to a label
//!
//! Both read an immutable [`ClassificationTable`]. The built-in table is
//! materialised once per process and shared without synchronization.

use crate::table::{CONTENT_TYPE_LABELS, SUFFIX_LABELS};
use crate::ProbeResult;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

static BUILTIN_TABLE: Lazy<Arc<ClassificationTable>> = Lazy::new(|| {
    Arc::new(ClassificationTable::new(
        CONTENT_TYPE_LABELS.iter().map(|(ct, label)| (*ct, *label)),
        SUFFIX_LABELS
            .iter()
            .map(|(suffixes, label)| (suffixes.iter().copied(), *label)),
    ))
});

/// One entry of the passive table: any of `suffixes` yields `label`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixGroup {
    pub suffixes: Vec<String>,
    pub label: String,
}

impl SuffixGroup {
    fn matches(&self, url: &str) -> bool {
        self.suffixes.iter().any(|suffix| url.ends_with(suffix.as_str()))
    }
}

/// Content-type and suffix lookup data
#[derive(Debug, Clone, Default)]
pub struct ClassificationTable {
    content_types: HashMap<String, String>,
    suffix_groups: Vec<SuffixGroup>,
}

impl ClassificationTable {
    /// Build a table from arbitrary entries. Suffix groups keep the given
    /// order, which is the order they are tried in.
    pub fn new<'a, C, S, G>(content_types: C, suffix_groups: S) -> Self
    where
        C: IntoIterator<Item = (&'a str, &'a str)>,
        S: IntoIterator<Item = (G, &'a str)>,
        G: IntoIterator<Item = &'a str>,
    {
        Self {
            content_types: content_types
                .into_iter()
                .map(|(ct, label)| (ct.to_string(), label.to_string()))
                .collect(),
            suffix_groups: suffix_groups
                .into_iter()
                .map(|(suffixes, label)| SuffixGroup {
                    suffixes: suffixes.into_iter().map(str::to_string).collect(),
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    /// The table shipped with the tool.
    pub fn builtin() -> &'static ClassificationTable {
        &BUILTIN_TABLE
    }

    pub fn content_type_count(&self) -> usize {
        self.content_types.len()
    }

    pub fn suffix_groups(&self) -> &[SuffixGroup] {
        &self.suffix_groups
    }
}

/// How an outcome was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Suffix match, no request made
    Passive,
    /// Content-type lookup after a HEAD request
    Active,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Passive => "EXTENSION BASED",
            Mode::Active => "REQUEST BASED",
        }
    }
}

/// Final classified result for one URL, ready for emission.
///
/// Passive outcomes carry no response data because no request was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationOutcome {
    Passive {
        url: String,
        label: String,
    },
    Active {
        url: String,
        /// Empty when the content type is not in the table
        label: String,
        status_code: u16,
        content_length: i64,
        content_type: String,
    },
}

impl ClassificationOutcome {
    pub fn active(url: impl Into<String>, result: ProbeResult, label: impl Into<String>) -> Self {
        ClassificationOutcome::Active {
            url: url.into(),
            label: label.into(),
            status_code: result.status_code,
            content_length: result.content_length,
            content_type: result.content_type,
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            ClassificationOutcome::Passive { .. } => Mode::Passive,
            ClassificationOutcome::Active { .. } => Mode::Active,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            ClassificationOutcome::Passive { url, .. } | ClassificationOutcome::Active { url, .. } => url,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ClassificationOutcome::Passive { label, .. }
            | ClassificationOutcome::Active { label, .. } => label,
        }
    }
}

/// Label lookups over a shared table
#[derive(Debug, Clone)]
pub struct Classifier {
    table: Arc<ClassificationTable>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            table: Arc::clone(&BUILTIN_TABLE),
        }
    }
}

impl Classifier {
    pub fn new(table: ClassificationTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// First suffix group, in table order, that the URL ends with.
    ///
    /// Byte-wise and case-sensitive: `file.ZIP` does not match `.zip`.
    pub fn classify_by_suffix(&self, url: &str) -> Option<&str> {
        self.table
            .suffix_groups
            .iter()
            .find(|group| group.matches(url))
            .map(|group| group.label.as_str())
    }

    /// Exact lookup of an already `;`-trimmed content type. A miss is the
    /// empty label, not an error.
    pub fn classify_by_content_type(&self, content_type: &str) -> &str {
        self.table
            .content_types
            .get(content_type)
            .map(String::as_str)
            .unwrap_or("")
    }
}
