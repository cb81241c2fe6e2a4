//! Analysis artifacts handed back to the caller.

use std::collections::BTreeSet;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{DvncError, Result};

/// A mapping keyed by domain name that keeps configured domain order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainMap<T> {
    entries: Vec<(String, T)>,
}

impl<T> DomainMap<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace the value for `domain`. New domains go last.
    pub fn insert(&mut self, domain: impl Into<String>, value: T) {
        let domain = domain.into();
        match self.entries.iter_mut().find(|(d, _)| *d == domain) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((domain, value)),
        }
    }

    pub fn get(&self, domain: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(d, _)| d == domain)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(d, v)| (d.as_str(), v))
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(d, _)| d.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for DomainMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for DomainMap<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (domain, value) in iter {
            map.insert(domain, value);
        }
        map
    }
}

impl<T: Serialize> Serialize for DomainMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (domain, value) in &self.entries {
            map.serialize_entry(domain, value)?;
        }
        map.end()
    }
}

/// Everything one `analyze` call produced. Never mutated after return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// Matched concept names per domain. Empty set = no match.
    pub keywords: DomainMap<BTreeSet<String>>,
    /// Exactly one insight per configured domain.
    pub insights: DomainMap<String>,
    /// The composed report.
    pub synthesis: String,
}

impl AnalysisResult {
    /// Side-panel summary of detected concepts, one `- Domain: ...` line
    /// per domain.
    pub fn keyword_summary(&self) -> String {
        self.keywords
            .iter()
            .map(|(domain, concepts)| {
                let listed = if concepts.is_empty() {
                    "general principles".to_string()
                } else {
                    concepts.iter().cloned().collect::<Vec<_>>().join(", ")
                };
                format!("- {domain}: {listed}")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A JSON analysis request, as sent by an external adapter.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

impl AnalysisRequest {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DvncError::parse(e.to_string()))
    }

    /// The prompt text. A missing or null prompt is a contract violation.
    pub fn into_prompt(self) -> Result<String> {
        self.prompt
            .ok_or_else(|| DvncError::invalid_argument("prompt must be a string, got null"))
    }
}
