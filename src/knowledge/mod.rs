//! Static per-domain knowledge: concept name → citation.
//!
//! A [`KnowledgeConfig`] is built once at startup, either from the
//! [built-in set](KnowledgeConfig::builtin) or from a JSON file, and is
//! immutable afterwards. Concept order inside a [`KnowledgeBase`] is part
//! of its contract: insight generation picks the first matching concept.

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_ORIGINATOR;
use crate::error::{DvncError, Result};

/// A named idea within a domain, paired with its citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub name: String,
    pub citation: String,
}

impl Concept {
    pub fn new(name: impl Into<String>, citation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            citation: citation.into(),
        }
    }
}

/// The ordered concepts of one domain. Never empty, names unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeBase {
    domain: String,
    concepts: Vec<Concept>,
}

impl KnowledgeBase {
    /// Validate and build a knowledge base.
    pub fn new(domain: impl Into<String>, concepts: Vec<Concept>) -> Result<Self> {
        let domain = domain.into();
        if domain.trim().is_empty() {
            return Err(DvncError::configuration("domain name is empty"));
        }
        if concepts.is_empty() {
            return Err(DvncError::configuration(format!(
                "domain '{domain}' has no concepts"
            )));
        }

        let mut seen = HashSet::new();
        for concept in &concepts {
            if !seen.insert(concept.name.as_str()) {
                return Err(DvncError::configuration(format!(
                    "domain '{domain}' has duplicate concept '{}'",
                    concept.name
                )));
            }
        }

        Ok(Self { domain, concepts })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Concepts in their defined iteration order.
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Always false for a constructed knowledge base.
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Concept> {
        self.concepts.iter().find(|c| c.name == name)
    }
}

/// The whole knowledge configuration: every domain in its configured order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeConfig {
    originator: String,
    domains: Vec<KnowledgeBase>,
}

impl KnowledgeConfig {
    /// Validate and build a configuration. Domain names must be unique.
    pub fn new(originator: impl Into<String>, domains: Vec<KnowledgeBase>) -> Result<Self> {
        if domains.is_empty() {
            return Err(DvncError::configuration("no domains configured"));
        }

        let mut seen = HashSet::new();
        for kb in &domains {
            if !seen.insert(kb.domain()) {
                return Err(DvncError::configuration(format!(
                    "duplicate domain '{}'",
                    kb.domain()
                )));
            }
        }

        Ok(Self {
            originator: originator.into(),
            domains,
        })
    }

    /// Physics, Biomechanics and Anatomy, four concepts each.
    pub fn builtin() -> Self {
        builtin::config()
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawConfig =
            serde_json::from_str(json).map_err(|e| DvncError::parse(e.to_string()))?;
        raw.try_into()
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| DvncError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Whose studies the citations refer to (e.g. "Da Vinci").
    pub fn originator(&self) -> &str {
        &self.originator
    }

    pub fn domains(&self) -> &[KnowledgeBase] {
        &self.domains
    }
}

// On-disk JSON shape. Validated into the public types via `TryFrom`.

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default = "default_originator")]
    originator: String,
    domains: Vec<RawDomain>,
}

#[derive(Debug, Deserialize)]
struct RawDomain {
    name: String,
    #[serde(default)]
    concepts: Vec<Concept>,
}

fn default_originator() -> String {
    DEFAULT_ORIGINATOR.into()
}

impl TryFrom<RawConfig> for KnowledgeConfig {
    type Error = DvncError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let domains = raw
            .domains
            .into_iter()
            .map(|d| KnowledgeBase::new(d.name, d.concepts))
            .collect::<Result<Vec<_>>>()?;
        Self::new(raw.originator, domains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concepts(names: &[&str]) -> Vec<Concept> {
        names.iter().map(|n| Concept::new(*n, "notes")).collect()
    }

    #[test]
    fn knowledge_base_preserves_order() {
        let kb = KnowledgeBase::new("Physics", concepts(&["B", "A", "C"])).unwrap();
        let names: Vec<_> = kb.concepts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn empty_knowledge_base_is_rejected() {
        let err = KnowledgeBase::new("Physics", Vec::new()).unwrap_err();
        assert!(matches!(err, DvncError::Configuration { .. }));
        assert!(err.to_string().contains("Physics"));
    }

    #[test]
    fn duplicate_concept_is_rejected() {
        let err = KnowledgeBase::new("Physics", concepts(&["Lever", "Lever"])).unwrap_err();
        assert!(matches!(err, DvncError::Configuration { .. }));
        assert!(err.to_string().contains("Lever"));
    }

    #[test]
    fn blank_domain_name_is_rejected() {
        assert!(KnowledgeBase::new("  ", concepts(&["A"])).is_err());
    }

    #[test]
    fn get_finds_concept_by_exact_name() {
        let kb = KnowledgeBase::new("Physics", concepts(&["Lever Mechanics"])).unwrap();
        assert!(kb.get("Lever Mechanics").is_some());
        assert!(kb.get("lever mechanics").is_none());
    }

    #[test]
    fn config_requires_a_domain() {
        let err = KnowledgeConfig::new("Da Vinci", Vec::new()).unwrap_err();
        assert!(matches!(err, DvncError::Configuration { .. }));
    }

    #[test]
    fn config_rejects_duplicate_domains() {
        let a = KnowledgeBase::new("Physics", concepts(&["A"])).unwrap();
        let b = KnowledgeBase::new("Physics", concepts(&["B"])).unwrap();
        assert!(KnowledgeConfig::new("Da Vinci", vec![a, b]).is_err());
    }

    #[test]
    fn builtin_has_three_domains_of_four() {
        let config = KnowledgeConfig::builtin();
        let names: Vec<_> = config.domains().iter().map(|d| d.domain()).collect();
        assert_eq!(names, ["Physics", "Biomechanics", "Anatomy"]);
        for kb in config.domains() {
            assert_eq!(kb.len(), 4, "{}", kb.domain());
        }
        assert_eq!(config.originator(), "Da Vinci");
    }

    #[test]
    fn json_defaults_originator() {
        let config = KnowledgeConfig::from_json_str(
            r#"{"domains": [{"name": "Optics", "concepts": [{"name": "Camera Obscura", "citation": "pinhole notes"}]}]}"#,
        )
        .unwrap();
        assert_eq!(config.originator(), DEFAULT_ORIGINATOR);
        assert_eq!(config.domains()[0].concepts()[0].citation, "pinhole notes");
    }

    #[test]
    fn json_domain_without_concepts_is_configuration_error() {
        let err = KnowledgeConfig::from_json_str(r#"{"domains": [{"name": "Optics"}]}"#)
            .unwrap_err();
        assert!(matches!(err, DvncError::Configuration { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = KnowledgeConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, DvncError::Parse { .. }));
    }
}
