//! Keyword extraction: which concepts does a prompt mention?
//!
//! A concept matches when any of its name tokens (split on whitespace and
//! hyphens, lowercased) occurs as a substring of the lowercased prompt.
//! Matching is not word-boundary aware: a token also hits inside longer
//! words ("lever" in "cleverly"). This is a known precision gap; switching
//! to word boundaries would change observable output.

use std::collections::BTreeSet;

use tracing::debug;

use crate::analysis::DomainMap;
use crate::domain::DomainSet;

/// Split a concept name into its lowercase match tokens.
pub fn concept_tokens(name: &str) -> Vec<String> {
    name.to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// True when any token of `concept` appears in the already-lowercased prompt.
pub fn concept_matches(concept: &str, prompt_lower: &str) -> bool {
    concept_tokens(concept)
        .iter()
        .any(|token| prompt_lower.contains(token.as_str()))
}

/// Matched concept names for every domain, in configured domain order.
/// A domain with no matches maps to an empty set.
pub fn extract_keywords(prompt: &str, domains: &DomainSet) -> DomainMap<BTreeSet<String>> {
    let prompt_lower = prompt.to_lowercase();

    domains
        .iter()
        .map(|model| {
            let matched: BTreeSet<String> = model
                .knowledge()
                .concepts()
                .iter()
                .filter(|c| concept_matches(&c.name, &prompt_lower))
                .map(|c| c.name.clone())
                .collect();
            debug!(domain = model.domain(), matched = matched.len(), "keywords extracted");
            (model.domain(), matched)
        })
        .collect()
}
