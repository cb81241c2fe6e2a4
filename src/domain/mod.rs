//! Domain models: one knowledge base plus the policy that turns matched
//! keywords into a single insight.

use std::collections::BTreeSet;
use std::sync::Arc;

use rand::RngExt;
use tracing::{debug, info};

use crate::consts::DEFAULT_TEMPERATURE;
use crate::error::{DvncError, Result};
use crate::knowledge::{Concept, KnowledgeBase, KnowledgeConfig};
use crate::prompts::domain::build_domain_system_prompt;

/// Clause appended to every insight.
pub const ACTION_CLAUSE: &str = "Define constraints, objectives, and validation metrics.";

/// Tuning knobs for insight generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationPolicy {
    /// Reserved for weighted selection. Has no effect on output yet.
    pub temperature: f32,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// A knowledge base wrapped with a generation policy.
#[derive(Debug, Clone)]
pub struct DomainModel {
    knowledge: KnowledgeBase,
    originator: String,
    policy: GenerationPolicy,
    system_prompt: String,
}

impl DomainModel {
    pub fn new(knowledge: KnowledgeBase, originator: impl Into<String>) -> Self {
        Self::with_policy(knowledge, originator, GenerationPolicy::default())
    }

    pub fn with_policy(
        knowledge: KnowledgeBase,
        originator: impl Into<String>,
        policy: GenerationPolicy,
    ) -> Self {
        let originator = originator.into();
        let system_prompt = build_domain_system_prompt(knowledge.domain(), &originator);
        Self {
            knowledge,
            originator,
            policy,
            system_prompt,
        }
    }

    pub fn domain(&self) -> &str {
        self.knowledge.domain()
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn originator(&self) -> &str {
        &self.originator
    }

    pub fn policy(&self) -> GenerationPolicy {
        self.policy
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Produce one insight sentence for the given matched concept names.
    pub fn generate_insight<R: RngExt>(&self, matched: &BTreeSet<String>, rng: &mut R) -> String {
        let concept = self.select_concept(matched, rng);
        self.format_insight(concept)
    }

    /// Pick the concept to surface.
    ///
    /// No matches: uniform over the whole knowledge base. Otherwise one
    /// matched keyword is drawn uniformly and used as a case-insensitive
    /// probe; the first concept (in knowledge-base order) containing it wins.
    pub fn select_concept<R: RngExt>(&self, matched: &BTreeSet<String>, rng: &mut R) -> &Concept {
        if matched.is_empty() {
            debug!(domain = self.domain(), "no keywords, falling back to general principles");
            return self.random_concept(rng);
        }

        let index = rng.random_range(0..matched.len());
        if let Some(keyword) = matched.iter().nth(index) {
            if let Some(concept) = self.first_containing(keyword) {
                return concept;
            }
            debug!(domain = self.domain(), keyword = %keyword, "keyword matches no concept");
        }
        self.random_concept(rng)
    }

    /// Render a concept as `**Name** (Originator's *citation*): <clause>`.
    pub fn format_insight(&self, concept: &Concept) -> String {
        format!(
            "**{}** ({}'s *{}*): {}",
            concept.name, self.originator, concept.citation, ACTION_CLAUSE
        )
    }

    fn first_containing(&self, keyword: &str) -> Option<&Concept> {
        let probe = keyword.to_lowercase();
        self.knowledge
            .concepts()
            .iter()
            .find(|c| c.name.to_lowercase().contains(&probe))
    }

    fn random_concept<R: RngExt>(&self, rng: &mut R) -> &Concept {
        let concepts = self.knowledge.concepts();
        &concepts[rng.random_range(0..concepts.len())]
    }
}

/// Every configured domain model, in configured order. Immutable; share it
/// across callers behind an [`Arc`].
#[derive(Debug, Clone)]
pub struct DomainSet {
    models: Vec<DomainModel>,
}

impl DomainSet {
    /// Build from an already validated knowledge configuration.
    pub fn from_config(config: &KnowledgeConfig) -> Self {
        let models: Vec<_> = config
            .domains()
            .iter()
            .map(|kb| DomainModel::new(kb.clone(), config.originator()))
            .collect();
        info!(
            domains = models.len(),
            originator = config.originator(),
            "domain models ready"
        );
        Self { models }
    }

    /// Build from hand-made models. Fails on an empty set or a repeated domain.
    pub fn new(models: Vec<DomainModel>) -> Result<Self> {
        if models.is_empty() {
            return Err(DvncError::configuration("no domains configured"));
        }
        for (i, model) in models.iter().enumerate() {
            if models[..i].iter().any(|m| m.domain() == model.domain()) {
                return Err(DvncError::configuration(format!(
                    "duplicate domain '{}'",
                    model.domain()
                )));
            }
        }
        Ok(Self { models })
    }

    pub fn builtin() -> Arc<Self> {
        Arc::new(Self::from_config(&KnowledgeConfig::builtin()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &DomainModel> {
        self.models.iter()
    }

    pub fn get(&self, domain: &str) -> Option<&DomainModel> {
        self.models.iter().find(|m| m.domain() == domain)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn physics() -> DomainModel {
        DomainModel::new(
            KnowledgeConfig::builtin().domains()[0].clone(),
            "Da Vinci",
        )
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn system_prompt_built_at_construction() {
        let model = physics();
        assert!(model.system_prompt().contains("Physics"));
        assert!(model.system_prompt().contains("Da Vinci"));
    }

    #[test]
    fn default_policy_temperature() {
        assert_eq!(physics().policy().temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn matched_keyword_selects_its_concept() {
        let model = physics();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let insight = model.generate_insight(&set(&["Fluid Dynamics"]), &mut rng);
            assert_eq!(
                insight,
                "**Fluid Dynamics** (Da Vinci's *water screws and canal studies*): \
                 Define constraints, objectives, and validation metrics."
            );
        }
    }

    #[test]
    fn selection_stays_within_matched_keywords() {
        let model = physics();
        let matched = set(&["Aerodynamics", "Lever Mechanics"]);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let concept = model.select_concept(&matched, &mut rng);
            assert!(matched.contains(&concept.name));
        }
    }

    #[test]
    fn probe_is_case_insensitive_and_first_match_wins() {
        let kb = KnowledgeBase::new(
            "Mixed",
            vec![
                Concept::new("Gear Trains", "first"),
                Concept::new("Gear", "second"),
            ],
        )
        .unwrap();
        let model = DomainModel::new(kb, "Da Vinci");
        let mut rng = StdRng::seed_from_u64(1);
        let concept = model.select_concept(&set(&["GEAR"]), &mut rng);
        assert_eq!(concept.citation, "first");
    }

    #[test]
    fn unknown_keyword_falls_back_to_knowledge_base() {
        let model = physics();
        let mut rng = StdRng::seed_from_u64(3);
        let concept = model.select_concept(&set(&["Telescope"]), &mut rng);
        assert!(model.knowledge().get(&concept.name).is_some());
    }

    #[test]
    fn empty_matches_fall_back_to_any_concept() {
        let model = physics();
        let mut rng = StdRng::seed_from_u64(5);
        let insight = model.generate_insight(&BTreeSet::new(), &mut rng);
        assert!(insight.starts_with("**"));
        assert!(insight.ends_with(ACTION_CLAUSE));
    }

    #[test]
    fn domain_set_rejects_empty_and_duplicates() {
        assert!(DomainSet::new(Vec::new()).is_err());
        assert!(DomainSet::new(vec![physics(), physics()]).is_err());
        assert_eq!(DomainSet::new(vec![physics()]).unwrap().len(), 1);
    }

    #[test]
    fn builtin_set_keeps_configured_order() {
        let domains = DomainSet::builtin();
        let names: Vec<_> = domains.iter().map(|m| m.domain()).collect();
        assert_eq!(names, ["Physics", "Biomechanics", "Anatomy"]);
        assert!(domains.get("Anatomy").is_some());
        assert!(domains.get("Optics").is_none());
    }
}
