//! The analysis pipeline: extraction → per-domain generation → composition.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing::debug;

use crate::analysis::{AnalysisResult, DomainMap};
use crate::compose::compose_synthesis;
use crate::domain::DomainSet;
use crate::extract::extract_keywords;

/// Run one analysis. A pure function of the prompt, the generator state and
/// the domain set; every configured domain gets exactly one insight.
pub fn analyze<R: RngExt>(domains: &DomainSet, prompt: &str, rng: &mut R) -> AnalysisResult {
    let keywords = extract_keywords(prompt, domains);

    let insights: DomainMap<String> = domains
        .iter()
        .map(|model| {
            let insight = match keywords.get(model.domain()) {
                Some(matched) => model.generate_insight(matched, rng),
                None => model.generate_insight(&Default::default(), rng),
            };
            (model.domain(), insight)
        })
        .collect();

    let synthesis = compose_synthesis(prompt, &insights);
    debug!(
        prompt_len = prompt.len(),
        synthesis_len = synthesis.len(),
        "analysis complete"
    );

    AnalysisResult {
        keywords,
        insights,
        synthesis,
    }
}

/// A shared domain set paired with a caller-owned generator.
///
/// Each concurrent caller should hold its own `Synthesizer`; the domain set
/// itself is shared read-only.
pub struct Synthesizer<R = StdRng> {
    domains: Arc<DomainSet>,
    rng: R,
}

impl Synthesizer<StdRng> {
    /// Deterministic synthesizer: same seed + same prompts = same output.
    pub fn seeded(domains: Arc<DomainSet>, seed: u64) -> Self {
        Self::with_rng(domains, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngExt> Synthesizer<R> {
    pub fn with_rng(domains: Arc<DomainSet>, rng: R) -> Self {
        Self { domains, rng }
    }

    pub fn analyze(&mut self, prompt: &str) -> AnalysisResult {
        analyze(&self.domains, prompt, &mut self.rng)
    }

    pub fn domains(&self) -> &Arc<DomainSet> {
        &self.domains
    }
}
