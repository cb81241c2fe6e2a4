use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use rand::RngExt;
use tracing::info;

use super::Engine;
use crate::analysis::AnalysisResult;
use crate::domain::DomainSet;
use crate::synthesizer::Synthesizer;

/// Wraps a seeded [`Synthesizer`] for the chat adapter and remembers the
/// most recent analysis so the side panel can be re-rendered on demand.
pub struct SynthesisEngine {
    synthesizer: Synthesizer,
    seed: u64,
    last: Option<AnalysisResult>,
}

impl SynthesisEngine {
    pub fn new(domains: Arc<DomainSet>, seed: u64) -> Self {
        Self {
            synthesizer: Synthesizer::seeded(domains, seed),
            seed,
            last: None,
        }
    }

    /// Seed drawn from the thread-local generator. Logged so a session can
    /// be replayed with `--seed`.
    pub fn unseeded(domains: Arc<DomainSet>) -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(domains, seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn domains(&self) -> &Arc<DomainSet> {
        self.synthesizer.domains()
    }

    pub fn last_analysis(&self) -> Option<&AnalysisResult> {
        self.last.as_ref()
    }

    /// Analyze and keep the full result.
    pub fn analyze(&mut self, prompt: &str) -> &AnalysisResult {
        info!(seed = self.seed, prompt_len = prompt.len(), "analyzing prompt");
        let result = self.synthesizer.analyze(prompt);
        self.last.insert(result)
    }
}

#[async_trait]
impl Engine for SynthesisEngine {
    async fn run(&mut self, task: &str) -> Result<String> {
        Ok(self.analyze(task).synthesis.clone())
    }
}
