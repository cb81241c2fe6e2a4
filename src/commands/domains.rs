use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::compose::domain_symbol;
use crate::domain::DomainSet;

/// Human-readable listing of every domain, its concepts and system prompt.
pub fn render_domains(domains: &DomainSet) -> String {
    let mut out = String::new();
    for model in domains.iter() {
        out.push_str(&format!(
            "{} {} ({} concepts)\n",
            domain_symbol(model.domain()),
            model.domain(),
            model.knowledge().len()
        ));
        for concept in model.knowledge().concepts() {
            out.push_str(&format!("  - {}: {}\n", concept.name, concept.citation));
        }
        out.push_str(&format!("  prompt: {}\n", model.system_prompt()));
    }
    out
}

pub struct DomainsCommand;

#[async_trait]
impl Command for DomainsCommand {
    fn name(&self) -> &str {
        "/domains"
    }

    fn description(&self) -> &str {
        "list domains and their concepts"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        print!("{}", render_domains(info.domains));
        CommandResult::Handled
    }
}
