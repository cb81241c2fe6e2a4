use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

/// Re-print the detected concepts of the last analysis.
pub struct KeywordsCommand;

#[async_trait]
impl Command for KeywordsCommand {
    fn name(&self) -> &str {
        "/keywords"
    }

    fn aliases(&self) -> &[&str] {
        &["/k"]
    }

    fn description(&self) -> &str {
        "show concepts detected in the last challenge"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        match info.last_analysis {
            Some(analysis) => {
                println!("Detected concepts:");
                println!("{}", analysis.keyword_summary());
            }
            None => println!("no challenge analyzed yet"),
        }
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_info;
    use crate::engine::synthesis::SynthesisEngine;

    #[tokio::test]
    async fn handled_without_analysis() {
        assert_eq!(
            KeywordsCommand.execute(&test_info()).await,
            CommandResult::Handled
        );
    }

    #[tokio::test]
    async fn handled_with_analysis() {
        let mut engine = SynthesisEngine::new(crate::domain::DomainSet::builtin(), 2);
        engine.analyze("joint articulation");
        let info = SessionInfo {
            last_analysis: engine.last_analysis(),
            ..test_info()
        };
        assert_eq!(KeywordsCommand.execute(&info).await, CommandResult::Handled);
    }
}
