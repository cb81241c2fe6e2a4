use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

/// Ends the session. The farewell is printed by the REPL once the loop exits.
pub struct QuitCommand;

#[async_trait]
impl Command for QuitCommand {
    fn name(&self) -> &str {
        "/quit"
    }

    fn aliases(&self) -> &[&str] {
        &["/q", "/exit", "quit", "exit"]
    }

    fn description(&self) -> &str {
        "end the session"
    }

    async fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
        CommandResult::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandRegistry;
    use crate::commands::tests::test_info;

    #[tokio::test]
    async fn every_trigger_quits_through_the_registry() {
        let reg = CommandRegistry::new();
        let info = test_info();
        for trigger in std::iter::once(QuitCommand.name()).chain(QuitCommand.aliases().iter().copied()) {
            assert_eq!(reg.dispatch(trigger, &info).await, CommandResult::Quit, "{trigger}");
        }
    }

    #[tokio::test]
    async fn surrounding_whitespace_is_ignored() {
        let reg = CommandRegistry::new();
        assert_eq!(reg.dispatch("  exit \n", &test_info()).await, CommandResult::Quit);
    }
}
