use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub(super) const NAME: &str = "/help";

/// Listing is done by the registry; see `CommandRegistry::dispatch`.
pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        NAME
    }

    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }

    fn description(&self) -> &str {
        "show this help"
    }

    async fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
        CommandResult::Handled
    }
}
