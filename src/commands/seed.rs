use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub struct SeedCommand;

#[async_trait]
impl Command for SeedCommand {
    fn name(&self) -> &str {
        "/seed"
    }

    fn description(&self) -> &str {
        "show the seed (replay this session with --seed)"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        println!("  seed       {}", info.seed);
        println!("  knowledge  {}", info.knowledge);
        CommandResult::Handled
    }
}
