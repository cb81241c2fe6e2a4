pub mod synthesis;

use anyhow::Result;
use async_trait::async_trait;

/// The outermost boundary. main.rs only knows this trait.
/// Adapters (streaming, JSON output) wrap around it.
#[async_trait]
pub trait Engine: Send + Sync {
    async fn run(&mut self, task: &str) -> Result<String>;
}
