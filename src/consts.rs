//! Project-wide constants.

use std::path::PathBuf;

use anyhow::{Context, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Whose studies the built-in citations refer to.
pub const DEFAULT_ORIGINATOR: &str = "Da Vinci";

/// Generation temperature. Reserved for future weighting; currently inert.
pub const DEFAULT_TEMPERATURE: f32 = 0.6;

/// Pause between streamed synthesis lines.
pub const DEFAULT_STREAM_DELAY_MS: u64 = 50;

/// How long the "analyzing" spinner runs before the answer is streamed.
pub const DEFAULT_THINK_DELAY_MS: u64 = 500;

/// Default database path: `~/.dvnc/dvnc.db`.
pub fn default_db_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".dvnc").join("dvnc.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_are_non_empty() {
        assert!(!VERSION.is_empty());
        assert!(!DEFAULT_ORIGINATOR.is_empty());
    }

    #[test]
    fn delays_are_short() {
        assert!(DEFAULT_STREAM_DELAY_MS < DEFAULT_THINK_DELAY_MS);
        assert!(DEFAULT_THINK_DELAY_MS <= 1_000);
    }

    #[test]
    fn db_path_lives_under_dot_dvnc() {
        if let Ok(path) = default_db_path() {
            assert!(path.ends_with(".dvnc/dvnc.db"));
        }
    }
}
