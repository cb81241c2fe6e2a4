//! Persistent adapter preferences backed by SQLite.
//!
//! The analysis core never reads this store. The CLI resolves each setting
//! as: command-line flag, then stored value, then built-in default.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use rusqlite::Connection;

use crate::consts::{DEFAULT_STREAM_DELAY_MS, DEFAULT_THINK_DELAY_MS};

pub const KEY_SEED: &str = "seed";
pub const KEY_KNOWLEDGE: &str = "knowledge";
pub const KEY_STREAM_DELAY_MS: &str = "stream_delay_ms";
pub const KEY_THINK_DELAY_MS: &str = "think_delay_ms";

/// Keys accepted by `dvnc config set`.
pub const KNOWN_KEYS: &[&str] = &[
    KEY_SEED,
    KEY_KNOWLEDGE,
    KEY_STREAM_DELAY_MS,
    KEY_THINK_DELAY_MS,
];

/// Persistent key-value configuration store.
pub struct Config {
    conn: Mutex<Connection>,
}

impl Config {
    /// Open or create the config table in the given database.
    /// Use `":memory:"` for tests.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).context("failed to open config database")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS config (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .context("failed to create config table")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("config connection lock poisoned"))
    }

    /// Get a config value by key.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT value FROM config WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Set a config value (upsert). Only [`KNOWN_KEYS`] are accepted and the
    /// value must parse for its key.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        validate(key, value)?;
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO config (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    /// Remove a config key.
    pub fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM config WHERE key = ?1", [key])?;
        Ok(())
    }

    /// All stored pairs, sorted by key.
    pub fn entries(&self) -> Result<Vec<(String, String)>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT key, value FROM config ORDER BY key ASC")?;
        let entries = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }
}

fn validate(key: &str, value: &str) -> Result<()> {
    match key {
        KEY_SEED => {
            value
                .parse::<u64>()
                .with_context(|| format!("{key} must be an unsigned integer"))?;
        }
        KEY_STREAM_DELAY_MS | KEY_THINK_DELAY_MS => {
            value
                .parse::<u64>()
                .with_context(|| format!("{key} must be a number of milliseconds"))?;
        }
        KEY_KNOWLEDGE => {
            if value.trim().is_empty() {
                bail!("{key} must be a file path");
            }
        }
        _ => bail!("unknown config key: {key} (known: {})", KNOWN_KEYS.join(", ")),
    }
    Ok(())
}

/// Adapter settings after merging stored values with defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub seed: Option<u64>,
    pub knowledge: Option<PathBuf>,
    pub stream_delay: Duration,
    pub think_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            knowledge: None,
            stream_delay: Duration::from_millis(DEFAULT_STREAM_DELAY_MS),
            think_delay: Duration::from_millis(DEFAULT_THINK_DELAY_MS),
        }
    }
}

impl Settings {
    /// Read stored values, falling back to defaults for missing keys.
    pub fn load(config: &Config) -> Result<Self> {
        let defaults = Self::default();
        let millis = |key: &str, default: Duration| -> Result<Duration> {
            match config.get(key)? {
                Some(v) => Ok(Duration::from_millis(
                    v.parse::<u64>()
                        .with_context(|| format!("stored {key} is not a number: {v}"))?,
                )),
                None => Ok(default),
            }
        };

        Ok(Self {
            seed: config
                .get(KEY_SEED)?
                .map(|v| v.parse::<u64>().with_context(|| format!("stored seed is invalid: {v}")))
                .transpose()?,
            knowledge: config.get(KEY_KNOWLEDGE)?.map(PathBuf::from),
            stream_delay: millis(KEY_STREAM_DELAY_MS, defaults.stream_delay)?,
            think_delay: millis(KEY_THINK_DELAY_MS, defaults.think_delay)?,
        })
    }
}
