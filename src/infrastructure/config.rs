//! Engine configuration

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::domain::entities::{DEFAULT_ROUNDS_PER_CHAPTER, DEFAULT_SUMMARY_THRESHOLD};

/// Engine knobs loaded from environment, with defaults for every value.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Rounds in one chapter.
    pub rounds_per_chapter: u32,
    /// Pending-message count that makes an ordinary summary due.
    pub summary_threshold: u32,
    /// Round-advance admissions allowed per rate-limit window.
    pub rate_limit_max: u32,
    /// Rate-limit window length in milliseconds.
    pub rate_limit_window_ms: u64,
    /// Every Nth round is a strategic (DIRECTOR) checkpoint.
    pub director_checkpoint_interval: u32,
    /// Caller-level timeout on AI narration generation.
    pub narration_timeout: Duration,
}

impl EngineConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            rounds_per_chapter: parse_var("ENGINE_ROUNDS_PER_CHAPTER", DEFAULT_ROUNDS_PER_CHAPTER)?,
            summary_threshold: parse_var("ENGINE_SUMMARY_THRESHOLD", DEFAULT_SUMMARY_THRESHOLD)?,
            rate_limit_max: parse_var("ENGINE_RATE_LIMIT_MAX", 10)?,
            rate_limit_window_ms: parse_var("ENGINE_RATE_LIMIT_WINDOW_MS", 60_000)?,
            director_checkpoint_interval: parse_var("ENGINE_DIRECTOR_CHECKPOINT_INTERVAL", 20)?,
            narration_timeout: Duration::from_secs(parse_var("ENGINE_NARRATION_TIMEOUT_SECS", 30)?),
        })
    }

    /// Rate-limit window as a chrono duration for the limiter.
    pub fn rate_limit_window(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.rate_limit_window_ms as i64)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rounds_per_chapter: DEFAULT_ROUNDS_PER_CHAPTER,
            summary_threshold: DEFAULT_SUMMARY_THRESHOLD,
            rate_limit_max: 10,
            rate_limit_window_ms: 60_000,
            director_checkpoint_interval: 20,
            narration_timeout: Duration::from_secs(30),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{name} must be a valid number, got '{value}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.rounds_per_chapter, 25);
        assert_eq!(config.summary_threshold, 10);
        assert_eq!(config.director_checkpoint_interval, 20);
        assert_eq!(config.rate_limit_window().num_milliseconds(), 60_000);
    }
}
