//! Engine and driver configuration
//!
//! Defaults reproduce the reference game: a 3-ply search and a one second
//! pause before the AI replies. `from_env` overlays environment variables:
//!
//! | Variable            | Meaning                          | Example    |
//! |---------------------|----------------------------------|------------|
//! | `OTHELLO_DEPTH`     | Search depth in plies            | `4`        |
//! | `OTHELLO_PASS_RULE` | `terminal` or `pass`             | `terminal` |
//! | `OTHELLO_THINK_MS`  | Delay before the AI move, in ms  | `250`      |

use std::time::Duration;

use crate::error::{OthelloError, Result};
use crate::search::PassRule;

pub const ENV_DEPTH: &str = "OTHELLO_DEPTH";
pub const ENV_PASS_RULE: &str = "OTHELLO_PASS_RULE";
pub const ENV_THINK_MS: &str = "OTHELLO_THINK_MS";

/// Search horizon used by the reference AI
pub const DEFAULT_DEPTH: u8 = 3;

/// Pause before the AI move is applied
pub const DEFAULT_THINK_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Search depth in plies
    pub depth: u8,
    /// Handling of a side with no legal move inside the search
    pub pass_rule: PassRule,
    /// Minimum time between the AI starting to think and its move landing
    pub think_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            pass_rule: PassRule::default(),
            think_delay: DEFAULT_THINK_DELAY,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_pass_rule(mut self, pass_rule: PassRule) -> Self {
        self.pass_rule = pass_rule;
        self
    }

    #[must_use]
    pub fn with_think_delay(mut self, think_delay: Duration) -> Self {
        self.think_delay = think_delay;
        self
    }

    /// Defaults overlaid with the `OTHELLO_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_DEPTH) {
            config.depth = parse_value(ENV_DEPTH, &value)?;
        }
        if let Some(value) = lookup(ENV_PASS_RULE) {
            config.pass_rule = value.parse().map_err(|_| invalid(ENV_PASS_RULE, &value))?;
        }
        if let Some(value) = lookup(ENV_THINK_MS) {
            config.think_delay = Duration::from_millis(parse_value(ENV_THINK_MS, &value)?);
        }

        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> OthelloError {
    OthelloError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.depth, 3);
        assert_eq!(config.pass_rule, PassRule::PassTurn);
        assert_eq!(config.think_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::default()
            .with_depth(5)
            .with_pass_rule(PassRule::Terminal)
            .with_think_delay(Duration::ZERO);
        assert_eq!(config.depth, 5);
        assert_eq!(config.pass_rule, PassRule::Terminal);
        assert_eq!(config.think_delay, Duration::ZERO);
    }

    #[test]
    fn test_lookup_overrides() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            (ENV_DEPTH, "4"),
            (ENV_PASS_RULE, "terminal"),
            (ENV_THINK_MS, " 250 "),
        ]))
        .unwrap();
        assert_eq!(config.depth, 4);
        assert_eq!(config.pass_rule, PassRule::Terminal);
        assert_eq!(config.think_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_lookup_empty_keeps_defaults() {
        let config = EngineConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_lookup_rejects_garbage() {
        let err = EngineConfig::from_lookup(lookup_from(&[(ENV_DEPTH, "deep")])).unwrap_err();
        assert_eq!(
            err,
            OthelloError::InvalidConfig {
                key: ENV_DEPTH.to_string(),
                value: "deep".to_string()
            }
        );

        assert!(EngineConfig::from_lookup(lookup_from(&[(ENV_PASS_RULE, "maybe")])).is_err());
        assert!(EngineConfig::from_lookup(lookup_from(&[(ENV_DEPTH, "-1")])).is_err());
    }
}
