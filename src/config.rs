//! Runtime configuration read from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `BLOCKFALL_SEED` | random |
//! | `BLOCKFALL_FRAME_MS` | 16 |
//! | `BLOCKFALL_REPEAT_MS` | 100 |
//! | `BLOCKFALL_AUTOSTART` | false |
//! | `BLOCKFALL_LOG_PATH` | unset |
//!
//! Unparseable values fall back to the default. Periods are at least 1ms.

use std::env;
use std::path::PathBuf;

use crate::types::{FRAME_MS, HOLD_REPEAT_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Fixed piece seed; `None` draws a random one at startup.
    pub seed: Option<u64>,
    pub frame_ms: u32,
    pub repeat_ms: u32,
    /// Start playing without waiting for Enter.
    pub autostart: bool,
    /// Append `[Game]` event lines to this file.
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frame_ms: FRAME_MS,
            repeat_ms: HOLD_REPEAT_MS,
            autostart: false,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the process environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());

        let frame_ms = lookup("BLOCKFALL_FRAME_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.frame_ms)
            .max(1);

        let repeat_ms = lookup("BLOCKFALL_REPEAT_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.repeat_ms)
            .max(1);

        let autostart = lookup("BLOCKFALL_AUTOSTART")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(defaults.autostart);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            seed,
            frame_ms,
            repeat_ms,
            autostart,
            log_path,
        }
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config(&[]), AppConfig::default());
        assert_eq!(AppConfig::default().frame_ms, 16);
        assert_eq!(AppConfig::default().repeat_ms, 100);
    }

    #[test]
    fn test_reads_every_variable() {
        let c = config(&[
            ("BLOCKFALL_SEED", "42"),
            ("BLOCKFALL_FRAME_MS", "33"),
            ("BLOCKFALL_REPEAT_MS", "80"),
            ("BLOCKFALL_AUTOSTART", "yes"),
            ("BLOCKFALL_LOG_PATH", " /tmp/blockfall.log "),
        ]);
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.frame_ms, 33);
        assert_eq!(c.repeat_ms, 80);
        assert!(c.autostart);
        assert_eq!(c.log_path, Some(PathBuf::from("/tmp/blockfall.log")));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let c = config(&[
            ("BLOCKFALL_SEED", "abc"),
            ("BLOCKFALL_FRAME_MS", "-5"),
            ("BLOCKFALL_AUTOSTART", "maybe"),
            ("BLOCKFALL_LOG_PATH", "   "),
        ]);
        assert_eq!(c, AppConfig::default());
    }

    #[test]
    fn test_zero_periods_clamp_to_one() {
        let c = config(&[("BLOCKFALL_FRAME_MS", "0"), ("BLOCKFALL_REPEAT_MS", "0")]);
        assert_eq!(c.frame_ms, 1);
        assert_eq!(c.repeat_ms, 1);
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = AppConfig::from_env();
    }
}
