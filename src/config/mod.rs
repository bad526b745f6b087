//! Configuration module - environment variable parsing

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::game::strategy::DEFAULT_HEAL_HEALTH_RATIO;
use crate::game::threat::DEFAULT_THREAT_PROXIMITY;
use crate::game::{HitTest, StrategyConfig, ThreatAggregation, ThreatPolicy};

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Human-readable or JSON log lines (always on stderr)
    pub log_format: LogFormat,

    /// Decision tuning handed to every tick's strategy
    pub strategy: StrategyConfig,

    /// Wall-clock budget per tick; overruns are logged, not interrupted
    pub tick_budget: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(ConfigError::invalid("LOG_FORMAT", other)),
        };

        let proximity: f64 = parse_or(&lookup, "THREAT_PROXIMITY", DEFAULT_THREAT_PROXIMITY)?;
        if !proximity.is_finite() || proximity <= 0.0 {
            return Err(ConfigError::invalid("THREAT_PROXIMITY", proximity));
        }

        let heal_health_ratio: f64 =
            parse_or(&lookup, "HEAL_HEALTH_RATIO", DEFAULT_HEAL_HEALTH_RATIO)?;
        if !(0.0..=1.0).contains(&heal_health_ratio) {
            return Err(ConfigError::invalid("HEAL_HEALTH_RATIO", heal_health_ratio));
        }

        let hit_test = match lookup("THREAT_HIT_TEST").as_deref() {
            None | Some("proximity") => HitTest::Proximity,
            Some("trajectory") => HitTest::Trajectory,
            Some(other) => return Err(ConfigError::invalid("THREAT_HIT_TEST", other)),
        };

        let aggregation = match lookup("THREAT_AGGREGATION").as_deref() {
            None | Some("first_match") => ThreatAggregation::FirstMatch,
            Some("any") => ThreatAggregation::Any,
            Some(other) => return Err(ConfigError::invalid("THREAT_AGGREGATION", other)),
        };

        let tick_budget_ms: u64 = parse_or(&lookup, "TICK_BUDGET_MS", 20)?;

        Ok(Self {
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            log_format,
            strategy: StrategyConfig {
                heal_health_ratio,
                threat: ThreatPolicy {
                    proximity,
                    hit_test,
                    aggregation,
                },
            },
            tick_budget: Duration::from_millis(tick_budget_ms),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid(key, raw)),
        None => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

impl ConfigError {
    fn invalid(var: &'static str, value: impl ToString) -> Self {
        Self::Invalid {
            var,
            value: value.to_string(),
        }
    }
}
