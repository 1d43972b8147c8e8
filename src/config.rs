// config.rs - Runtime settings
//
// Read from the process environment, with `.env` support on the server.
// Leptos' own site options (address, site root) still come from
// leptos_config and [package.metadata.leptos].

use std::time::Duration;

use crate::error::{EstateError, Result};
use crate::web_app::model::{FEATURED_LIMIT, SIMILAR_LIMIT};

pub const SEARCH_DELAY_ENV: &str = "ESTATE_SEARCH_DELAY_MS";
pub const FEATURED_LIMIT_ENV: &str = "ESTATE_FEATURED_LIMIT";
pub const SIMILAR_LIMIT_ENV: &str = "ESTATE_SIMILAR_LIMIT";

const DEFAULT_SEARCH_DELAY_MS: u64 = 1_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Pause before search results are returned, so the loading state shows
    pub search_delay: Duration,
    /// Listings shown in the home page featured grid
    pub featured_limit: usize,
    /// Listings shown under "Similar Properties"
    pub similar_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_delay: Duration::from_millis(DEFAULT_SEARCH_DELAY_MS),
            featured_limit: FEATURED_LIMIT,
            similar_limit: SIMILAR_LIMIT,
        }
    }
}

impl AppConfig {
    /// No delay; used by tests.
    pub fn immediate() -> Self {
        Self {
            search_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Build from a key lookup. Unset keys fall back to defaults; set but
    /// malformed keys are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let search_delay = parse_var(&lookup, SEARCH_DELAY_ENV)?
            .map(Duration::from_millis)
            .unwrap_or(defaults.search_delay);
        let featured_limit = parse_var(&lookup, FEATURED_LIMIT_ENV)?.unwrap_or(defaults.featured_limit);
        let similar_limit = parse_var(&lookup, SIMILAR_LIMIT_ENV)?.unwrap_or(defaults.similar_limit);

        Ok(Self {
            search_delay,
            featured_limit,
            similar_limit,
        })
    }

    /// Load `.env` (if present) and read the process environment.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| EstateError::Config(format!("{} must be a non-negative integer, got '{}'", key, raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.search_delay, Duration::from_millis(1_000));
        assert_eq!(config.featured_limit, 6);
        assert_eq!(config.similar_limit, 3);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (SEARCH_DELAY_ENV, "0"),
            (FEATURED_LIMIT_ENV, " 9 "),
            (SIMILAR_LIMIT_ENV, ""),
        ]))
        .unwrap();
        assert_eq!(config.search_delay, Duration::ZERO);
        assert_eq!(config.featured_limit, 9);
        assert_eq!(config.similar_limit, 3);
    }

    #[test]
    fn test_malformed_value_is_error() {
        let err = AppConfig::from_lookup(lookup(&[(SEARCH_DELAY_ENV, "soon")])).unwrap_err();
        assert!(matches!(err, EstateError::Config(ref msg) if msg.contains(SEARCH_DELAY_ENV)));
    }
}
