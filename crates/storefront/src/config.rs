//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `VITRINE_CURRENCY` - Currency for totals (default: NGN)
//! - `VITRINE_SLIDE_DURATION_MS` - Hero slide duration (default: 7000)
//! - `VITRINE_TICK_INTERVAL_MS` - Hero timer tick interval (default: 100)
//! - `VITRINE_NOTICE_TTL_MS` - Lifetime of transient notices (default: 3000)
//! - `VITRINE_CATALOG_PATH` - YAML catalog to load instead of the built-in one
//! - `VITRINE_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `RUST_LOG` - Tracing filter directives

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use vitrine_core::CurrencyCode;

use crate::carousel::{CarouselError, CarouselTiming};

const DEFAULT_SLIDE_DURATION_MS: u64 = 7000;
const DEFAULT_TICK_INTERVAL_MS: u64 = 100;
const DEFAULT_NOTICE_TTL_MS: u64 = 3000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'pretty' or 'json', got '{other}'")),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Filter directives; `RUST_LOG` syntax.
    pub filter: Option<String>,
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Currency used for cart totals
    pub currency: CurrencyCode,
    /// Hero carousel timing
    pub carousel: CarouselTiming,
    /// How long transient notices stay up
    pub notice_ttl: Duration,
    /// External catalog file, if any
    pub catalog_path: Option<PathBuf>,
    /// Logging setup
    pub log: LogConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            carousel: CarouselTiming::default(),
            notice_ttl: Duration::from_millis(DEFAULT_NOTICE_TTL_MS),
            catalog_path: None,
            log: LogConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let currency = parse_or_default(&lookup, "VITRINE_CURRENCY", CurrencyCode::default())?;
        let slide_duration =
            get_millis(&lookup, "VITRINE_SLIDE_DURATION_MS", DEFAULT_SLIDE_DURATION_MS)?;
        let tick_interval =
            get_millis(&lookup, "VITRINE_TICK_INTERVAL_MS", DEFAULT_TICK_INTERVAL_MS)?;
        let carousel = CarouselTiming::new(slide_duration, tick_interval)
            .map_err(|e: CarouselError| invalid("VITRINE_TICK_INTERVAL_MS", &e))?;
        let notice_ttl = get_millis(&lookup, "VITRINE_NOTICE_TTL_MS", DEFAULT_NOTICE_TTL_MS)?;
        let catalog_path = lookup("VITRINE_CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let log = LogConfig {
            format: parse_or_default(&lookup, "VITRINE_LOG_FORMAT", LogFormat::default())?,
            filter: lookup("RUST_LOG"),
        };

        Ok(Self {
            currency,
            carousel,
            notice_ttl,
            catalog_path,
            log,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional variable, falling back to `default` when unset.
fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |value| {
        value
            .parse::<T>()
            .map_err(|e| invalid(key, &e))
    })
}

fn invalid(key: &str, reason: &impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), reason.to_string())
}

/// Read a millisecond duration.
fn get_millis<F>(lookup: &F, key: &str, default_ms: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let ms: u64 = parse_or_default(lookup, key, default_ms)?;
    Ok(Duration::from_millis(ms))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.currency, CurrencyCode::NGN);
        assert_eq!(config.carousel.ticks_per_slide(), 70);
        assert_eq!(config.notice_ttl, Duration::from_millis(3000));
        assert!(config.catalog_path.is_none());
        assert_eq!(config.log.format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("VITRINE_CURRENCY", "usd"),
            ("VITRINE_SLIDE_DURATION_MS", "5000"),
            ("VITRINE_TICK_INTERVAL_MS", "50"),
            ("VITRINE_NOTICE_TTL_MS", "1500"),
            ("VITRINE_CATALOG_PATH", "catalog.yaml"),
            ("VITRINE_LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(config.currency, CurrencyCode::USD);
        assert_eq!(config.carousel.ticks_per_slide(), 100);
        assert_eq!(config.notice_ttl, Duration::from_millis(1500));
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.yaml")));
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_number() {
        let err = StorefrontConfig::from_lookup(lookup(&[("VITRINE_NOTICE_TTL_MS", "soon")]))
            .unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "VITRINE_NOTICE_TTL_MS")
        );
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let err = StorefrontConfig::from_lookup(lookup(&[("VITRINE_TICK_INTERVAL_MS", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_unknown_currency() {
        let err =
            StorefrontConfig::from_lookup(lookup(&[("VITRINE_CURRENCY", "XYZ")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid environment variable VITRINE_CURRENCY: unknown currency code: XYZ"
        );
    }

    #[test]
    fn test_blank_catalog_path_is_ignored() {
        let config =
            StorefrontConfig::from_lookup(lookup(&[("VITRINE_CATALOG_PATH", "  ")])).unwrap();
        assert!(config.catalog_path.is_none());
    }
}
