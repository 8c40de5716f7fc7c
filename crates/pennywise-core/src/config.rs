//! Pennywise configuration
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a three-step resolution:
//! 1. An explicit path, when one is given
//! 2. Override in data dir (~/.local/share/pennywise/config.toml)
//! 3. Embedded defaults (compiled into binary)
//!
//! Override files may set any subset of keys; missing keys keep the defaults.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::forecast::DEFAULT_HORIZON_MONTHS;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/pennywise.toml");

/// Longest horizon we are willing to project
pub const MAX_HORIZON_MONTHS: u32 = 24;

/// How amounts are presented
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// ISO currency code (informational)
    pub currency: String,
    /// Prefix for amounts in insight messages
    pub symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            symbol: "$".to_string(),
        }
    }
}

/// Windows used by the analysis pipeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Trailing months fed to the forecaster
    pub history_months: u32,
    /// Months projected ahead
    pub horizon_months: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            history_months: 6,
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub display: DisplayConfig,
    pub analysis: AnalysisConfig,
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigOrigin {
    /// Path passed explicitly (e.g. `--config`)
    Explicit(PathBuf),
    /// Override file in the data directory
    Override(PathBuf),
    /// Defaults compiled into the binary
    Embedded,
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigOrigin::Explicit(path) => write!(f, "{}", path.display()),
            ConfigOrigin::Override(path) => write!(f, "{} (override)", path.display()),
            ConfigOrigin::Embedded => write!(f, "built-in defaults"),
        }
    }
}

/// Get the default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("pennywise").join("config.toml"))
}

impl Config {
    /// Load configuration (explicit path, then override, then embedded default)
    ///
    /// An explicit path that does not exist is an error; a missing override
    /// file is not.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigOrigin)> {
        if let Some(path) = explicit {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            return Ok((Self::parse(&content)?, ConfigOrigin::Explicit(path.to_path_buf())));
        }

        if let Some(path) = default_config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                tracing::debug!(path = %path.display(), "Using config override");
                return Ok((Self::parse(&content)?, ConfigOrigin::Override(path)));
            }
        }

        Ok((Self::parse(DEFAULT_CONFIG)?, ConfigOrigin::Embedded))
    }

    /// Parse and validate TOML content, filling gaps from the defaults
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Config::default();

        if let Some(display) = raw.display {
            if let Some(currency) = display.currency {
                config.display.currency = currency;
            }
            if let Some(symbol) = display.symbol {
                config.display.symbol = symbol;
            }
        }

        if let Some(analysis) = raw.analysis {
            if let Some(history) = analysis.history_months {
                config.analysis.history_months = history;
            }
            if let Some(horizon) = analysis.horizon_months {
                config.analysis.horizon_months = horizon;
            }
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.analysis.history_months == 0 {
            return Err(Error::Config(
                "analysis.history_months must be at least 1".into(),
            ));
        }
        if !(1..=MAX_HORIZON_MONTHS).contains(&self.analysis.horizon_months) {
            return Err(Error::Config(format!(
                "analysis.horizon_months must be between 1 and {}",
                MAX_HORIZON_MONTHS
            )));
        }
        if self.display.currency.trim().is_empty() {
            return Err(Error::Config("display.currency must not be empty".into()));
        }
        Ok(())
    }
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    display: Option<RawDisplay>,
    analysis: Option<RawAnalysis>,
}

#[derive(Debug, Deserialize)]
struct RawDisplay {
    currency: Option<String>,
    symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAnalysis {
    history_months: Option<u32>,
    horizon_months: Option<u32>,
}
