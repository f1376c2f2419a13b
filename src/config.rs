//! Page configuration
//!
//! Tunables passed from JavaScript when the page is mounted. Every field
//! has a default so an absent or partial object is accepted.

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// Distance below the scroll offset at which the tracker samples sections
pub const DEFAULT_SCROLL_LOOKAHEAD: f64 = 100.0;

/// Half the size of the decorative pointer halo
pub const DEFAULT_HALO_RADIUS: f64 = 192.0;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub scroll_lookahead: f64,
    pub halo_radius: f64,
    /// One of off/error/warn/info/debug/trace; keeps the current level when unset
    pub log_level: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_lookahead: DEFAULT_SCROLL_LOOKAHEAD,
            halo_radius: DEFAULT_HALO_RADIUS,
            log_level: None,
        }
    }
}

impl PageConfig {
    pub fn validate(&self) -> Result<(), PortfolioError> {
        if !self.scroll_lookahead.is_finite() {
            return Err(PortfolioError::Config(format!(
                "scroll_lookahead must be finite, got {}",
                self.scroll_lookahead
            )));
        }
        if !self.halo_radius.is_finite() || self.halo_radius < 0.0 {
            return Err(PortfolioError::Config(format!(
                "halo_radius must be a non-negative number, got {}",
                self.halo_radius
            )));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<Option<LevelFilter>, PortfolioError> {
        self.log_level
            .as_deref()
            .map(|level| {
                LevelFilter::from_str(level)
                    .map_err(|_| PortfolioError::Config(format!("unknown log level '{}'", level)))
            })
            .transpose()
    }

    /// Apply the configured log level to the global logger
    pub fn apply_log_level(&self) -> Result<(), PortfolioError> {
        if let Some(filter) = self.level_filter()? {
            log::set_max_level(filter);
        }
        Ok(())
    }
}
