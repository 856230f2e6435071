//! Dashboard configuration, read from the process environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `SALESDASH_TOP_PRODUCTS_LIMIT` | `3` |
//! | `SALESDASH_UNKNOWN_PRODUCT_LABEL` | `Unknown product` |

use thiserror::Error;

use crate::ranking::UNKNOWN_PRODUCT_LABEL;

pub const TOP_PRODUCTS_LIMIT_ENV: &str = "SALESDASH_TOP_PRODUCTS_LIMIT";
pub const UNKNOWN_PRODUCT_LABEL_ENV: &str = "SALESDASH_UNKNOWN_PRODUCT_LABEL";

const DEFAULT_TOP_PRODUCTS_LIMIT: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: invalid value {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("unknown product label must not be empty")]
    EmptyPlaceholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Number of entries in the top-products ranking.
    pub top_products_limit: usize,
    /// Name shown for ranked products the catalog cannot resolve.
    pub unknown_product_label: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_products_limit: DEFAULT_TOP_PRODUCTS_LIMIT,
            unknown_product_label: UNKNOWN_PRODUCT_LABEL.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load from the environment, falling back to defaults on invalid values.
    pub fn from_env() -> Self {
        match Self::from_lookup(|key| std::env::var(key).ok()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "invalid dashboard configuration; using defaults");
                Self::default()
            }
        }
    }

    /// Build from a key lookup (the environment in production, a map in tests).
    ///
    /// Missing keys take their default; present but invalid values are errors.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = get(TOP_PRODUCTS_LIMIT_ENV) {
            config.top_products_limit =
                raw.trim()
                    .parse::<usize>()
                    .map_err(|e| ConfigError::InvalidValue {
                        key: TOP_PRODUCTS_LIMIT_ENV,
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?;
        }

        if let Some(raw) = get(UNKNOWN_PRODUCT_LABEL_ENV) {
            config.unknown_product_label = raw;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.unknown_product_label.trim().is_empty() {
            return Err(ConfigError::EmptyPlaceholder);
        }
        Ok(())
    }

    pub fn with_top_products_limit(mut self, limit: usize) -> Self {
        self.top_products_limit = limit;
        self
    }

    pub fn with_unknown_product_label(mut self, label: impl Into<String>) -> Self {
        self.unknown_product_label = label.into();
        self
    }
}
