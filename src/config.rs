//! Inventory file location and query defaults.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Quantity, DEFAULT_LOW_THRESHOLD};

/// Default inventory file, relative to the working directory.
pub const DEFAULT_PATH: &str = "inventory.json";
/// Overrides [`InventoryConfig::path`].
pub const PATH_ENV: &str = "STOCKBOOK_FILE";
/// Overrides [`InventoryConfig::low_threshold`].
pub const THRESHOLD_ENV: &str = "STOCKBOOK_LOW_THRESHOLD";

/// Invalid configuration value.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A threshold that is not a finite number.
    #[error("invalid low-stock threshold {value:?}")]
    InvalidThreshold {
        /// Raw value as supplied.
        value: String,
    },
}

/// Where the inventory lives and what counts as low stock.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryConfig {
    /// JSON file loaded at startup and saved after changes.
    pub path: PathBuf,
    /// Items strictly below this quantity are reported as low.
    pub low_threshold: Quantity,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            low_threshold: DEFAULT_LOW_THRESHOLD,
        }
    }
}

impl InventoryConfig {
    /// Defaults overridden by `STOCKBOOK_FILE` and `STOCKBOOK_LOW_THRESHOLD`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        if let Some(path) = lookup(PATH_ENV).filter(|p| !p.trim().is_empty()) {
            cfg.path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(THRESHOLD_ENV) {
            cfg.low_threshold = parse_threshold(&raw)?;
        }
        Ok(cfg)
    }
}

/// Parses a threshold, rejecting text and non-finite values.
pub fn parse_threshold(raw: &str) -> Result<Quantity, ConfigError> {
    raw.parse::<Quantity>()
        .ok()
        .filter(|q| q.is_finite())
        .ok_or_else(|| ConfigError::InvalidThreshold {
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_overrides() {
        let cfg = InventoryConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, InventoryConfig::default());
        assert_eq!(cfg.path, PathBuf::from("inventory.json"));
        assert_eq!(cfg.low_threshold, Quantity::Int(5));
    }

    #[test]
    fn overrides_path_and_threshold() {
        let cfg = InventoryConfig::from_lookup(|key| match key {
            PATH_ENV => Some("/tmp/stock.json".to_string()),
            THRESHOLD_ENV => Some("2.5".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.path, PathBuf::from("/tmp/stock.json"));
        assert_eq!(cfg.low_threshold, Quantity::Real(2.5));
    }

    #[test]
    fn rejects_bad_threshold() {
        let err = InventoryConfig::from_lookup(|key| (key == THRESHOLD_ENV).then(|| "lots".to_string()));
        assert!(matches!(err, Err(ConfigError::InvalidThreshold { .. })));
        assert!(parse_threshold("NaN").is_err());
    }
}
