//! Configuration loading traits and types.
//!
//! This module provides a standardized way to load TOML characterization
//! files, plus the file schema and its semantic validation.
//!
//! # Usage
//!
//! ```rust,no_run
//! use lift_common::config::{CharacterizationConfig, ConfigError, ConfigLoader};
//! use std::path::Path;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = CharacterizationConfig::load(Path::new("characterization.toml"))?;
//!     config.validate()?;
//!     println!("Mechanisms: {}", config.mechanisms.len());
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::control::FeedforwardGains;
use crate::units::DistanceUnit;

/// Error type for configuration loading operations.
///
/// This enum represents all possible errors that can occur when loading
/// characterization files and building models from them.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Characterization file not found at specified path.
    #[error("Characterization file not found")]
    FileNotFound,

    /// TOML parsing failed.
    #[error("Failed to parse characterization: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Characterization validation failed: {0}")]
    ValidationError(String),

    /// A mechanism was requested with a distance dimension other than
    /// the one it was calibrated in.
    #[error("mechanism '{mechanism}' is calibrated {calibrated}, requested {requested}")]
    DimensionMismatch {
        mechanism: String,
        calibrated: DistanceUnit,
        requested: DistanceUnit,
    },
}

/// One characterized mechanism.
///
/// # TOML Example
///
/// ```toml
/// [[mechanisms]]
/// name = "main_lift"
/// distance_unit = "linear"
///
/// [mechanisms.gains]
/// ks = 1.0   # [V]
/// kg = 2.0   # [V]
/// kv = 0.5   # [V·s/m]
/// ka = 0.1   # [V·s²/m]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MechanismConfig {
    /// Mechanism identifier, unique within the file.
    pub name: String,

    /// Distance dimension the gains were calibrated in.
    pub distance_unit: DistanceUnit,

    /// Characterized gain block. An omitted table is the all-zero model.
    #[serde(default)]
    pub gains: FeedforwardGains,
}

impl MechanismConfig {
    /// Validate one mechanism entry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if:
    /// - `name` is empty
    /// - any gain is NaN or infinite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::ValidationError(
                "mechanism name cannot be empty".to_string(),
            ));
        }
        if !self.gains.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "mechanism '{}' has non-finite gains",
                self.name
            )));
        }
        Ok(())
    }
}

/// Characterization file: one entry per mechanism.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterizationConfig {
    /// Characterized mechanisms.
    pub mechanisms: Vec<MechanismConfig>,
}

impl CharacterizationConfig {
    /// Validate the whole file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if:
    /// - the mechanism list is empty
    /// - any mechanism fails [`MechanismConfig::validate`]
    /// - two mechanisms share a name
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mechanisms.is_empty() {
            return Err(ConfigError::ValidationError(
                "characterization defines no mechanisms".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for mech in &self.mechanisms {
            mech.validate()?;
            if !seen.insert(mech.name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate mechanism name '{}'",
                    mech.name
                )));
            }
        }
        Ok(())
    }
}

/// Trait for loading configuration from TOML files.
///
/// This trait provides a default implementation that works with any type
/// implementing `serde::de::DeserializeOwned`.
///
/// # Contract
///
/// - Returns `ConfigError::FileNotFound` if the file does not exist
/// - Returns `ConfigError::ParseError` if TOML syntax is invalid
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - Successfully loaded and parsed configuration
    /// * `Err(ConfigError)` - Loading or parsing failed
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

// Blanket implementation for all types that implement DeserializeOwned.
// This allows any serde-deserializable struct to use ConfigLoader.
impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}
