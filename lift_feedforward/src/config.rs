//! Characterization loading and typed model construction.
//!
//! Bridges the runtime-tagged TOML schema (`lift_common::config`) to the
//! compile-time-dimensioned [`ElevatorFeedforward`]. Loading is ordinary
//! blocking file I/O done once at setup time, never on the control path.

use std::path::Path;

use tracing::{debug, info, warn};

use lift_common::config::{CharacterizationConfig, ConfigError, ConfigLoader, MechanismConfig};
use lift_common::units::DistanceDim;

use crate::elevator::ElevatorFeedforward;

/// Load and validate a characterization file.
///
/// 1. Parse the TOML at `path` → [`CharacterizationConfig`]
/// 2. Run semantic validation (at least one mechanism, unique non-empty
///    names, finite gains)
/// 3. Log per-mechanism observations
///
/// A mechanism without an acceleration gain is accepted as-is (no inertial
/// compensation); negative static, gravity, or velocity gains are accepted
/// but flagged, since a gravity-loaded axis normally has non-negative
/// values for all three.
pub fn load_characterization(path: &Path) -> Result<CharacterizationConfig, ConfigError> {
    let config = CharacterizationConfig::load(path)?;
    config.validate()?;

    for mech in &config.mechanisms {
        if mech.gains.ka == 0.0 {
            debug!(
                "Mechanism '{}' has no acceleration gain; inertial compensation disabled",
                mech.name
            );
        }
        if mech.gains.ks < 0.0 || mech.gains.kg < 0.0 || mech.gains.kv < 0.0 {
            warn!(
                "Mechanism '{}' has negative gains (ks={}, kg={}, kv={})",
                mech.name, mech.gains.ks, mech.gains.kg, mech.gains.kv
            );
        }
    }

    info!(
        "Loaded characterization for {} mechanism(s)",
        config.mechanisms.len()
    );
    Ok(config)
}

/// Build a typed feedforward model from a mechanism entry.
///
/// The requested dimension `D` must match the `distance_unit` the
/// mechanism was calibrated in. A mismatch is rejected rather than
/// silently reinterpreting the gains in the wrong unit.
pub fn mechanism_model<D: DistanceDim>(
    mech: &MechanismConfig,
) -> Result<ElevatorFeedforward<D>, ConfigError> {
    if mech.distance_unit != D::UNIT {
        return Err(ConfigError::DimensionMismatch {
            mechanism: mech.name.clone(),
            calibrated: mech.distance_unit,
            requested: D::UNIT,
        });
    }
    Ok(ElevatorFeedforward::from_gains(&mech.gains))
}

/// Find a mechanism by name.
pub fn find_mechanism<'a>(
    config: &'a CharacterizationConfig,
    name: &str,
) -> Option<&'a MechanismConfig> {
    config.mechanisms.iter().find(|m| m.name == name)
}

// ─── Tests ──────────────────────────────────────────────────────────
