//! Prelude module for common re-exports.
//!
//! This module provides convenient re-exports of commonly used types
//! so that consumers can do `use lift_common::prelude::*;` and get
//! the most important types without listing individual paths.
//!
//! # Usage
//!
//! ```rust
//! use lift_common::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{CharacterizationConfig, ConfigError, ConfigLoader, MechanismConfig};

// ─── Characterization ───────────────────────────────────────────────
pub use crate::control::FeedforwardGains;

// ─── Dimensioned Units ──────────────────────────────────────────────
pub use crate::units::{
    Acceleration, AccelerationGain, Angular, Distance, DistanceDim, DistanceUnit, Linear,
    Velocity, VelocityGain, Voltage,
};
