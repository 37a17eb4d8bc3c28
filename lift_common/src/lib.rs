//! Lift Common Library
//!
//! This crate provides the shared leaf types for the lift workspace:
//! dimensioned control quantities, raw characterization records, and
//! characterization-file loading.
//!
//! # Module Structure
//!
//! - [`units`] - Compile-time dimensional typing for control quantities
//! - [`control`] - Raw characterization gain records
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use lift_common::prelude::*;
//!
//! let v: Velocity<Linear> = Velocity::new(0.25);
//! let kv: VelocityGain<Linear> = VelocityGain::new(2.0);
//! let voltage: Voltage = kv * v;
//! assert_eq!(voltage.value(), 0.5);
//! ```

pub mod config;
pub mod control;
pub mod prelude;
pub mod units;
