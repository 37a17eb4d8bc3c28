//! Characterization records for the feedforward engine.
//!
//! Defines `FeedforwardGains`, the raw gain block produced by offline
//! system identification.

use serde::{Deserialize, Serialize};
use static_assertions::const_assert_eq;

/// Feedforward gain block — 4 × f64 = 32 bytes.
///
/// Raw characterization data as it appears in TOML, before being wrapped
/// in dimensioned scalars. Each term is disabled by setting its gain to
/// zero; an omitted field deserializes to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct FeedforwardGains {
    /// Static friction gain [V] (0 = disabled).
    #[serde(default)]
    pub ks: f64,
    /// Gravity hold gain [V] (0 = disabled).
    #[serde(default)]
    pub kg: f64,
    /// Velocity gain [V·s/unit] (0 = disabled).
    #[serde(default)]
    pub kv: f64,
    /// Acceleration gain [V·s²/unit] (0 = disabled).
    #[serde(default)]
    pub ka: f64,
}

const_assert_eq!(core::mem::size_of::<FeedforwardGains>(), 32);

impl Default for FeedforwardGains {
    fn default() -> Self {
        Self {
            ks: 0.0,
            kg: 0.0,
            kv: 0.0,
            ka: 0.0,
        }
    }
}

impl FeedforwardGains {
    /// Returns true if all gains are finite (not NaN, not Inf).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.ks.is_finite() && self.kg.is_finite() && self.kv.is_finite() && self.ka.is_finite()
    }
}
