//! Dimensioned scalars for the control quantities.
//!
//! Each physical quantity is a newtype over `f64` tagged with its dimension.
//! Velocity and acceleration derive their dimension from a distance marker
//! (`Linear` or `Angular`), so a model calibrated in metres cannot be fed
//! radian setpoints. Only dimensionally valid operator combinations exist;
//! a velocity added to an acceleration, or a gain applied to the wrong
//! dimension, does not compile.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

// ─── Distance Dimension ─────────────────────────────────────────────

/// Runtime tag for the distance dimension a mechanism was calibrated in.
///
/// Uses lowercase serde values for TOML compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Linear travel, base unit metre.
    Linear,
    /// Angular travel, base unit radian.
    Angular,
}

impl DistanceUnit {
    /// Base-unit symbol ("m" or "rad").
    pub fn base_symbol(&self) -> &'static str {
        match self {
            Self::Linear => "m",
            Self::Angular => "rad",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Angular => write!(f, "angular"),
        }
    }
}

/// Compile-time distance-dimension marker.
///
/// Implementors are uninhabited; they exist only as type parameters.
pub trait DistanceDim {
    /// Base-unit symbol for display.
    const SYMBOL: &'static str;
    /// Runtime tag matching this marker.
    const UNIT: DistanceUnit;
}

/// Linear travel (metres).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Linear {}

impl DistanceDim for Linear {
    const SYMBOL: &'static str = "m";
    const UNIT: DistanceUnit = DistanceUnit::Linear;
}

/// Angular travel (radians).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Angular {}

impl DistanceDim for Angular {
    const SYMBOL: &'static str = "rad";
    const UNIT: DistanceUnit = DistanceUnit::Angular;
}

// ─── Quantity Types ─────────────────────────────────────────────────

/// Travel along the mechanism's axis [m or rad].
#[derive(Debug, PartialEq, PartialOrd)]
pub struct Distance<D: DistanceDim>(f64, PhantomData<D>);

impl<D: DistanceDim> Clone for Distance<D> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<D: DistanceDim> Copy for Distance<D> {}

/// Velocity setpoint [unit/s].
#[derive(Debug, PartialEq, PartialOrd)]
pub struct Velocity<D: DistanceDim>(f64, PhantomData<D>);

impl<D: DistanceDim> Clone for Velocity<D> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<D: DistanceDim> Copy for Velocity<D> {}

/// Acceleration setpoint [unit/s²].
#[derive(Debug, PartialEq, PartialOrd)]
pub struct Acceleration<D: DistanceDim>(f64, PhantomData<D>);

impl<D: DistanceDim> Clone for Acceleration<D> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<D: DistanceDim> Copy for Acceleration<D> {}

/// Motor terminal voltage [V].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Voltage(f64);

/// Back-EMF / viscous-drag gain [V·s/unit].
#[derive(Debug, PartialEq, PartialOrd)]
pub struct VelocityGain<D: DistanceDim>(f64, PhantomData<D>);

impl<D: DistanceDim> Clone for VelocityGain<D> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<D: DistanceDim> Copy for VelocityGain<D> {}

/// Inertial gain [V·s²/unit].
#[derive(Debug, PartialEq, PartialOrd)]
pub struct AccelerationGain<D: DistanceDim>(f64, PhantomData<D>);

impl<D: DistanceDim> Clone for AccelerationGain<D> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<D: DistanceDim> Copy for AccelerationGain<D> {}

// Common surface: constructor, raw accessor, arithmetic within the
// dimension, and scalar scaling. Cross-dimension arithmetic is defined
// individually below.
macro_rules! impl_quantity {
    ($ty:ident) => {
        impl $ty {
            /// Wrap a raw value in this dimension.
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            /// Raw value in the base unit.
            pub const fn value(self) -> f64 {
                self.0
            }
        }

        impl Add for $ty {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self::new(self.0 + rhs.0)
            }
        }

        impl Sub for $ty {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self::new(self.0 - rhs.0)
            }
        }

        impl Neg for $ty {
            type Output = Self;
            fn neg(self) -> Self {
                Self::new(-self.0)
            }
        }

        impl Mul<f64> for $ty {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self {
                Self::new(self.0 * rhs)
            }
        }

        impl Div<f64> for $ty {
            type Output = Self;
            fn div(self, rhs: f64) -> Self {
                Self::new(self.0 / rhs)
            }
        }
    };
    ($ty:ident<D>) => {
        impl<D: DistanceDim> $ty<D> {
            /// Wrap a raw value in this dimension.
            pub const fn new(value: f64) -> Self {
                Self(value, PhantomData)
            }

            /// Raw value in the base unit.
            pub const fn value(self) -> f64 {
                self.0
            }
        }

        impl<D: DistanceDim> Add for $ty<D> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self::new(self.0 + rhs.0)
            }
        }

        impl<D: DistanceDim> Sub for $ty<D> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self::new(self.0 - rhs.0)
            }
        }

        impl<D: DistanceDim> Neg for $ty<D> {
            type Output = Self;
            fn neg(self) -> Self {
                Self::new(-self.0)
            }
        }

        impl<D: DistanceDim> Mul<f64> for $ty<D> {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self {
                Self::new(self.0 * rhs)
            }
        }

        impl<D: DistanceDim> Div<f64> for $ty<D> {
            type Output = Self;
            fn div(self, rhs: f64) -> Self {
                Self::new(self.0 / rhs)
            }
        }
    };
}

impl_quantity!(Distance<D>);
impl_quantity!(Velocity<D>);
impl_quantity!(Acceleration<D>);
impl_quantity!(Voltage);
impl_quantity!(VelocityGain<D>);
impl_quantity!(AccelerationGain<D>);

// ─── Compositional Derivation ───────────────────────────────────────

impl<D: DistanceDim> Distance<D> {
    /// Travel per second: derives the velocity dimension.
    pub const fn per_second(self) -> Velocity<D> {
        Velocity::new(self.0)
    }
}

impl<D: DistanceDim> Velocity<D> {
    /// Velocity change per second: derives the acceleration dimension.
    pub const fn per_second(self) -> Acceleration<D> {
        Acceleration::new(self.0)
    }

    /// Three-way sign: `+1.0` above zero, `-1.0` below zero, `0.0` at
    /// exactly zero. `f64::signum` is unsuitable here: it maps ±0.0
    /// to ±1.0. NaN also lands in the zero branch.
    pub fn sign(self) -> f64 {
        if self.0 > 0.0 {
            1.0
        } else if self.0 < 0.0 {
            -1.0
        } else {
            0.0
        }
    }
}

// ─── Gain Algebra ───────────────────────────────────────────────────

impl<D: DistanceDim> Mul<Velocity<D>> for VelocityGain<D> {
    type Output = Voltage;
    fn mul(self, rhs: Velocity<D>) -> Voltage {
        Voltage::new(self.0 * rhs.0)
    }
}

impl<D: DistanceDim> Mul<VelocityGain<D>> for Velocity<D> {
    type Output = Voltage;
    fn mul(self, rhs: VelocityGain<D>) -> Voltage {
        rhs * self
    }
}

impl<D: DistanceDim> Mul<Acceleration<D>> for AccelerationGain<D> {
    type Output = Voltage;
    fn mul(self, rhs: Acceleration<D>) -> Voltage {
        Voltage::new(self.0 * rhs.0)
    }
}

impl<D: DistanceDim> Mul<AccelerationGain<D>> for Acceleration<D> {
    type Output = Voltage;
    fn mul(self, rhs: AccelerationGain<D>) -> Voltage {
        rhs * self
    }
}

// Characterization algebra: regression slopes from measured response.
impl<D: DistanceDim> Div<Velocity<D>> for Voltage {
    type Output = VelocityGain<D>;
    fn div(self, rhs: Velocity<D>) -> VelocityGain<D> {
        VelocityGain::new(self.0 / rhs.0)
    }
}

impl<D: DistanceDim> Div<Acceleration<D>> for Voltage {
    type Output = AccelerationGain<D>;
    fn div(self, rhs: Acceleration<D>) -> AccelerationGain<D> {
        AccelerationGain::new(self.0 / rhs.0)
    }
}

// ─── Display ────────────────────────────────────────────────────────

impl<D: DistanceDim> fmt::Display for Distance<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, D::SYMBOL)
    }
}

impl<D: DistanceDim> fmt::Display for Velocity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/s", self.0, D::SYMBOL)
    }
}

impl<D: DistanceDim> fmt::Display for Acceleration<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/s²", self.0, D::SYMBOL)
    }
}

impl fmt::Display for Voltage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} V", self.0)
    }
}

impl<D: DistanceDim> fmt::Display for VelocityGain<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} V·s/{}", self.0, D::SYMBOL)
    }
}

impl<D: DistanceDim> fmt::Display for AccelerationGain<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} V·s²/{}", self.0, D::SYMBOL)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
