//! Elevator feedforward model.
//!
//! Static friction compensation (ks × sign(v)), gravity hold (kg),
//! back-EMF / viscous drag (kv × v), inertia (ka × a).
//! Zero gains disable each component.

use lift_common::control::FeedforwardGains;
use lift_common::units::{
    Acceleration, AccelerationGain, DistanceDim, Velocity, VelocityGain, Voltage,
};

/// Feedforward model for an elevator-style mechanism.
///
/// Gains are fixed at construction; reconfiguration means building a new
/// value. The distance dimension `D` is part of the type, so a model
/// calibrated for linear travel cannot be evaluated with angular
/// setpoints.
#[derive(Debug)]
pub struct ElevatorFeedforward<D: DistanceDim> {
    /// Static friction gain [V], applied with the sign of velocity.
    ks: Voltage,
    /// Gravity hold gain [V], direction-independent.
    kg: Voltage,
    /// Velocity gain [V·s/unit].
    kv: VelocityGain<D>,
    /// Acceleration gain [V·s²/unit] (0 = no inertial compensation).
    ka: AccelerationGain<D>,
}

impl<D: DistanceDim> Clone for ElevatorFeedforward<D> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<D: DistanceDim> Copy for ElevatorFeedforward<D> {}

impl<D: DistanceDim> Default for ElevatorFeedforward<D> {
    /// All-zero model: returns 0 V for every input. Placeholder until
    /// characterization data is available.
    fn default() -> Self {
        Self::from_gains(&FeedforwardGains::default())
    }
}

impl<D: DistanceDim> ElevatorFeedforward<D> {
    /// Create a model from static, gravity, and velocity gains.
    ///
    /// The acceleration gain starts at zero; opt in with
    /// [`with_acceleration_gain`](Self::with_acceleration_gain) when the
    /// mechanism's inertial term has been characterized.
    pub fn new(ks: Voltage, kg: Voltage, kv: VelocityGain<D>) -> Self {
        Self {
            ks,
            kg,
            kv,
            ka: AccelerationGain::new(0.0),
        }
    }

    /// Set the acceleration gain.
    pub fn with_acceleration_gain(mut self, ka: AccelerationGain<D>) -> Self {
        self.ka = ka;
        self
    }

    /// Wrap a raw characterization record in dimensioned gains.
    ///
    /// No validation is performed here; the contract accepts any finite
    /// values, and the config path checks finiteness before this is
    /// ever reached.
    pub fn from_gains(gains: &FeedforwardGains) -> Self {
        Self {
            ks: Voltage::new(gains.ks),
            kg: Voltage::new(gains.kg),
            kv: VelocityGain::new(gains.kv),
            ka: AccelerationGain::new(gains.ka),
        }
    }

    /// Compute the feedforward voltage for a setpoint.
    ///
    /// ```text
    /// v_out = ks × sign(v) + kg + kv × v + ka × a
    /// ```
    ///
    /// At exactly zero commanded velocity the static term vanishes: the
    /// mechanism is not overcoming friction to move. Non-finite setpoints
    /// propagate through the arithmetic unchanged.
    #[inline]
    pub fn calculate(&self, velocity: Velocity<D>, acceleration: Acceleration<D>) -> Voltage {
        self.ks * velocity.sign() + self.kg + self.kv * velocity + self.ka * acceleration
    }

    /// Steady-state feedforward: [`calculate`](Self::calculate) with zero
    /// acceleration.
    #[inline]
    pub fn calculate_static(&self, velocity: Velocity<D>) -> Voltage {
        self.calculate(velocity, Acceleration::new(0.0))
    }

    /// Voltage holding the load in place against gravity.
    #[inline]
    pub fn hold_voltage(&self) -> Voltage {
        self.kg
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
