//! # Lift Feedforward Library
//!
//! Closed-form voltage feedforward for a gravity-loaded axis driven by a
//! DC motor. Given a velocity and acceleration setpoint, the model returns
//! the voltage expected to produce that motion, to be summed with a
//! feedback term by the caller each control cycle.
//!
//! The evaluation path is a pure function over immutable gains: no
//! allocation, no I/O, no suspension points. It is safe to call from a
//! real-time loop at high frequency and from any number of threads
//! concurrently.
//!
//! Characterization data enters through a TOML file loaded once at setup
//! time ([`config`]); the control path never touches the filesystem.

pub mod config;
pub mod elevator;
