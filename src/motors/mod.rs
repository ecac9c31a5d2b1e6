// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Actuator Abstractions
//!
//! This module contains the actuators the main loop and timer handlers drive through the traits in
//! [`hal`](crate::hal).
//!
//! ## Modules
//!
//! - [`pulse`] - Timer-driven pulse generator shared by the claw and the pulley.
//! - [`claw`] - Claw servo pulse shape.
//! - [`pulley`] - Pulley stepper pulse shape.
//! - [`drivetrain`] - Two DC motors with direction, enable and PWM duty.

pub mod claw;
pub mod drivetrain;
pub mod pulley;
pub mod pulse;

pub use claw::ClawServo;
pub use drivetrain::{DriveSetpoint, Drivetrain, Rotation};
pub use pulley::PulleyStepper;
pub use pulse::{Interval, Phase, PulseGenerator, PulseShape};
