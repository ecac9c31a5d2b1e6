// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Rescuebot Firmware
//!
//! Firmware for a small tele-operated rescue robot, written in Rust, targeting an STM32F777 MCU.
//! A handheld controller streams fixed-width command frames over a serial link; the robot drives
//! two DC motors, opens and closes a claw servo, and winds a pulley stepper.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`protocol`] | Wire format and the interrupt-side frame decoder |
//! | [`control`] | Main-loop command interpreter and actuation dispatch |
//! | [`motors`] | Drivetrain, claw servo and pulley stepper |
//! | [`shared`] | Lock-free state shared between the main loop and interrupts |
//! | [`hal`] | Traits the core logic drives |
//! | [`config`] | Board and timing constants |
//! | [`diag`] | Link diagnostics for the debug console |
//! | `hw` | STM32F7 wrappers (bare-metal target only) |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod diag;
pub mod hal;
pub mod motors;
pub mod protocol;
pub mod shared;

#[cfg(target_os = "none")]
pub mod hw;

#[cfg(test)]
mod mock;

pub use shared::SharedState;
