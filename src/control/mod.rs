// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Main-Loop Control
//!
//! ## Modules
//!
//! - [`interpreter`] - Receive buffer to command flags and claw target.
//! - [`dispatch`] - Command flags to drivetrain outputs.

pub mod dispatch;
pub mod interpreter;

pub use dispatch::{Action, ActuationDispatch};
pub use interpreter::CommandInterpreter;
