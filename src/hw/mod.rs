// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! STM32F7 peripheral wrappers implementing the [`hal`](crate::hal) traits.

pub mod line;
pub mod link;
pub mod pins;
pub mod pwm;
pub mod timer;
pub mod usart;

pub use line::{ActiveLevel, Line};
pub use link::CommandLink;
pub use pins::BoardPins;
pub use pwm::DriveChannel;
pub use timer::BasicTimer;
pub use usart::Usart;
