// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Digital output line with a configurable active level.
//!
//! Used for the motor direction and enable lines, the claw servo and pulley stepper outputs, and
//! the status LED.

use stm32f7xx_hal::gpio::{self, Output, PushPull};

use crate::hal::OutputLine;

/// Whether the line is driven active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

/// Output line that remembers its active level.
pub struct Line<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Output<PushPull>>,
    active: ActiveLevel,
}

impl<const P: char, const N: u8> Line<P, N> {
    /// Wrap a pin, initializing it to logical OFF.
    pub fn new(pin: gpio::Pin<P, N, Output<PushPull>>, active: ActiveLevel) -> Self {
        let mut line = Self { pin, active };
        line.set(false);
        line
    }

    pub fn active_high(pin: gpio::Pin<P, N, Output<PushPull>>) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    pub fn active_low(pin: gpio::Pin<P, N, Output<PushPull>>) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    /// Drive the line logically ON (true) or OFF (false).
    pub fn set(&mut self, on: bool) {
        match (self.active, on) {
            (ActiveLevel::High, true) | (ActiveLevel::Low, false) => self.pin.set_high(),
            (ActiveLevel::High, false) | (ActiveLevel::Low, true) => self.pin.set_low(),
        }
    }
}

impl<const P: char, const N: u8> OutputLine for Line<P, N> {
    #[inline]
    fn set_high(&mut self) {
        Line::set(self, true);
    }

    #[inline]
    fn set_low(&mut self) {
        Line::set(self, false);
    }
}
