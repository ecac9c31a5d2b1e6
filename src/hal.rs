// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Narrow hardware seams driven by the core logic.
//!
//! The `hw` module implements these for the STM32F7 peripherals; tests implement them with
//! in-memory recorders.

/// Timer tick rate selected for the next period.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TickRate {
    /// Fast tick for short, precise periods.
    Fine,
    /// Slow tick for long idle periods.
    Coarse,
}

/// A single digital output.
pub trait OutputLine {
    fn set_high(&mut self);
    fn set_low(&mut self);

    #[inline]
    fn set(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// PWM duty sink for one drive motor. `u16::MAX` disables the output.
pub trait DutySink {
    fn set_duty(&mut self, duty: u16);
}

/// A one-shot timer whose next period is reprogrammed from inside its own interrupt.
pub trait PulseTimer {
    /// Halt the counter.
    fn stop(&mut self);

    /// Load the tick rate and the full period length in ticks: the next fire happens exactly
    /// `ticks` ticks after the counter restarts.
    fn reload(&mut self, rate: TickRate, ticks: u16);

    /// Clear the pending update flag.
    fn clear_pending(&mut self);

    /// Restart the counter.
    fn start(&mut self);
}

impl<T: OutputLine + ?Sized> OutputLine for &mut T {
    #[inline]
    fn set_high(&mut self) {
        (**self).set_high()
    }

    #[inline]
    fn set_low(&mut self) {
        (**self).set_low()
    }
}

/// Auto-reload value for an up-counter that raises its update event after `ticks` counts.
///
/// The counter runs from 0 through ARR inclusive, so ARR is one less than the period.
#[inline]
pub const fn auto_reload(ticks: u16) -> u16 {
    ticks.saturating_sub(1)
}
