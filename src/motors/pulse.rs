// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Reprogrammable periodic pulse generator.
//!
//! A [`PulseGenerator`] is driven from a timer interrupt. Each fire flips the phase, lets the
//! [`PulseShape`] drive its outputs for the new phase and pick the phase length, then reprograms the
//! timer before returning. The timer never free-runs on a stale period.

use crate::hal::{PulseTimer, TickRate};

/// Output level of the generated wave.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    High,
    Low,
}

impl Phase {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Phase::High => Phase::Low,
            Phase::Low => Phase::High,
        }
    }
}

/// Length of one phase.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Interval {
    pub rate: TickRate,
    pub ticks: u16,
}

/// Output action and timing of one pulse train.
pub trait PulseShape {
    /// Drive the outputs for `phase` and return how long it lasts.
    fn enter(&mut self, phase: Phase) -> Interval;
}

pub struct PulseGenerator<S> {
    shape: S,
    phase: Phase,
}

impl<S: PulseShape> PulseGenerator<S> {
    /// Start in [`Phase::Low`]; the first fire enters [`Phase::High`].
    pub fn new(shape: S) -> Self {
        Self {
            shape,
            phase: Phase::Low,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn shape(&self) -> &S {
        &self.shape
    }

    /// Handle one timer fire. Returns the phase just entered and its length.
    pub fn fire<T: PulseTimer>(&mut self, timer: &mut T) -> (Phase, Interval) {
        timer.stop();

        let next = self.phase.toggled();
        let interval = self.shape.enter(next);
        self.phase = next;

        timer.reload(interval.rate, interval.ticks);
        timer.clear_pending();
        timer.start();

        (next, interval)
    }

    pub fn free(self) -> S {
        self.shape
    }
}
