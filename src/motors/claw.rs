// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Claw servo driven by a software pulse on a plain GPIO.
//!
//! The high phase runs on the fine tick and lasts the current [`ClawTarget`]; the low phase runs on
//! the coarse tick for a fixed time. The target is sampled only when a high phase starts, so a new
//! claw command takes effect on the next pulse and never stretches one in flight.

use crate::hal::{OutputLine, TickRate};
use crate::motors::pulse::{Interval, Phase, PulseShape};
use crate::shared::ClawTarget;

pub struct ClawServo<'a, PIN> {
    pin: PIN,
    target: &'a ClawTarget,
    low_ticks: u16,
}

impl<'a, PIN: OutputLine> ClawServo<'a, PIN> {
    pub fn new(mut pin: PIN, target: &'a ClawTarget, low_ticks: u16) -> Self {
        pin.set_low();
        Self {
            pin,
            target,
            low_ticks,
        }
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}

impl<'a, PIN: OutputLine> PulseShape for ClawServo<'a, PIN> {
    fn enter(&mut self, phase: Phase) -> Interval {
        match phase {
            Phase::High => {
                self.pin.set_high();
                Interval {
                    rate: TickRate::Fine,
                    ticks: self.target.ticks(),
                }
            }
            Phase::Low => {
                self.pin.set_low();
                Interval {
                    rate: TickRate::Coarse,
                    ticks: self.low_ticks,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CLAW_CLOSE_TICKS, CLAW_LOW_TICKS, CLAW_OPEN_TICKS};
    use crate::mock::{RecordingLine, RecordingTimer};
    use crate::motors::PulseGenerator;

    #[test]
    fn two_periods_alternate_high_and_low() {
        let target = ClawTarget::new(CLAW_OPEN_TICKS);
        let mut pin = RecordingLine::default();
        let mut timer = RecordingTimer::default();
        let mut pulse = PulseGenerator::new(ClawServo::new(&mut pin, &target, CLAW_LOW_TICKS));

        let mut trace = Vec::new();
        for _ in 0..4 {
            let (phase, interval) = pulse.fire(&mut timer);
            trace.push((phase, interval.ticks));
        }

        assert_eq!(
            trace,
            [
                (Phase::High, CLAW_OPEN_TICKS),
                (Phase::Low, CLAW_LOW_TICKS),
                (Phase::High, CLAW_OPEN_TICKS),
                (Phase::Low, CLAW_LOW_TICKS),
            ]
        );
        assert_eq!(
            timer.reloads[..2],
            [
                (TickRate::Fine, CLAW_OPEN_TICKS),
                (TickRate::Coarse, CLAW_LOW_TICKS),
            ]
        );
        assert!(timer.running);
        drop(pulse);
        assert!(!pin.high);
    }

    #[test]
    fn new_target_waits_for_next_rising_edge() {
        let target = ClawTarget::new(CLAW_OPEN_TICKS);
        let mut pin = RecordingLine::default();
        let mut timer = RecordingTimer::default();
        let mut pulse = PulseGenerator::new(ClawServo::new(&mut pin, &target, CLAW_LOW_TICKS));

        let (_, high) = pulse.fire(&mut timer);
        assert_eq!(high.ticks, CLAW_OPEN_TICKS);

        // Claw closed mid-pulse: the running high phase keeps its length.
        target.set_ticks(CLAW_CLOSE_TICKS);
        assert_eq!(timer.reloads.last(), Some(&(TickRate::Fine, CLAW_OPEN_TICKS)));

        let (phase, _) = pulse.fire(&mut timer);
        assert_eq!(phase, Phase::Low);
        let (phase, high) = pulse.fire(&mut timer);
        assert_eq!(phase, Phase::High);
        assert_eq!(high.ticks, CLAW_CLOSE_TICKS);
    }
}
