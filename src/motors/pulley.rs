// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pulley stepper: one step edge per timer fire while a step flag is set.
//!
//! Clockwise wins when both flags are set. With neither set the lines are left where they are and
//! the timer keeps ticking at the same rate. The step level is kept by the stepper itself, apart
//! from the generator phase: every active fire inverts it.

use crate::hal::{OutputLine, TickRate};
use crate::motors::drivetrain::Rotation;
use crate::motors::pulse::{Interval, Phase, PulseShape};
use crate::shared::CommandFlags;

pub struct PulleyStepper<'a, STEP, DIR> {
    step: STEP,
    dir: DIR,
    flags: &'a CommandFlags,
    half_period: u16,
    step_high: bool,
}

impl<'a, STEP: OutputLine, DIR: OutputLine> PulleyStepper<'a, STEP, DIR> {
    pub fn new(mut step: STEP, dir: DIR, flags: &'a CommandFlags, half_period: u16) -> Self {
        step.set_low();
        Self {
            step,
            dir,
            flags,
            half_period,
            step_high: false,
        }
    }

    /// Requested rotation, if any.
    pub fn requested(&self) -> Option<Rotation> {
        if self.flags.step_cw() {
            Some(Rotation::Cw)
        } else if self.flags.step_ccw() {
            Some(Rotation::Ccw)
        } else {
            None
        }
    }

    pub fn free(self) -> (STEP, DIR) {
        (self.step, self.dir)
    }
}

impl<'a, STEP: OutputLine, DIR: OutputLine> PulseShape for PulleyStepper<'a, STEP, DIR> {
    fn enter(&mut self, _phase: Phase) -> Interval {
        if let Some(rotation) = self.requested() {
            // Direction line low for clockwise.
            self.dir.set(rotation == Rotation::Ccw);
            self.step_high = !self.step_high;
            self.step.set(self.step_high);
        }
        Interval {
            rate: TickRate::Fine,
            ticks: self.half_period,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{RecordingLine, RecordingTimer};
    use crate::motors::PulseGenerator;
    use crate::shared::CommandSet;

    #[test]
    fn idle_pulley_keeps_lines_and_rate() {
        let flags = CommandFlags::new();
        let mut step = RecordingLine::default();
        let mut dir = RecordingLine::default();
        let mut timer = RecordingTimer::default();
        {
            let mut pulse =
                PulseGenerator::new(PulleyStepper::new(&mut step, &mut dir, &flags, 30_000));
            pulse.fire(&mut timer);
            pulse.fire(&mut timer);
        }

        // Only the initial low from construction.
        assert_eq!(step.writes, 1);
        assert_eq!(dir.writes, 0);
        assert_eq!(timer.reloads, [(TickRate::Fine, 30_000), (TickRate::Fine, 30_000)]);
    }

    #[test]
    fn steps_follow_phase_and_direction() {
        let flags = CommandFlags::new();
        let mut step = RecordingLine::default();
        let mut dir = RecordingLine::default();
        let mut timer = RecordingTimer::default();

        flags.publish(&CommandSet {
            step_ccw: true,
            ..CommandSet::default()
        });
        let mut pulse = PulseGenerator::new(PulleyStepper::new(&mut step, &mut dir, &flags, 500));
        assert_eq!(pulse.shape().requested(), Some(Rotation::Ccw));

        pulse.fire(&mut timer);
        let (step_line, dir_line) = pulse.free().free();
        assert!(step_line.high);
        assert!(dir_line.high);
    }

    #[test]
    fn clockwise_wins_and_pause_halts() {
        let flags = CommandFlags::new();
        flags.publish(&CommandSet {
            step_cw: true,
            step_ccw: true,
            ..CommandSet::default()
        });

        let mut step = RecordingLine::default();
        let mut dir = RecordingLine::default();
        let mut timer = RecordingTimer::default();
        let mut pulse = PulseGenerator::new(PulleyStepper::new(&mut step, &mut dir, &flags, 500));
        assert_eq!(pulse.shape().requested(), Some(Rotation::Cw));
        pulse.fire(&mut timer);

        flags.clear_stepping();
        assert_eq!(pulse.shape().requested(), None);
        pulse.fire(&mut timer);

        drop(pulse);
        // High from the single step, then left alone.
        assert!(step.high);
        assert!(!dir.high);
    }

    #[test]
    fn resumed_stepping_emits_edge_on_first_fire() {
        let flags = CommandFlags::new();
        let stepping = CommandSet {
            step_cw: true,
            ..CommandSet::default()
        };
        let mut step = RecordingLine::default();
        let mut dir = RecordingLine::default();
        let mut timer = RecordingTimer::default();
        let mut pulse = PulseGenerator::new(PulleyStepper::new(&mut step, &mut dir, &flags, 500));

        flags.publish(&stepping);
        pulse.fire(&mut timer);
        assert!(pulse.shape().step_high);

        // Idle fire: generator phase advances, step line does not.
        flags.clear_stepping();
        pulse.fire(&mut timer);
        assert!(pulse.shape().step_high);

        flags.publish(&stepping);
        pulse.fire(&mut timer);
        assert!(!pulse.shape().step_high);
        pulse.fire(&mut timer);
        assert!(pulse.shape().step_high);

        drop(pulse);
        assert!(step.high);
        // Construction low plus three edges.
        assert_eq!(step.writes, 4);
    }
}
