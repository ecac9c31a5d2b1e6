// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Actuation dispatch: command flags to drivetrain outputs.
//!
//! Evaluated once per main-loop iteration in a fixed priority order; the first flag set wins and
//! nothing after it is looked at:
//!
//! `center_forward > center_backward > pivot_left > pivot_right > stop > pause`

use crate::config::{DUTY_PIVOT, DUTY_STRAIGHT};
use crate::hal::{DutySink, OutputLine};
use crate::motors::drivetrain::{Drivetrain, DriveSetpoint, Rotation};
use crate::shared::{CommandFlags, CommandSet};

/// Outcome of one dispatch evaluation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Enable both motors with these directions and duty.
    Drive(DriveSetpoint),
    /// Disable the bridge and let both motors coast. Directions are left as they were.
    Stop,
    /// Halt the pulley stepper.
    Pause,
    /// No flag set; outputs keep their previous values.
    Hold,
}

/// Map a command set onto an action.
pub fn select(set: &CommandSet) -> Action {
    use Rotation::{Ccw, Cw};

    let drive = |motor1, motor2, duty| {
        Action::Drive(DriveSetpoint {
            motor1,
            motor2,
            duty,
        })
    };

    if set.center_forward {
        drive(Ccw, Ccw, DUTY_STRAIGHT)
    } else if set.center_backward {
        drive(Cw, Cw, DUTY_STRAIGHT)
    } else if set.pivot_left {
        drive(Cw, Ccw, DUTY_PIVOT)
    } else if set.pivot_right {
        drive(Ccw, Cw, DUTY_PIVOT)
    } else if set.stop {
        Action::Stop
    } else if set.pause {
        Action::Pause
    } else {
        Action::Hold
    }
}

pub struct ActuationDispatch<'a> {
    flags: &'a CommandFlags,
}

impl<'a> ActuationDispatch<'a> {
    pub fn new(flags: &'a CommandFlags) -> Self {
        Self { flags }
    }

    /// Select an action for `set` and apply it to the drivetrain.
    pub fn step<D1, D2, EN, P1, P2>(
        &self,
        set: &CommandSet,
        drive: &mut Drivetrain<D1, D2, EN, P1, P2>,
    ) -> Action
    where
        D1: OutputLine,
        D2: OutputLine,
        EN: OutputLine,
        P1: DutySink,
        P2: DutySink,
    {
        let action = select(set);
        match action {
            Action::Drive(setpoint) => drive.run(setpoint),
            Action::Stop => drive.coast(),
            Action::Pause => self.flags.clear_stepping(),
            Action::Hold => {}
        }
        drive.refresh();
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DUTY_COAST;
    use crate::mock::{RecordingDuty, RecordingLine};

    #[test]
    fn forward_beats_stop() {
        let set = CommandSet {
            center_forward: true,
            stop: true,
            ..CommandSet::default()
        };
        assert_eq!(
            select(&set),
            Action::Drive(DriveSetpoint {
                motor1: Rotation::Ccw,
                motor2: Rotation::Ccw,
                duty: DUTY_STRAIGHT,
            })
        );
    }

    #[test]
    fn priority_order() {
        let mut set = CommandSet {
            center_backward: true,
            pivot_left: true,
            pivot_right: true,
            stop: true,
            pause: true,
            ..CommandSet::default()
        };
        assert!(matches!(
            select(&set),
            Action::Drive(DriveSetpoint {
                motor1: Rotation::Cw,
                motor2: Rotation::Cw,
                ..
            })
        ));

        set.center_backward = false;
        assert!(matches!(
            select(&set),
            Action::Drive(DriveSetpoint {
                motor1: Rotation::Cw,
                motor2: Rotation::Ccw,
                duty: DUTY_PIVOT,
            })
        ));

        set.pivot_left = false;
        assert!(matches!(
            select(&set),
            Action::Drive(DriveSetpoint {
                motor1: Rotation::Ccw,
                motor2: Rotation::Cw,
                duty: DUTY_PIVOT,
            })
        ));

        set.pivot_right = false;
        assert_eq!(select(&set), Action::Stop);

        set.stop = false;
        assert_eq!(select(&set), Action::Pause);

        set.pause = false;
        assert_eq!(select(&set), Action::Hold);
    }

    #[test]
    fn stepper_and_claw_flags_do_not_drive() {
        let set = CommandSet {
            step_cw: true,
            claw_close: true,
            reset: true,
            ..CommandSet::default()
        };
        assert_eq!(select(&set), Action::Hold);
    }

    #[test]
    fn pause_clears_stepper_flags_and_holds_drive() {
        let flags = CommandFlags::new();
        let set = CommandSet {
            pause: true,
            step_cw: true,
            ..CommandSet::default()
        };
        flags.publish(&set);

        let mut drive = Drivetrain::new(
            RecordingLine::default(),
            RecordingLine::default(),
            RecordingLine::default(),
            RecordingDuty::default(),
            RecordingDuty::default(),
        );
        let action = ActuationDispatch::new(&flags).step(&set, &mut drive);

        assert_eq!(action, Action::Pause);
        assert!(!flags.step_cw());
        assert_eq!(drive.duty(), DUTY_COAST);
        let (_, _, _, pwm1, _) = drive.free();
        assert_eq!(pwm1.duties, [DUTY_COAST, DUTY_COAST]);
    }

    #[test]
    fn stop_after_drive_coasts() {
        let flags = CommandFlags::new();
        let dispatch = ActuationDispatch::new(&flags);
        let mut drive = Drivetrain::new(
            RecordingLine::default(),
            RecordingLine::default(),
            RecordingLine::default(),
            RecordingDuty::default(),
            RecordingDuty::default(),
        );

        let forward = CommandSet {
            center_forward: true,
            ..CommandSet::default()
        };
        dispatch.step(&forward, &mut drive);
        assert_eq!(drive.duty(), DUTY_STRAIGHT);

        dispatch.step(&CommandSet::default(), &mut drive);
        assert_eq!(drive.duty(), DUTY_STRAIGHT);

        let stop = CommandSet {
            stop: true,
            ..CommandSet::default()
        };
        assert_eq!(dispatch.step(&stop, &mut drive), Action::Stop);
        let (_, _, enable, pwm1, pwm2) = drive.free();
        assert!(!enable.high);
        assert_eq!(pwm1.duties, [DUTY_COAST, DUTY_STRAIGHT, DUTY_STRAIGHT, DUTY_COAST]);
        assert_eq!(pwm2.duties.len(), 4);
    }
}
