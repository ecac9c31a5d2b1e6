// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Two-motor skid drivetrain.
//!
//! Each motor has a direction line and a PWM duty input; both share one bridge-enable line. The
//! duty sink is written on every [`refresh`](Drivetrain::refresh) so the PWM peripheral always
//! holds the latest value.

use crate::config::DUTY_COAST;
use crate::hal::{DutySink, OutputLine};

/// Shaft rotation as seen from the motor face.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Rotation {
    Cw,
    Ccw,
}

/// Directions and shared duty for both motors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DriveSetpoint {
    pub motor1: Rotation,
    pub motor2: Rotation,
    pub duty: u16,
}

pub struct Drivetrain<D1, D2, EN, P1, P2> {
    dir1: D1,
    dir2: D2,
    enable: EN,
    pwm1: P1,
    pwm2: P2,
    duty: u16,
}

impl<D1, D2, EN, P1, P2> Drivetrain<D1, D2, EN, P1, P2>
where
    D1: OutputLine,
    D2: OutputLine,
    EN: OutputLine,
    P1: DutySink,
    P2: DutySink,
{
    /// Take ownership of the outputs and leave both motors coasting.
    pub fn new(dir1: D1, dir2: D2, enable: EN, pwm1: P1, pwm2: P2) -> Self {
        let mut drive = Self {
            dir1,
            dir2,
            enable,
            pwm1,
            pwm2,
            duty: DUTY_COAST,
        };
        drive.coast();
        drive.refresh();
        drive
    }

    /// Motor 1's direction line is high for clockwise; motor 2 is mounted mirrored, so its line is
    /// high for counter-clockwise.
    pub fn run(&mut self, setpoint: DriveSetpoint) {
        self.dir1.set(setpoint.motor1 == Rotation::Cw);
        self.dir2.set(setpoint.motor2 == Rotation::Ccw);
        self.enable.set_high();
        self.duty = setpoint.duty;
    }

    /// Disable the bridge and release both motors. Direction lines are untouched.
    pub fn coast(&mut self) {
        self.enable.set_low();
        self.duty = DUTY_COAST;
    }

    /// Push the current duty to both PWM channels.
    pub fn refresh(&mut self) {
        self.pwm1.set_duty(self.duty);
        self.pwm2.set_duty(self.duty);
    }

    #[inline]
    pub fn duty(&self) -> u16 {
        self.duty
    }

    pub fn free(self) -> (D1, D2, EN, P1, P2) {
        (self.dir1, self.dir2, self.enable, self.pwm1, self.pwm2)
    }
}
