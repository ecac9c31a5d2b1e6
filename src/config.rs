// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board and timing constants for the rescue robot.
//!
//! Timer tick lengths assume the default 16 MHz HSI clock that `cfgr.freeze()` leaves in place, so
//! APB1 timers count at 16 MHz before prescaling.

/// Command link baud rate (8N1).
pub const LINK_BAUD: u32 = 115_200;

/// Debug console baud rate.
pub const CONSOLE_BAUD: u32 = 115_200;

// Drive duties. The driver inputs are active-low, so the maximum duty disables the output stage.
pub const DUTY_STRAIGHT: u16 = 5_000;
pub const DUTY_PIVOT: u16 = 25_000;
pub const DUTY_COAST: u16 = u16::MAX;

// Claw servo timing, in ticks of the prescale selected for each phase.
pub const CLAW_OPEN_TICKS: u16 = 1_200;
pub const CLAW_CLOSE_TICKS: u16 = 3_370;
pub const CLAW_LOW_TICKS: u16 = 3_073;

/// Safe actuation range for the claw high-time.
pub const CLAW_MIN_TICKS: u16 = CLAW_OPEN_TICKS;
pub const CLAW_MAX_TICKS: u16 = CLAW_CLOSE_TICKS;

/// Pulley stepper half-period (one step edge per fire), in fine ticks.
pub const STEP_HALF_PERIOD_TICKS: u16 = 30_000;

/// Timer clock feeding TIM6/TIM7.
pub const TIMER_CLOCK_HZ: u32 = 16_000_000;

/// PSC value for the fine tick (1 µs).
pub const FINE_PRESCALER: u16 = (TIMER_CLOCK_HZ / 1_000_000 - 1) as u16;

/// PSC value for the coarse tick (8 µs).
pub const COARSE_PRESCALER: u16 = (TIMER_CLOCK_HZ / 125_000 - 1) as u16;

/// Drive PWM auto-reload. A full 16-bit period keeps the duty scale identical to the wire values.
pub const DRIVE_PWM_PERIOD: u16 = u16::MAX;
