// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the rescue robot on the STM32F777 board.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiod, gpioe, Alternate, Output, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```rust
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub status_led: gpiod::PD10<Output<PushPull>>,
    pub link: LinkPins,
    pub console: ConsolePins,
    pub drive: DrivePins,
    pub claw: gpioe::PE4<Output<PushPull>>,
    pub pulley: PulleyPins,
}

/// USART1, command link from the controller's radio module
pub struct LinkPins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

/// USART2, debug console
pub struct ConsolePins {
    pub tx: gpiod::PD5<Alternate<7>>,
    pub rx: gpiod::PD6<Alternate<7>>,
}

/// Drivetrain control pins
pub struct DrivePins {
    pub pwm1: gpiod::PD12<Alternate<2>>, // TIM4_CH1
    pub pwm2: gpiod::PD13<Alternate<2>>, // TIM4_CH2
    pub dir1: gpiod::PD14<Output<PushPull>>,
    pub dir2: gpiod::PD15<Output<PushPull>>,
    pub enable: gpioa::PA4<Output<PushPull>>,
}

/// Pulley stepper driver pins
pub struct PulleyPins {
    pub step: gpioe::PE11<Output<PushPull>>,
    pub dir: gpioa::PA3<Output<PushPull>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpioa = gpioa.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            status_led: gpiod.pd10.into_push_pull_output(),

            link: LinkPins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },

            console: ConsolePins {
                tx: gpiod.pd5.into_alternate::<7>(),
                rx: gpiod.pd6.into_alternate::<7>(),
            },

            drive: DrivePins {
                pwm1: gpiod.pd12.into_alternate::<2>(),
                pwm2: gpiod.pd13.into_alternate::<2>(),
                dir1: gpiod.pd14.into_push_pull_output(),
                dir2: gpiod.pd15.into_push_pull_output(),
                enable: gpioa.pa4.into_push_pull_output(),
            },

            claw: gpioe.pe4.into_push_pull_output(),

            pulley: PulleyPins {
                step: gpioe.pe11.into_push_pull_output(),
                dir: gpioa.pa3.into_push_pull_output(),
            },
        }
    }
}
