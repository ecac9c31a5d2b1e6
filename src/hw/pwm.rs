// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Drive motor PWM on TIM4 channels 1 and 2.
//!
//! The timer runs with a full 16-bit period so the compare value is the duty as sent by the
//! dispatcher. Each channel handle writes only its own compare register.

use stm32f7xx_hal::pac;

use crate::config::{DRIVE_PWM_PERIOD, DUTY_COAST};
use crate::hal::DutySink;

/// One TIM4 output-compare channel.
pub struct DriveChannel<const C: u8> {
    _private: (),
}

/// Configure TIM4 CH1/CH2 for PWM mode 1 and return the two channel handles, both coasting.
///
/// The channel pins must already be in their TIM4 alternate function.
pub fn tim4(tim4: pac::TIM4) -> (DriveChannel<1>, DriveChannel<2>) {
    let rcc = unsafe { &*pac::RCC::ptr() };
    rcc.apb1enr.modify(|_, w| w.tim4en().set_bit());

    let tim = tim4;

    // Disable counter while configuring
    tim.cr1.modify(|_, w| w.cen().clear_bit());

    tim.psc.write(|w| unsafe { w.bits(0) });
    tim.arr.write(|w| unsafe { w.bits(DRIVE_PWM_PERIOD as u32) });

    // OC1M = OC2M = 0b110 (PWM mode 1), OC1PE = OC2PE = 1
    tim.ccmr1_output()
        .write(|w| unsafe { w.bits((0b110 << 4) | (1 << 3) | (0b110 << 12) | (1 << 11)) });

    tim.ccr1.write(|w| unsafe { w.bits(DUTY_COAST as u32) });
    tim.ccr2.write(|w| unsafe { w.bits(DUTY_COAST as u32) });

    tim.ccer.modify(|_, w| w.cc1e().set_bit().cc2e().set_bit());

    // Preload ARR, latch everything, start
    tim.cr1.modify(|_, w| w.arpe().set_bit());
    tim.egr.write(|w| w.ug().set_bit());
    tim.cr1.modify(|_, w| w.cen().set_bit());

    (DriveChannel { _private: () }, DriveChannel { _private: () })
}

impl DutySink for DriveChannel<1> {
    #[inline]
    fn set_duty(&mut self, duty: u16) {
        let tim = unsafe { &*pac::TIM4::ptr() };
        tim.ccr1.write(|w| unsafe { w.bits(duty as u32) });
    }
}

impl DutySink for DriveChannel<2> {
    #[inline]
    fn set_duty(&mut self, duty: u16) {
        let tim = unsafe { &*pac::TIM4::ptr() };
        tim.ccr2.write(|w| unsafe { w.bits(duty as u32) });
    }
}
