// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Basic timers (TIM6/TIM7) as reprogrammable one-period timers.
//!
//! Each update interrupt handler reloads the prescaler and auto-reload for the next period. `URS`
//! is set so the forced update that latches a new prescaler does not raise another interrupt.

use core::ops::Deref;

use stm32f7xx_hal::pac;

use crate::config::{COARSE_PRESCALER, FINE_PRESCALER};
use crate::hal::{auto_reload, PulseTimer, TickRate};

pub struct BasicTimer<TIM> {
    tim: TIM,
}

impl BasicTimer<pac::TIM6> {
    /// Enable TIM6 and arm it for a first fire after `ticks` fine ticks.
    pub fn tim6(tim6: pac::TIM6, ticks: u16) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim6en().set_bit());

        let mut timer = Self { tim: tim6 };
        timer.init(ticks);
        timer
    }
}

impl BasicTimer<pac::TIM7> {
    /// Enable TIM7 and arm it for a first fire after `ticks` fine ticks.
    pub fn tim7(tim7: pac::TIM7, ticks: u16) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim7en().set_bit());

        let mut timer = Self { tim: tim7 };
        timer.init(ticks);
        timer
    }
}

impl<TIM> BasicTimer<TIM>
where
    TIM: Deref<Target = pac::tim6::RegisterBlock>,
{
    fn init(&mut self, ticks: u16) {
        // Disable counter while configuring
        self.tim.cr1.modify(|_, w| w.cen().clear_bit());

        // Update events from overflow only
        self.tim.cr1.modify(|_, w| w.urs().set_bit().arpe().clear_bit());

        self.reload(TickRate::Fine, ticks);
        self.clear_pending();

        // Update interrupt
        self.tim.dier.modify(|_, w| w.uie().set_bit());

        self.start();
    }
}

impl<TIM> PulseTimer for BasicTimer<TIM>
where
    TIM: Deref<Target = pac::tim6::RegisterBlock>,
{
    #[inline]
    fn stop(&mut self) {
        self.tim.cr1.modify(|_, w| w.cen().clear_bit());
    }

    fn reload(&mut self, rate: TickRate, ticks: u16) {
        let psc = match rate {
            TickRate::Fine => FINE_PRESCALER,
            TickRate::Coarse => COARSE_PRESCALER,
        };
        self.tim.psc.write(|w| unsafe { w.bits(psc as u32) });
        self.tim.arr.write(|w| unsafe { w.bits(auto_reload(ticks) as u32) });
        self.tim.cnt.write(|w| unsafe { w.bits(0) });

        // Latch the new prescaler now rather than at the next overflow.
        self.tim.egr.write(|w| w.ug().set_bit());
    }

    #[inline]
    fn clear_pending(&mut self) {
        self.tim.sr.modify(|_, w| w.uif().clear_bit());
    }

    #[inline]
    fn start(&mut self) {
        self.tim.cr1.modify(|_, w| w.cen().set_bit());
    }
}
