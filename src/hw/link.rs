// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Command link receiver on USART1.
//!
//! The HAL configures the port (115200 8N1); receiving is interrupt driven. The handler calls
//! [`CommandLink::read`] once per RXNE interrupt and feeds the byte to the frame decoder.

use stm32f7xx_hal::{
    gpio::{gpioa, Alternate},
    pac,
    prelude::*,
    rcc::Clocks,
    serial::{Config, Rx, Serial},
};

use crate::config::LINK_BAUD;

pub struct CommandLink {
    _rx: Rx<pac::USART1>,
}

impl CommandLink {
    /// Configure USART1 and enable its receive interrupt. The NVIC line is left masked.
    pub fn usart1(
        usart1: pac::USART1,
        tx: gpioa::PA9<Alternate<7>>,
        rx: gpioa::PA10<Alternate<7>>,
        clocks: &Clocks,
    ) -> Self {
        let cfg = Config {
            baud_rate: LINK_BAUD.bps(),
            ..Default::default()
        };
        let serial = Serial::new(usart1, (tx, rx), clocks, cfg);
        // Nothing is ever sent back to the controller.
        let (_tx, rx) = serial.split();

        let usart = unsafe { &*pac::USART1::ptr() };
        usart.cr1.modify(|_, w| w.rxneie().set_bit());

        Self { _rx: rx }
    }

    /// Take the received byte, if any. Clears a pending overrun so RXNE keeps firing.
    pub fn read(&mut self) -> Option<u8> {
        let usart = unsafe { &*pac::USART1::ptr() };
        let isr = usart.isr.read();

        if isr.ore().bit_is_set() {
            // ORECF
            usart.icr.write(|w| unsafe { w.bits(1 << 3) });
        }

        if isr.rxne().bit_is_set() {
            Some(usart.rdr.read().rdr().bits() as u8)
        } else {
            None
        }
    }
}
