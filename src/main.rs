#![cfg_attr(target_os = "none", no_std, no_main)]

#[cfg(target_os = "none")]
mod firmware {
    use core::cell::RefCell;

    use cortex_m::interrupt::{self as irq, Mutex};
    use cortex_m::peripheral::NVIC;
    use cortex_m_rt::entry;
    use panic_halt as _;

    use hal::{
        pac::{self, interrupt},
        prelude::*,
    };
    use stm32f7xx_hal as hal;

    use rescuebot::config::{CLAW_LOW_TICKS, LINK_BAUD, STEP_HALF_PERIOD_TICKS};
    use rescuebot::control::{ActuationDispatch, CommandInterpreter};
    use rescuebot::diag::LinkMonitor;
    use rescuebot::hw::{pwm, BasicTimer, BoardPins, CommandLink, Line};
    use rescuebot::motors::{ClawServo, Drivetrain, PulleyStepper, PulseGenerator};
    use rescuebot::protocol::FrameDecoder;
    use rescuebot::SharedState;

    #[cfg(feature = "link-log")]
    use core::fmt::Write as _;
    #[cfg(feature = "link-log")]
    use hal::serial::{Config, Serial};
    #[cfg(feature = "link-log")]
    use rescuebot::config::CONSOLE_BAUD;
    #[cfg(feature = "link-log")]
    use rescuebot::hw::Usart;

    static SHARED: SharedState = SharedState::new();

    type ClawPulse = PulseGenerator<ClawServo<'static, Line<'E', 4>>>;
    type PulleyPulse = PulseGenerator<PulleyStepper<'static, Line<'E', 11>, Line<'A', 3>>>;

    // Filled by `main` before the NVIC lines are unmasked; each handler takes its part on first entry.
    static LINK: Mutex<RefCell<Option<CommandLink>>> = Mutex::new(RefCell::new(None));
    static CLAW: Mutex<RefCell<Option<(ClawPulse, BasicTimer<pac::TIM6>)>>> =
        Mutex::new(RefCell::new(None));
    static PULLEY: Mutex<RefCell<Option<(PulleyPulse, BasicTimer<pac::TIM7>)>>> =
        Mutex::new(RefCell::new(None));

    macro_rules! log {
        ($console:ident, $($arg:tt)*) => {
            #[cfg(feature = "link-log")]
            {
                let _ = write!($console, $($arg)*);
                $console.write_str("\r\n");
            }
        };
    }

    #[entry]
    fn main() -> ! {
        // Peripherals
        let dp = pac::Peripherals::take().unwrap();

        // Clocks
        let rcc = dp.RCC.constrain();
        let clocks = rcc.cfgr.freeze();

        let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOE);

        let mut status = Line::active_low(pins.status_led);
        status.set(true);

        // USART2 (DBG)
        #[cfg(feature = "link-log")]
        let mut console = {
            let cfg = Config {
                baud_rate: CONSOLE_BAUD.bps(),
                ..Default::default()
            };
            Usart::new(Serial::new(
                dp.USART2,
                (pins.console.tx, pins.console.rx),
                &clocks,
                cfg,
            ))
        };

        // Drivetrain on TIM4
        let (pwm1, pwm2) = pwm::tim4(dp.TIM4);
        let mut drive = Drivetrain::new(
            Line::active_high(pins.drive.dir1),
            Line::active_high(pins.drive.dir2),
            Line::active_high(pins.drive.enable),
            pwm1,
            pwm2,
        );

        // Claw servo on TIM6, pulley stepper on TIM7
        let claw = PulseGenerator::new(ClawServo::new(
            Line::active_high(pins.claw),
            &SHARED.claw,
            CLAW_LOW_TICKS,
        ));
        let claw_timer = BasicTimer::tim6(dp.TIM6, CLAW_LOW_TICKS);

        let pulley = PulseGenerator::new(PulleyStepper::new(
            Line::active_high(pins.pulley.step),
            Line::active_high(pins.pulley.dir),
            &SHARED.flags,
            STEP_HALF_PERIOD_TICKS,
        ));
        let pulley_timer = BasicTimer::tim7(dp.TIM7, STEP_HALF_PERIOD_TICKS);

        // USART1 (command link)
        let link = CommandLink::usart1(dp.USART1, pins.link.tx, pins.link.rx, &clocks);

        irq::free(|cs| {
            *LINK.borrow(cs).borrow_mut() = Some(link);
            *CLAW.borrow(cs).borrow_mut() = Some((claw, claw_timer));
            *PULLEY.borrow(cs).borrow_mut() = Some((pulley, pulley_timer));
        });

        unsafe {
            NVIC::unmask(pac::Interrupt::USART1);
            NVIC::unmask(pac::Interrupt::TIM6_DAC);
            NVIC::unmask(pac::Interrupt::TIM7);
        }

        log!(console, "rescuebot: listening on USART1 at {} baud", LINK_BAUD);

        let interpreter = CommandInterpreter::new(&SHARED);
        let dispatch = ActuationDispatch::new(&SHARED.flags);
        let mut monitor = LinkMonitor::new();
        let mut reset_seen = false;

        loop {
            let set = interpreter.step();
            dispatch.step(&set, &mut drive);

            if let Some(link) = monitor.poll(&SHARED.link) {
                status.set(link.synchronized);
                log!(console, "{}", link);
            }

            if set.reset && !reset_seen {
                log!(console, "reset requested");
            }
            reset_seen = set.reset;
        }
    }

    #[interrupt]
    fn USART1() {
        static mut RX: Option<(CommandLink, FrameDecoder<'static>)> = None;

        if RX.is_none() {
            *RX = irq::free(|cs| LINK.borrow(cs).take())
                .map(|link| (link, FrameDecoder::new(&SHARED.rx, &SHARED.link)));
        }

        if let Some((link, decoder)) = RX.as_mut() {
            if let Some(raw) = link.read() {
                decoder.push(raw);
            }
        }
    }

    #[interrupt]
    fn TIM6_DAC() {
        static mut PULSE: Option<(ClawPulse, BasicTimer<pac::TIM6>)> = None;

        if PULSE.is_none() {
            *PULSE = irq::free(|cs| CLAW.borrow(cs).take());
        }

        if let Some((generator, timer)) = PULSE.as_mut() {
            generator.fire(timer);
        }
    }

    #[interrupt]
    fn TIM7() {
        static mut PULSE: Option<(PulleyPulse, BasicTimer<pac::TIM7>)> = None;

        if PULSE.is_none() {
            *PULSE = irq::free(|cs| PULLEY.borrow(cs).take());
        }

        if let Some((generator, timer)) = PULSE.as_mut() {
            generator.fire(timer);
        }
    }
}

// Host builds carry only the library; the entry point exists on the bare-metal target.
#[cfg(not(target_os = "none"))]
fn main() {}
