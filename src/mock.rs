//! In-memory implementations of the `hal` traits for unit tests.

use std::vec::Vec;

use crate::hal::{DutySink, OutputLine, PulseTimer, TickRate};

#[derive(Default)]
pub struct RecordingLine {
    pub high: bool,
    pub writes: usize,
}

impl OutputLine for RecordingLine {
    fn set_high(&mut self) {
        self.high = true;
        self.writes += 1;
    }

    fn set_low(&mut self) {
        self.high = false;
        self.writes += 1;
    }
}

#[derive(Default)]
pub struct RecordingDuty {
    pub duties: Vec<u16>,
}

impl DutySink for RecordingDuty {
    fn set_duty(&mut self, duty: u16) {
        self.duties.push(duty);
    }
}

/// Records every reload and checks the stop/reload/clear/start order.
#[derive(Default)]
pub struct RecordingTimer {
    pub reloads: Vec<(TickRate, u16)>,
    pub running: bool,
    pub pending_cleared: bool,
}

impl PulseTimer for RecordingTimer {
    fn stop(&mut self) {
        self.running = false;
        self.pending_cleared = false;
    }

    fn reload(&mut self, rate: TickRate, ticks: u16) {
        assert!(!self.running, "reloaded while running");
        self.reloads.push((rate, ticks));
    }

    fn clear_pending(&mut self) {
        self.pending_cleared = true;
    }

    fn start(&mut self) {
        assert!(self.pending_cleared, "started with a pending fire");
        self.running = true;
    }
}
