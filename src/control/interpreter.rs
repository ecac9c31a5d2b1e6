// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Command interpreter: projects the receive buffer onto the command flags.
//!
//! Runs once per main-loop iteration. Each flag is read from its fixed slot with no validation; any
//! non-zero byte is true. The claw target follows the claw flags, close taking precedence.

use crate::config::{CLAW_CLOSE_TICKS, CLAW_OPEN_TICKS};
use crate::protocol::Slot;
use crate::shared::{CommandSet, RxBuffer, SharedState};

/// Read every flag slot out of the receive buffer. Only indices 2, 4, ..., 22 are consulted.
pub fn project(rx: &RxBuffer) -> CommandSet {
    let mut set = CommandSet::default();
    for slot in Slot::ALL {
        slot.set(&mut set, rx.load(slot.index()) != 0);
    }
    set
}

/// Claw high-time requested by `set`, if any.
pub fn claw_ticks(set: &CommandSet) -> Option<u16> {
    if set.claw_close {
        Some(CLAW_CLOSE_TICKS)
    } else if set.claw_open {
        Some(CLAW_OPEN_TICKS)
    } else {
        None
    }
}

pub struct CommandInterpreter<'a> {
    shared: &'a SharedState,
}

impl<'a> CommandInterpreter<'a> {
    pub fn new(shared: &'a SharedState) -> Self {
        Self { shared }
    }

    /// Publish the flags of the frame currently in the buffer and update the claw target.
    pub fn step(&self) -> CommandSet {
        let set = project(&self.shared.rx);
        self.shared.flags.publish(&set);
        if let Some(ticks) = claw_ticks(&set) {
            self.shared.claw.set_ticks(ticks);
        }
        set
    }
}
