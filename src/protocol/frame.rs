// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Frame layout and byte encoding.

use crate::shared::CommandSet;

/// Frame capacity, marker included.
pub const FRAME_LEN: usize = 32;

/// Synchronization marker, after decoding.
pub const MARKER: u8 = b'y';

/// Buffer index holding the low byte of each command flag.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Slot {
    CenterForward = 2,
    CenterBackward = 4,
    PivotLeft = 6,
    PivotRight = 8,
    Stop = 10,
    StepCcw = 12,
    StepCw = 14,
    ClawOpen = 16,
    ClawClose = 18,
    Pause = 20,
    Reset = 22,
}

impl Slot {
    pub const ALL: [Slot; 11] = [
        Slot::CenterForward,
        Slot::CenterBackward,
        Slot::PivotLeft,
        Slot::PivotRight,
        Slot::Stop,
        Slot::StepCcw,
        Slot::StepCw,
        Slot::ClawOpen,
        Slot::ClawClose,
        Slot::Pause,
        Slot::Reset,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Read this slot's flag out of a command set.
    pub fn get(self, set: &CommandSet) -> bool {
        match self {
            Slot::CenterForward => set.center_forward,
            Slot::CenterBackward => set.center_backward,
            Slot::PivotLeft => set.pivot_left,
            Slot::PivotRight => set.pivot_right,
            Slot::Stop => set.stop,
            Slot::StepCcw => set.step_ccw,
            Slot::StepCw => set.step_cw,
            Slot::ClawOpen => set.claw_open,
            Slot::ClawClose => set.claw_close,
            Slot::Pause => set.pause,
            Slot::Reset => set.reset,
        }
    }

    /// Write this slot's flag into a command set.
    pub fn set(self, set: &mut CommandSet, value: bool) {
        let field = match self {
            Slot::CenterForward => &mut set.center_forward,
            Slot::CenterBackward => &mut set.center_backward,
            Slot::PivotLeft => &mut set.pivot_left,
            Slot::PivotRight => &mut set.pivot_right,
            Slot::Stop => &mut set.stop,
            Slot::StepCcw => &mut set.step_ccw,
            Slot::StepCw => &mut set.step_cw,
            Slot::ClawOpen => &mut set.claw_open,
            Slot::ClawClose => &mut set.claw_close,
            Slot::Pause => &mut set.pause,
            Slot::Reset => &mut set.reset,
        };
        *field = value;
    }
}

/// Wire form of a payload value. The top bit is lost.
#[inline]
pub const fn encode_byte(value: u8) -> u8 {
    value << 1
}

/// Payload value of a received byte.
#[inline]
pub const fn decode_byte(raw: u8) -> u8 {
    raw >> 1
}

/// Build the wire frame a controller sends for `set`.
///
/// Unused slots (the odd high bytes and the tail after the reset flag) are zero.
pub fn encode_frame(set: &CommandSet) -> [u8; FRAME_LEN] {
    let mut frame = [0u8; FRAME_LEN];
    frame[0] = encode_byte(MARKER);
    for slot in Slot::ALL {
        frame[slot.index()] = encode_byte(slot.get(set) as u8);
    }
    frame
}
