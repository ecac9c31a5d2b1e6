// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Byte-at-a-time frame decoder for the command link.
//!
//! Runs inside the USART receive interrupt: every call does a bounded amount of work and never
//! blocks. Raw (still shifted) bytes are stored in the shared [`RxBuffer`]; the marker always lands
//! at index 0, payload byte `i` at index `i`.
//!
//! Framing errors are counted and recovered by waiting for the next marker. A frame longer than
//! the buffer is abandoned: the cursor wraps to 0, and since the next byte is then not a marker the
//! decoder falls into [`SyncState::Error`] until the controller starts a new frame.

use crate::protocol::frame::{decode_byte, FRAME_LEN, MARKER};
use crate::shared::{LinkStats, RxBuffer};

/// Framing state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SyncState {
    Synchronized,
    Error,
}

/// What happened to one received byte.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Decoded {
    /// Byte stored at this buffer index. Index 0 means a new frame started.
    Stored(usize),
    /// Buffer full; the byte was dropped and the cursor wrapped.
    Overrun,
    /// A marker was expected and something else arrived.
    Desync,
    /// Discarded while waiting for a marker.
    Skipped,
}

pub struct FrameDecoder<'a> {
    rx: &'a RxBuffer,
    link: &'a LinkStats,
    state: SyncState,
    cursor: usize,
}

impl<'a> FrameDecoder<'a> {
    /// Start synchronized at cursor 0, so the first byte must be a marker.
    pub fn new(rx: &'a RxBuffer, link: &'a LinkStats) -> Self {
        Self {
            rx,
            link,
            state: SyncState::Synchronized,
            cursor: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Next buffer index to be written.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Process a single received byte.
    pub fn push(&mut self, raw: u8) -> Decoded {
        let value = decode_byte(raw);

        if value == MARKER {
            if self.state == SyncState::Error {
                self.link.record_resync();
            }
            self.state = SyncState::Synchronized;
            self.cursor = 0;
        }

        match self.state {
            SyncState::Error => Decoded::Skipped,
            SyncState::Synchronized => {
                if self.cursor == 0 && value != MARKER {
                    self.state = SyncState::Error;
                    self.link.record_desync();
                    return Decoded::Desync;
                }

                if self.cursor == FRAME_LEN {
                    self.cursor = 0;
                    self.link.record_overrun();
                    return Decoded::Overrun;
                }

                let index = self.cursor;
                self.rx.store(index, raw);
                self.cursor += 1;
                Decoded::Stored(index)
            }
        }
    }
}
