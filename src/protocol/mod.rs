// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Command link protocol between the handheld controller and the robot.
//!
//! A frame is the marker byte followed by up to 31 payload bytes. Every byte travels shifted left
//! by one bit. Each command flag occupies a 16-bit big-endian slot, so the low byte of flag `k`
//! sits at index `2k + 2`.

pub mod decoder;
pub mod frame;

pub use decoder::{Decoded, FrameDecoder, SyncState};
pub use frame::{decode_byte, encode_byte, encode_frame, Slot, FRAME_LEN, MARKER};
