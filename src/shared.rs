// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! State shared between the main loop and the interrupt handlers.
//!
//! Every field is a plain atomic accessed with `Relaxed` ordering. Nothing here takes a lock:
//! handlers must finish before the next byte or timer event, and every consumer tolerates a value
//! that is one cycle stale. A reader of the receive buffer may see a frame that is being
//! overwritten; the next marker resynchronizes the link.

use core::sync::atomic::{AtomicBool, AtomicU16, AtomicU32, AtomicU8, Ordering};

use crate::config::{CLAW_MAX_TICKS, CLAW_MIN_TICKS, CLAW_OPEN_TICKS};
use crate::protocol::FRAME_LEN;

/// Raw bytes of the frame currently being received.
///
/// - owner: USART1 receive handler
/// - readers: main loop (command interpreter)
/// - consistency: per byte, torn frames tolerated
pub struct RxBuffer {
    bytes: [AtomicU8; FRAME_LEN],
}

impl RxBuffer {
    pub const fn new() -> Self {
        Self {
            bytes: [const { AtomicU8::new(0) }; FRAME_LEN],
        }
    }

    #[inline]
    pub fn load(&self, index: usize) -> u8 {
        self.bytes[index].load(Ordering::Relaxed)
    }

    #[inline]
    pub fn store(&self, index: usize, raw: u8) {
        self.bytes[index].store(raw, Ordering::Relaxed);
    }

    /// Copy the current contents out.
    pub fn snapshot(&self) -> [u8; FRAME_LEN] {
        let mut out = [0u8; FRAME_LEN];
        for (dst, src) in out.iter_mut().zip(self.bytes.iter()) {
            *dst = src.load(Ordering::Relaxed);
        }
        out
    }
}

impl Default for RxBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-value view of all command flags.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CommandSet {
    pub center_forward: bool,
    pub center_backward: bool,
    pub pivot_left: bool,
    pub pivot_right: bool,
    pub stop: bool,
    pub step_ccw: bool,
    pub step_cw: bool,
    pub claw_open: bool,
    pub claw_close: bool,
    pub pause: bool,
    pub reset: bool,
}

/// Command flags published by the main loop.
///
/// - owner: main loop (interpreter; dispatch clears the stepper flags on pause)
/// - readers: main loop, TIM7 stepper handler
/// - consistency: eventual, one flag per word
pub struct CommandFlags {
    center_forward: AtomicBool,
    center_backward: AtomicBool,
    pivot_left: AtomicBool,
    pivot_right: AtomicBool,
    stop: AtomicBool,
    step_ccw: AtomicBool,
    step_cw: AtomicBool,
    claw_open: AtomicBool,
    claw_close: AtomicBool,
    pause: AtomicBool,
    reset: AtomicBool,
}

impl CommandFlags {
    pub const fn new() -> Self {
        Self {
            center_forward: AtomicBool::new(false),
            center_backward: AtomicBool::new(false),
            pivot_left: AtomicBool::new(false),
            pivot_right: AtomicBool::new(false),
            stop: AtomicBool::new(false),
            step_ccw: AtomicBool::new(false),
            step_cw: AtomicBool::new(false),
            claw_open: AtomicBool::new(false),
            claw_close: AtomicBool::new(false),
            pause: AtomicBool::new(false),
            reset: AtomicBool::new(false),
        }
    }

    /// Store every flag of `set`.
    pub fn publish(&self, set: &CommandSet) {
        self.center_forward.store(set.center_forward, Ordering::Relaxed);
        self.center_backward.store(set.center_backward, Ordering::Relaxed);
        self.pivot_left.store(set.pivot_left, Ordering::Relaxed);
        self.pivot_right.store(set.pivot_right, Ordering::Relaxed);
        self.stop.store(set.stop, Ordering::Relaxed);
        self.step_ccw.store(set.step_ccw, Ordering::Relaxed);
        self.step_cw.store(set.step_cw, Ordering::Relaxed);
        self.claw_open.store(set.claw_open, Ordering::Relaxed);
        self.claw_close.store(set.claw_close, Ordering::Relaxed);
        self.pause.store(set.pause, Ordering::Relaxed);
        self.reset.store(set.reset, Ordering::Relaxed);
    }

    /// Load every flag. Flags are read one at a time, so the result may mix two publications.
    pub fn snapshot(&self) -> CommandSet {
        CommandSet {
            center_forward: self.center_forward.load(Ordering::Relaxed),
            center_backward: self.center_backward.load(Ordering::Relaxed),
            pivot_left: self.pivot_left.load(Ordering::Relaxed),
            pivot_right: self.pivot_right.load(Ordering::Relaxed),
            stop: self.stop.load(Ordering::Relaxed),
            step_ccw: self.step_ccw.load(Ordering::Relaxed),
            step_cw: self.step_cw.load(Ordering::Relaxed),
            claw_open: self.claw_open.load(Ordering::Relaxed),
            claw_close: self.claw_close.load(Ordering::Relaxed),
            pause: self.pause.load(Ordering::Relaxed),
            reset: self.reset.load(Ordering::Relaxed),
        }
    }

    #[inline]
    pub fn step_cw(&self) -> bool {
        self.step_cw.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn step_ccw(&self) -> bool {
        self.step_ccw.load(Ordering::Relaxed)
    }

    /// Halt the pulley until the next publication says otherwise.
    pub fn clear_stepping(&self) {
        self.step_cw.store(false, Ordering::Relaxed);
        self.step_ccw.store(false, Ordering::Relaxed);
    }
}

impl Default for CommandFlags {
    fn default() -> Self {
        Self::new()
    }
}

/// Claw servo high-time target in fine ticks.
///
/// - owner: main loop (interpreter)
/// - readers: TIM6 servo handler, sampled on each rising edge
/// - consistency: eventual, applies from the next pulse
pub struct ClawTarget {
    ticks: AtomicU16,
}

impl ClawTarget {
    pub const fn new(ticks: u16) -> Self {
        Self {
            ticks: AtomicU16::new(ticks),
        }
    }

    #[inline]
    pub fn ticks(&self) -> u16 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Publish a new high-time, clamped to the safe actuation range. Returns the stored value.
    pub fn set_ticks(&self, ticks: u16) -> u16 {
        let clamped = ticks.clamp(CLAW_MIN_TICKS, CLAW_MAX_TICKS);
        self.ticks.store(clamped, Ordering::Relaxed);
        clamped
    }
}

impl Default for ClawTarget {
    fn default() -> Self {
        Self::new(CLAW_OPEN_TICKS)
    }
}

/// Receive-side diagnostics.
///
/// - owner: USART1 receive handler
/// - readers: main loop (debug console)
/// - consistency: monotonic counters, never reset
pub struct LinkStats {
    desyncs: AtomicU32,
    overruns: AtomicU32,
    synchronized: AtomicBool,
}

/// Plain-value copy of [`LinkStats`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LinkSnapshot {
    pub desyncs: u32,
    pub overruns: u32,
    pub synchronized: bool,
}

impl LinkStats {
    pub const fn new() -> Self {
        Self {
            desyncs: AtomicU32::new(0),
            overruns: AtomicU32::new(0),
            synchronized: AtomicBool::new(true),
        }
    }

    pub(crate) fn record_desync(&self) {
        self.desyncs.fetch_add(1, Ordering::Relaxed);
        self.synchronized.store(false, Ordering::Relaxed);
    }

    pub(crate) fn record_overrun(&self) {
        self.overruns.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_resync(&self) {
        self.synchronized.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn desyncs(&self) -> u32 {
        self.desyncs.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn overruns(&self) -> u32 {
        self.overruns.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn is_synchronized(&self) -> bool {
        self.synchronized.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> LinkSnapshot {
        LinkSnapshot {
            desyncs: self.desyncs(),
            overruns: self.overruns(),
            synchronized: self.is_synchronized(),
        }
    }
}

impl Default for LinkStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the main loop and the three handlers share. Construct once as a `static`.
pub struct SharedState {
    pub rx: RxBuffer,
    pub flags: CommandFlags,
    pub claw: ClawTarget,
    pub link: LinkStats,
}

impl SharedState {
    pub const fn new() -> Self {
        Self {
            rx: RxBuffer::new(),
            flags: CommandFlags::new(),
            claw: ClawTarget::new(CLAW_OPEN_TICKS),
            link: LinkStats::new(),
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
