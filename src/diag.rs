// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Link diagnostics for the debug console.
//!
//! The receive handler only bumps counters; the main loop polls a [`LinkMonitor`] and prints a
//! line whenever something changed.

use core::fmt;

use crate::shared::{LinkSnapshot, LinkStats};

impl fmt::Display for LinkSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.synchronized { "sync" } else { "lost" };
        write!(
            f,
            "link {} desyncs={} overruns={}",
            state, self.desyncs, self.overruns
        )
    }
}

/// Remembers the last reported link state.
pub struct LinkMonitor {
    last: LinkSnapshot,
}

impl LinkMonitor {
    pub fn new() -> Self {
        Self {
            last: LinkSnapshot {
                desyncs: 0,
                overruns: 0,
                synchronized: true,
            },
        }
    }

    /// Returns the new state if it differs from the last one returned.
    pub fn poll(&mut self, link: &LinkStats) -> Option<LinkSnapshot> {
        let now = link.snapshot();
        if now == self.last {
            return None;
        }
        self.last = now;
        Some(now)
    }
}

impl Default for LinkMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{encode_byte, FrameDecoder, MARKER};
    use crate::shared::RxBuffer;
    use std::string::ToString;

    #[test]
    fn reports_only_changes() {
        let rx = RxBuffer::new();
        let link = LinkStats::new();
        let mut dec = FrameDecoder::new(&rx, &link);
        let mut mon = LinkMonitor::new();

        assert_eq!(mon.poll(&link), None);

        dec.push(encode_byte(3));
        let lost = mon.poll(&link).unwrap();
        assert_eq!(lost.to_string(), "link lost desyncs=1 overruns=0");
        assert_eq!(mon.poll(&link), None);

        dec.push(encode_byte(MARKER));
        let back = mon.poll(&link).unwrap();
        assert_eq!(back.to_string(), "link sync desyncs=1 overruns=0");
    }
}
