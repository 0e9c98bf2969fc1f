// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the toast lifecycle.
//!
//! The manager records what happens to each toast (shown, dropped, paused,
//! removed, stale callbacks) in a memory-bounded circular buffer. Nothing is
//! printed; hosts and tests inspect the buffer through
//! [`Manager::diagnostics`](crate::toast::Manager::diagnostics).
//!
//! # Architecture
//!
//! - [`RingBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event
//! - [`Diagnostics`]: The log a manager writes to

mod buffer;
mod events;

pub use buffer::RingBuffer;
pub use events::{DiagnosticEvent, DiagnosticEventKind};

use std::time::Instant;

/// Bounded log of toast lifecycle events.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    buffer: RingBuffer<DiagnosticEvent>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DIAGNOSTICS_CAPACITY)
    }
}

impl Diagnostics {
    /// Capacities below `MIN_DIAGNOSTICS_CAPACITY` are raised to it.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: RingBuffer::new(capacity.max(crate::config::MIN_DIAGNOSTICS_CAPACITY)),
        }
    }

    /// Records `kind` as having happened at `at`.
    pub fn log(&mut self, kind: DiagnosticEventKind, at: Instant) {
        let _ = self.buffer.push(DiagnosticEvent::with_timestamp(kind, at));
    }

    /// Events oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Event kinds oldest first.
    pub fn kinds(&self) -> impl Iterator<Item = &DiagnosticEventKind> {
        self.buffer.iter().map(|event| &event.kind)
    }

    #[must_use]
    pub fn last(&self) -> Option<&DiagnosticEvent> {
        self.buffer.newest()
    }

    /// Events lost to the capacity bound.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.buffer.evicted()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}
