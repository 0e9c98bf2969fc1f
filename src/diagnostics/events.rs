// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types recorded by the toast manager.

use crate::config::Position;
use crate::toast::{Message, RemovalReason, ToastId, Variant};
use std::time::{Duration, Instant};

/// A single recorded event with its monotonic timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// What happened.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEventKind {
    /// The stacking container was created.
    SurfaceInitialized { position: Position },
    /// A toast was accepted and attached.
    ToastShown { id: ToastId, variant: Variant },
    /// A toast was refused because the surface was full.
    ToastDropped {
        variant: Variant,
        live: usize,
        limit: usize,
    },
    CountdownPaused { id: ToastId, remaining: Duration },
    CountdownResumed { id: ToastId, remaining: Duration },
    RemovalStarted { id: ToastId, reason: RemovalReason },
    /// The exit transition finished and the toast left the surface.
    ToastDetached { id: ToastId },
    /// A message arrived for a toast that could not act on it.
    MessageIgnored { message: Message },
}
