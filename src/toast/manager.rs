// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the surface, merges configuration, enforces the display
//! limit and routes host messages to the toast they address. It keeps no list
//! of toasts of its own: the surface container is their only owner, and a
//! toast leaves it by itself once its exit transition ends.

use super::dispatch::Toaster;
use super::instance::{Outcome, ToastId, ToastInstance};
use super::scheduler::{FrameHandle, Scheduler, TimerHandle, Timeline};
use super::surface::{Container, Document};
use super::variant::Variant;
use crate::config::{PartialConfig, ToastConfig};
use crate::diagnostics::{DiagnosticEventKind, Diagnostics};
use std::time::Instant;

/// Host events addressed to a single toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The appear frame requested on show has come.
    AnimationFrame(ToastId, FrameHandle),
    /// A countdown timer fired.
    CountdownElapsed(ToastId, TimerHandle),
    PointerEntered(ToastId),
    PointerLeft(ToastId),
    /// The toast body was clicked.
    Clicked(ToastId),
    /// The close button was activated.
    CloseRequested(ToastId),
    /// The exit transition finished.
    TransitionEnded(ToastId),
}

impl Message {
    /// The toast this message is addressed to.
    #[must_use]
    pub fn toast(&self) -> ToastId {
        match *self {
            Message::AnimationFrame(id, _)
            | Message::CountdownElapsed(id, _)
            | Message::PointerEntered(id)
            | Message::PointerLeft(id)
            | Message::Clicked(id)
            | Message::CloseRequested(id)
            | Message::TransitionEnded(id) => id,
        }
    }
}

/// Gatekeeper and factory for toasts on one shared surface.
#[derive(Debug)]
pub struct Manager {
    defaults: ToastConfig,
    document: Document,
    diagnostics: Diagnostics,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(PartialConfig::default())
    }
}

impl Manager {
    /// Creates a manager whose defaults are the built-in defaults with
    /// `initial` applied, and acquires its surface.
    #[must_use]
    pub fn new(initial: PartialConfig) -> Self {
        Self::with_document(Document::new(), initial)
    }

    /// Like [`Manager::new`], but adopts a document the host already built.
    /// An existing root or container is reused.
    #[must_use]
    pub fn with_document(document: Document, initial: PartialConfig) -> Self {
        let mut manager = Self {
            defaults: ToastConfig::default().merged(&initial),
            document,
            diagnostics: Diagnostics::default(),
        };
        manager.acquire_surface_at(Instant::now());
        manager
    }

    /// Merges `overrides` into the stored defaults. Last writer wins.
    pub fn configure(&mut self, overrides: &PartialConfig) {
        self.defaults.apply(overrides);
    }

    #[must_use]
    pub fn defaults(&self) -> &ToastConfig {
        &self.defaults
    }

    /// Returns the stacking container, creating root and container if missing.
    ///
    /// Safe to call any number of times; the existing container is reused.
    pub fn acquire_surface(&mut self) -> &mut Container {
        self.acquire_surface_at(Instant::now())
    }

    fn acquire_surface_at(&mut self, now: Instant) -> &mut Container {
        if self.document.container().is_none() {
            self.diagnostics.log(
                DiagnosticEventKind::SurfaceInitialized {
                    position: self.defaults.position,
                },
                now,
            );
        }
        self.document.acquire_container(self.defaults.position)
    }

    /// Shows a toast, unless the surface is full.
    ///
    /// The configuration for this toast is the stored defaults with
    /// `overrides` applied; the stored defaults are not modified. When the
    /// resolved `limit` is non-zero and already reached, the request is
    /// dropped without any feedback to the caller. Otherwise the whole stack
    /// moves to the resolved position and the new toast is attached.
    pub fn create(
        &mut self,
        overrides: &PartialConfig,
        variant: Variant,
        text: impl Into<String>,
        scheduler: &mut dyn Scheduler,
    ) {
        let now = scheduler.now();
        let config = self.defaults.merged(overrides);
        let surface = self.acquire_surface_at(now);

        let live = surface.len();
        if !config.admits(live) {
            self.diagnostics.log(
                DiagnosticEventKind::ToastDropped {
                    variant,
                    live,
                    limit: config.limit,
                },
                now,
            );
            return;
        }

        surface.set_position(config.position);
        let id = ToastInstance::new(variant, text, config).show(surface, scheduler);
        self.diagnostics
            .log(DiagnosticEventKind::ToastShown { id, variant }, now);
    }

    /// Routes a host message to its toast.
    ///
    /// Messages for toasts that are gone, and messages the toast cannot act on
    /// in its current phase, are ignored.
    pub fn handle_message(&mut self, message: Message, scheduler: &mut dyn Scheduler) {
        let now = scheduler.now();
        let id = message.toast();

        let Some(surface) = self.document.container_mut() else {
            return;
        };
        let outcome = match surface.get_mut(id) {
            Some(toast) => toast.handle(&message, scheduler),
            None => Outcome::Ignored,
        };

        let kind = match outcome {
            Outcome::Ignored => DiagnosticEventKind::MessageIgnored { message },
            Outcome::Revealed => return,
            Outcome::Paused { remaining } => DiagnosticEventKind::CountdownPaused { id, remaining },
            Outcome::Resumed { remaining } => {
                DiagnosticEventKind::CountdownResumed { id, remaining }
            }
            Outcome::RemovalStarted(reason) => DiagnosticEventKind::RemovalStarted { id, reason },
            Outcome::Detached => {
                surface.detach(id);
                DiagnosticEventKind::ToastDetached { id }
            }
        };
        self.diagnostics.log(kind, now);
    }

    /// Advances `timeline` to `now` and handles every message that comes due,
    /// including ones scheduled while handling, until nothing is left at `now`.
    pub fn pump(&mut self, timeline: &mut Timeline, now: Instant) {
        loop {
            let due = timeline.advance_to(now);
            if due.is_empty() {
                break;
            }
            for message in due {
                self.handle_message(message, timeline);
            }
        }
    }

    /// Per-variant call surface bound to `scheduler`.
    pub fn toaster<'a>(&'a mut self, scheduler: &'a mut dyn Scheduler) -> Toaster<'a> {
        Toaster::new(self, scheduler)
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn surface(&self) -> Option<&Container> {
        self.document.container()
    }

    /// Toasts currently attached, including ones fading out.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.surface().map_or(0, Container::len)
    }

    #[must_use]
    pub fn has_toasts(&self) -> bool {
        self.live_count() > 0
    }

    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}
