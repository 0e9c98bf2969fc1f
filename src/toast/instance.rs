// SPDX-License-Identifier: MPL-2.0
//! One toast and its countdown state machine.
//!
//! ```text
//! Pending --show--> Shown(Running | Paused | Disabled) --> Removing --> Removed
//! ```
//!
//! Every transition goes through [`ToastInstance::handle`], which checks the
//! current phase and, for frames and timers, the handle carried by the
//! message. A callback that arrives late (a timer firing after a manual
//! close, a frame after removal started) is rejected by that guard.

use super::manager::Message;
use super::scheduler::{FrameHandle, Scheduler, TimerHandle};
use super::surface::{Container, ToastElement};
use super::variant::Variant;
use crate::config::ToastConfig;
use std::time::{Duration, Instant};

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a toast started leaving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    /// The countdown ran out.
    Expired,
    /// The close button was pressed.
    CloseButton,
    /// The toast body was clicked with `close_on_click` set.
    Click,
}

/// Countdown sub-state while a toast is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// `auto_close` is off; the toast stays until closed by hand.
    Disabled,
    Running {
        timer: TimerHandle,
        started_at: Instant,
    },
    Paused,
}

/// Lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pending,
    Shown(Countdown),
    Removing(RemovalReason),
    Removed,
}

/// Result of feeding a message to a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The message did not apply in the current phase.
    Ignored,
    /// The visible marker was applied.
    Revealed,
    Paused { remaining: Duration },
    Resumed { remaining: Duration },
    RemovalStarted(RemovalReason),
    /// The exit transition finished; the toast must be detached.
    Detached,
}

/// A toast: its element plus the state driving its dismissal.
#[derive(Debug)]
pub struct ToastInstance {
    id: ToastId,
    config: ToastConfig,
    element: ToastElement,
    phase: Phase,
    remaining: Duration,
    appear_frame: Option<FrameHandle>,
}

impl ToastInstance {
    /// Builds a pending toast. Nothing is scheduled until [`show`](Self::show).
    pub fn new(variant: Variant, text: impl Into<String>, config: ToastConfig) -> Self {
        Self {
            id: ToastId::new(),
            element: ToastElement::build(variant, text.into(), &config),
            remaining: config.close_duration(),
            config,
            phase: Phase::Pending,
            appear_frame: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.element.variant()
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    #[must_use]
    pub fn element(&self) -> &ToastElement {
        &self.element
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_removing(&self) -> bool {
        matches!(self.phase, Phase::Removing(_) | Phase::Removed)
    }

    /// Countdown left at `now`, accounting for a running timer.
    #[must_use]
    pub fn remaining_at(&self, now: Instant) -> Duration {
        match self.phase {
            Phase::Shown(Countdown::Running { started_at, .. }) => self
                .remaining
                .saturating_sub(now.saturating_duration_since(started_at)),
            _ => self.remaining,
        }
    }

    /// Fraction of the countdown left at `now` (1.0 → 0.0), if the toast has
    /// a progress bar.
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> Option<f32> {
        let bar = self.element.progress_bar()?;
        let total = bar.duration().as_secs_f32();
        if total <= f32::EPSILON {
            return Some(0.0);
        }
        Some((self.remaining_at(now).as_secs_f32() / total).clamp(0.0, 1.0))
    }

    /// Attaches the toast to `container` and starts its lifecycle.
    ///
    /// The visible marker waits for the next animation frame; the countdown,
    /// when enabled, starts right away.
    pub fn show(mut self, container: &mut Container, scheduler: &mut dyn Scheduler) -> ToastId {
        let id = self.id;
        self.appear_frame = Some(scheduler.request_animation_frame(id));
        let countdown = if self.config.auto_close {
            self.start_countdown(scheduler)
        } else {
            Countdown::Disabled
        };
        self.phase = Phase::Shown(countdown);
        container.append(self);
        id
    }

    /// Applies one host message.
    pub fn handle(&mut self, message: &Message, scheduler: &mut dyn Scheduler) -> Outcome {
        match *message {
            Message::AnimationFrame(_, frame) => self.reveal(frame),
            Message::CountdownElapsed(_, timer) => self.expire(timer, scheduler),
            Message::PointerEntered(_) => self.pause(scheduler),
            Message::PointerLeft(_) => self.resume(scheduler),
            Message::Clicked(_) if self.config.close_on_click => {
                self.begin_removal(RemovalReason::Click, scheduler)
            }
            Message::Clicked(_) => Outcome::Ignored,
            Message::CloseRequested(_) => self.begin_removal(RemovalReason::CloseButton, scheduler),
            Message::TransitionEnded(_) => self.finish_removal(),
        }
    }

    fn hover_pauses(&self) -> bool {
        self.config.auto_close && self.config.pause_on_hover
    }

    fn start_countdown(&mut self, scheduler: &mut dyn Scheduler) -> Countdown {
        Countdown::Running {
            timer: scheduler.set_timeout(self.id, self.remaining),
            started_at: scheduler.now(),
        }
    }

    fn reveal(&mut self, frame: FrameHandle) -> Outcome {
        if self.appear_frame != Some(frame) || !matches!(self.phase, Phase::Shown(_)) {
            return Outcome::Ignored;
        }
        self.appear_frame = None;
        self.element.set_visible(true);
        Outcome::Revealed
    }

    fn expire(&mut self, timer: TimerHandle, scheduler: &mut dyn Scheduler) -> Outcome {
        match self.phase {
            Phase::Shown(Countdown::Running { timer: current, .. }) if current == timer => {
                self.begin_removal(RemovalReason::Expired, scheduler)
            }
            _ => Outcome::Ignored,
        }
    }

    fn pause(&mut self, scheduler: &mut dyn Scheduler) -> Outcome {
        if !self.hover_pauses() {
            return Outcome::Ignored;
        }
        let Phase::Shown(Countdown::Running { timer, started_at }) = self.phase else {
            return Outcome::Ignored;
        };

        scheduler.clear_timeout(timer);
        let elapsed = scheduler.now().saturating_duration_since(started_at);
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.element.set_progress_running(false);
        self.phase = Phase::Shown(Countdown::Paused);
        Outcome::Paused {
            remaining: self.remaining,
        }
    }

    fn resume(&mut self, scheduler: &mut dyn Scheduler) -> Outcome {
        if !self.hover_pauses() || self.phase != Phase::Shown(Countdown::Paused) {
            return Outcome::Ignored;
        }

        self.element.set_progress_running(true);
        let countdown = self.start_countdown(scheduler);
        self.phase = Phase::Shown(countdown);
        Outcome::Resumed {
            remaining: self.remaining,
        }
    }

    fn begin_removal(&mut self, reason: RemovalReason, scheduler: &mut dyn Scheduler) -> Outcome {
        let countdown = match self.phase {
            Phase::Shown(countdown) => countdown,
            Phase::Pending | Phase::Removing(_) | Phase::Removed => return Outcome::Ignored,
        };

        if let Some(frame) = self.appear_frame.take() {
            scheduler.cancel_animation_frame(frame);
        }
        if let Countdown::Running { timer, started_at } = countdown {
            scheduler.clear_timeout(timer);
            let elapsed = scheduler.now().saturating_duration_since(started_at);
            self.remaining = self.remaining.saturating_sub(elapsed);
        }

        self.element.set_progress_running(false);
        self.element.set_visible(false);
        self.element.mark_removing();
        self.phase = Phase::Removing(reason);
        scheduler.await_transition_end(self.id);
        Outcome::RemovalStarted(reason)
    }

    fn finish_removal(&mut self) -> Outcome {
        if !matches!(self.phase, Phase::Removing(_)) {
            return Outcome::Ignored;
        }
        self.phase = Phase::Removed;
        Outcome::Detached
    }
}
