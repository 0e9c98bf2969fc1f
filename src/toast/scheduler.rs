// SPDX-License-Identifier: MPL-2.0
//! Host scheduling contract and the deterministic [`Timeline`] that fulfils it.
//!
//! Toasts never block. Every asynchronous step (the appear frame, the
//! countdown, the exit transition) is requested from a [`Scheduler`] and
//! comes back later as a [`Message`] routed through
//! [`Manager::handle_message`](super::Manager::handle_message).

use super::instance::ToastId;
use super::manager::Message;
use std::time::{Duration, Instant};

/// Handle of a requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Handle of a scheduled countdown timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Services a toast needs from its host.
///
/// Every request is answered asynchronously with a [`Message`]:
/// frames with [`Message::AnimationFrame`], timers with
/// [`Message::CountdownElapsed`], and transition watches with
/// [`Message::TransitionEnded`]. Cancelled frames and timers must not be
/// delivered, though toasts tolerate it if they are.
pub trait Scheduler {
    /// Current time on the host clock.
    fn now(&self) -> Instant;

    /// Requests a callback on the next animation frame.
    fn request_animation_frame(&mut self, toast: ToastId) -> FrameHandle;

    fn cancel_animation_frame(&mut self, handle: FrameHandle);

    /// Schedules a countdown expiry `delay` from now.
    fn set_timeout(&mut self, toast: ToastId, delay: Duration) -> TimerHandle;

    fn clear_timeout(&mut self, handle: TimerHandle);

    /// Asks for a one-shot signal once the toast's exit transition finishes.
    fn await_transition_end(&mut self, toast: ToastId);
}

#[derive(Debug, Clone, Copy)]
struct Deadline {
    due: Instant,
    seq: u64,
    timer: Option<TimerHandle>,
    message: Message,
}

/// Virtual clock implementing [`Scheduler`].
///
/// Time only moves when the host calls [`Timeline::advance_to`], which makes
/// the timeline equally usable behind an `iced::time::every` subscription and
/// in tests.
///
/// Pending animation frames fire on the next advance regardless of the
/// target instant. Timers and transition ends fire once their deadline is
/// reached, in deadline order.
#[derive(Debug, Clone)]
pub struct Timeline {
    now: Instant,
    next_seq: u64,
    exit_transition: Duration,
    frames: Vec<(FrameHandle, ToastId)>,
    deadlines: Vec<Deadline>,
}

impl Timeline {
    /// Creates a timeline starting at `start` with the default exit transition.
    #[must_use]
    pub fn new(start: Instant) -> Self {
        Self {
            now: start,
            next_seq: 0,
            exit_transition: Duration::from_millis(crate::config::DEFAULT_EXIT_TRANSITION_MS),
            frames: Vec::new(),
            deadlines: Vec::new(),
        }
    }

    /// Sets how long exit transitions take before completion is signalled.
    #[must_use]
    pub fn with_exit_transition(mut self, duration: Duration) -> Self {
        self.exit_transition = duration;
        self
    }

    #[must_use]
    pub fn exit_transition(&self) -> Duration {
        self.exit_transition
    }

    /// Moves the clock to `now` and returns every message now due.
    ///
    /// The clock never moves backwards; an earlier `now` only flushes frames.
    pub fn advance_to(&mut self, now: Instant) -> Vec<Message> {
        if now > self.now {
            self.now = now;
        }

        let mut due: Vec<Message> = self
            .frames
            .drain(..)
            .map(|(handle, toast)| Message::AnimationFrame(toast, handle))
            .collect();

        let current = self.now;
        let (mut ready, pending): (Vec<Deadline>, Vec<Deadline>) = self
            .deadlines
            .drain(..)
            .partition(|deadline| deadline.due <= current);
        self.deadlines = pending;

        ready.sort_by_key(|deadline| (deadline.due, deadline.seq));
        due.extend(ready.into_iter().map(|deadline| deadline.message));
        due
    }

    /// Shorthand for advancing the clock by `delta`.
    pub fn advance(&mut self, delta: Duration) -> Vec<Message> {
        self.advance_to(self.now + delta)
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.iter().map(|deadline| deadline.due).min()
    }

    /// Whether any frame, timer or transition is still outstanding.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.frames.is_empty() || !self.deadlines.is_empty()
    }

    fn next_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn push_deadline(
        &mut self,
        seq: u64,
        delay: Duration,
        timer: Option<TimerHandle>,
        message: Message,
    ) {
        self.deadlines.push(Deadline {
            due: self.now + delay,
            seq,
            timer,
            message,
        });
    }
}

impl Scheduler for Timeline {
    fn now(&self) -> Instant {
        self.now
    }

    fn request_animation_frame(&mut self, toast: ToastId) -> FrameHandle {
        let handle = FrameHandle(self.next_seq());
        self.frames.push((handle, toast));
        handle
    }

    fn cancel_animation_frame(&mut self, handle: FrameHandle) {
        self.frames.retain(|(pending, _)| *pending != handle);
    }

    fn set_timeout(&mut self, toast: ToastId, delay: Duration) -> TimerHandle {
        let seq = self.next_seq();
        let handle = TimerHandle(seq);
        self.push_deadline(seq, delay, Some(handle), Message::CountdownElapsed(toast, handle));
        handle
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.deadlines
            .retain(|deadline| deadline.timer != Some(handle));
    }

    fn await_transition_end(&mut self, toast: ToastId) {
        let seq = self.next_seq();
        self.push_deadline(seq, self.exit_transition, None, Message::TransitionEnded(toast));
    }
}
