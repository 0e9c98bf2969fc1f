// SPDX-License-Identifier: MPL-2.0
//! Periodic tick subscription driving the toast timeline.

use super::Message;
use crate::toast::{Manager, Timeline};
use iced::{time, Subscription};
use std::time::Duration;

/// Ticks every `interval` while any toast is attached or any callback is
/// still pending. Idle apps receive no ticks at all.
pub fn create_tick_subscription(
    manager: &Manager,
    timeline: &Timeline,
    interval: Duration,
) -> Subscription<Message> {
    if is_active(manager, timeline) {
        time::every(interval).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

fn is_active(manager: &Manager, timeline: &Timeline) -> bool {
    manager.has_toasts() || timeline.has_pending()
}
