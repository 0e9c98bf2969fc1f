// SPDX-License-Identifier: MPL-2.0
//! One call per variant, forwarding to [`Manager::create`].

use super::manager::Manager;
use super::scheduler::Scheduler;
use super::variant::Variant;
use crate::config::PartialConfig;

/// Fire-and-forget toast calls bound to a manager and a scheduler.
///
/// None of the calls report whether the toast was shown; a request refused
/// because the surface is full is indistinguishable from an accepted one.
///
/// ```
/// use iced_toast::config::{PartialConfig, Position};
/// use iced_toast::toast::{Manager, Timeline};
/// use std::time::Instant;
///
/// let mut manager = Manager::default();
/// let mut timeline = Timeline::new(Instant::now());
///
/// manager.toaster(&mut timeline).success("Saved");
/// manager
///     .toaster(&mut timeline)
///     .with(PartialConfig::new().with_position(Position::BottomLeft))
///     .warning("Disk almost full");
///
/// assert_eq!(manager.live_count(), 2);
/// ```
pub struct Toaster<'a> {
    manager: &'a mut Manager,
    scheduler: &'a mut dyn Scheduler,
    overrides: PartialConfig,
}

impl<'a> Toaster<'a> {
    pub fn new(manager: &'a mut Manager, scheduler: &'a mut dyn Scheduler) -> Self {
        Self {
            manager,
            scheduler,
            overrides: PartialConfig::default(),
        }
    }

    /// Applies `overrides` to every following call on this toaster.
    #[must_use]
    pub fn with(mut self, overrides: PartialConfig) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn notify(&mut self, variant: Variant, text: impl Into<String>) {
        self.manager
            .create(&self.overrides, variant, text, &mut *self.scheduler);
    }

    pub fn neutral(&mut self, text: impl Into<String>) {
        self.notify(Variant::Neutral, text);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.notify(Variant::Info, text);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.notify(Variant::Success, text);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.notify(Variant::Warning, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.notify(Variant::Error, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Position;
    use crate::toast::Timeline;
    use std::time::Instant;

    #[test]
    fn each_call_uses_its_variant() {
        let mut manager = Manager::new(PartialConfig::new().with_limit(0));
        let mut timeline = Timeline::new(Instant::now());

        let mut toaster = manager.toaster(&mut timeline);
        toaster.neutral("n");
        toaster.info("i");
        toaster.success("s");
        toaster.warning("w");
        toaster.error("e");

        let variants: Vec<_> = manager
            .surface()
            .expect("surface exists")
            .toasts()
            .map(|toast| toast.variant())
            .collect();
        assert_eq!(variants, Variant::ALL.to_vec());
    }

    #[test]
    fn overrides_apply_to_the_call_only() {
        let mut manager = Manager::default();
        let mut timeline = Timeline::new(Instant::now());

        manager
            .toaster(&mut timeline)
            .with(PartialConfig::new().with_position(Position::BottomRight))
            .info("moved");

        assert_eq!(
            manager.surface().map(|surface| surface.position()),
            Some(Position::BottomRight)
        );
        assert_eq!(manager.defaults().position, Position::TopRight);
    }
}
