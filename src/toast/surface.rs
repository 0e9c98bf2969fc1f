// SPDX-License-Identifier: MPL-2.0
//! The visual tree toasts live in.
//!
//! A [`Document`] holds at most one [`Root`], which holds at most one
//! stacking [`Container`]. The container owns every live [`ToastInstance`]
//! and the position applied to the whole stack. Each instance carries its own
//! [`ToastElement`] describing what the host should draw.

use super::instance::{ToastId, ToastInstance};
use super::variant::Variant;
use crate::config::{Position, ToastConfig};
use std::time::Duration;

/// Class name of the stacking container.
pub const CONTAINER_CLASS: &str = "iced-toast-wrapper";

/// Class name shared by every toast element.
pub const TOAST_CLASS: &str = "toast";

/// Marker applied once the appear frame has run.
pub const VISIBLE_CLASS: &str = "--show";

/// Marker applied when removal starts.
pub const REMOVING_CLASS: &str = "--removing";

/// Marker applied to toasts dismissed by clicking anywhere on them.
pub const CLOSE_ON_CLICK_CLASS: &str = "--closeOnClick";

// =============================================================================
// Document / Root
// =============================================================================

/// Host visual tree, reduced to the parts toasts care about.
#[derive(Debug, Default)]
pub struct Document {
    root: Option<Root>,
}

/// Surface root. May exist without a container when the host created it.
#[derive(Debug, Default)]
pub struct Root {
    container: Option<Container>,
}

impl Root {
    #[must_use]
    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn root(&self) -> Option<&Root> {
        self.root.as_ref()
    }

    /// Creates the root if it does not exist yet, without a container.
    pub fn ensure_root(&mut self) -> &mut Root {
        self.root.get_or_insert_with(Root::default)
    }

    #[must_use]
    pub fn container(&self) -> Option<&Container> {
        self.root.as_ref().and_then(Root::container)
    }

    pub(crate) fn container_mut(&mut self) -> Option<&mut Container> {
        self.root.as_mut().and_then(|root| root.container.as_mut())
    }

    /// Returns the stacking container, creating root and container as needed.
    ///
    /// A freshly created container starts at `position`. An existing one is
    /// returned untouched, so repeated calls never produce a second container.
    pub fn acquire_container(&mut self, position: Position) -> &mut Container {
        self.ensure_root()
            .container
            .get_or_insert_with(|| Container::new(position))
    }
}

// =============================================================================
// Container
// =============================================================================

/// Stacking container shared by all toasts.
#[derive(Debug)]
pub struct Container {
    position: Position,
    children: Vec<ToastInstance>,
}

impl Container {
    fn new(position: Position) -> Self {
        Self {
            position,
            children: Vec::new(),
        }
    }

    /// Position currently applied to the whole stack.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// e.g. `iced-toast-wrapper --bottom-left`.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("{} --{}", CONTAINER_CLASS, self.position)
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Number of attached toasts, including ones still fading out.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Attached toasts in insertion order.
    pub fn toasts(&self) -> impl Iterator<Item = &ToastInstance> {
        self.children.iter()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastInstance> {
        self.children.iter().find(|toast| toast.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: ToastId) -> Option<&mut ToastInstance> {
        self.children.iter_mut().find(|toast| toast.id() == id)
    }

    pub(crate) fn append(&mut self, toast: ToastInstance) {
        self.children.push(toast);
    }

    pub(crate) fn detach(&mut self, id: ToastId) -> Option<ToastInstance> {
        let index = self.children.iter().position(|toast| toast.id() == id)?;
        Some(self.children.remove(index))
    }
}

// =============================================================================
// Toast element
// =============================================================================

/// Countdown indicator. Its animation length equals the close duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBar {
    duration: Duration,
    running: bool,
}

impl ProgressBar {
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether the animation is playing (false while paused or removing).
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// What the host draws for one toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastElement {
    variant: Variant,
    text: String,
    close_on_click: bool,
    visible: bool,
    removing: bool,
    progress_bar: Option<ProgressBar>,
}

impl ToastElement {
    pub(crate) fn build(variant: Variant, text: String, config: &ToastConfig) -> Self {
        let progress_bar = config.shows_progress_bar().then(|| ProgressBar {
            duration: config.close_duration(),
            running: true,
        });

        Self {
            variant,
            text,
            close_on_click: config.close_on_click,
            visible: false,
            removing: false,
            progress_bar,
        }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn icon(&self) -> Option<&'static str> {
        self.variant.icon()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_removing(&self) -> bool {
        self.removing
    }

    #[must_use]
    pub fn progress_bar(&self) -> Option<&ProgressBar> {
        self.progress_bar.as_ref()
    }

    /// Full class list, e.g. `toast --variant-error --show`.
    #[must_use]
    pub fn class_name(&self) -> String {
        let mut classes = vec![TOAST_CLASS.to_string(), self.variant.class_name()];
        if self.close_on_click {
            classes.push(CLOSE_ON_CLICK_CLASS.to_string());
        }
        if self.visible {
            classes.push(VISIBLE_CLASS.to_string());
        }
        if self.removing {
            classes.push(REMOVING_CLASS.to_string());
        }
        classes.join(" ")
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name().split_whitespace().any(|c| c == class)
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn mark_removing(&mut self) {
        self.removing = true;
    }

    pub(crate) fn set_progress_running(&mut self, running: bool) {
        if let Some(bar) = self.progress_bar.as_mut() {
            bar.running = running;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PartialConfig;

    #[test]
    fn acquire_container_creates_root_and_container_once() {
        let mut document = Document::new();
        assert!(document.root().is_none());

        document.acquire_container(Position::TopRight);
        document.acquire_container(Position::BottomLeft);

        let container = document.container().expect("container exists");
        // The second call reused the first container and its position.
        assert_eq!(container.position(), Position::TopRight);
        assert_eq!(container.class_name(), "iced-toast-wrapper --top-right");
    }

    #[test]
    fn acquire_container_reuses_existing_root() {
        let mut document = Document::new();
        document.ensure_root();
        assert!(document.container().is_none());

        document.acquire_container(Position::BottomCenter);
        assert_eq!(
            document.container().map(Container::position),
            Some(Position::BottomCenter)
        );
    }

    #[test]
    fn element_classes_follow_config_and_state() {
        let config = ToastConfig::default().merged(&PartialConfig::new().with_close_on_click(true));
        let mut element = ToastElement::build(Variant::Error, "X".into(), &config);

        assert_eq!(element.class_name(), "toast --variant-error --closeOnClick");
        assert!(element.has_class("--variant-error"));
        assert!(!element.has_class(VISIBLE_CLASS));

        element.set_visible(true);
        element.mark_removing();
        element.set_visible(false);
        assert!(element.has_class(REMOVING_CLASS));
        assert!(!element.has_class(VISIBLE_CLASS));
    }

    #[test]
    fn progress_bar_matches_close_duration() {
        let config =
            ToastConfig::default().merged(&PartialConfig::new().with_close_duration_ms(4500));
        let element = ToastElement::build(Variant::Info, "hi".into(), &config);
        let bar = element.progress_bar().expect("auto-close toasts get a bar");
        assert_eq!(bar.duration(), Duration::from_millis(4500));
        assert!(bar.is_running());
    }

    #[test]
    fn no_progress_bar_without_auto_close() {
        let config = ToastConfig::default().merged(&PartialConfig::new().with_auto_close(false));
        let element = ToastElement::build(Variant::Info, "hi".into(), &config);
        assert!(element.progress_bar().is_none());
    }
}
