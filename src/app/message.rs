// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::config::Position;
use crate::toast::{self, Variant};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A pointer, click or close event addressed to one toast.
    Toast(toast::Message),
    /// One of the demo buttons was pressed.
    Show(Variant),
    /// Periodic tick driving the toast timeline.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Overrides the configured display limit.
    pub limit: Option<usize>,
    /// Overrides the configured position. Also pins every demo toast to it.
    pub position: Option<Position>,
}
