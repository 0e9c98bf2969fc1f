// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module is the single source of truth for the values a toast uses
//! when neither the settings file nor the call site says otherwise.
//!
//! # Categories
//!
//! - **Countdown**: Auto-dismiss duration and behavior
//! - **Stacking**: Display limit and position
//! - **Animation**: Exit transition length and host tick interval

use super::Position;

// ==========================================================================
// Countdown Defaults
// ==========================================================================

/// Default countdown length before a toast dismisses itself (in milliseconds).
pub const DEFAULT_CLOSE_DURATION_MS: u64 = 3000;

/// Whether toasts run a countdown at all unless told otherwise.
pub const DEFAULT_AUTO_CLOSE: bool = true;

/// Whether hovering a toast freezes its countdown.
pub const DEFAULT_PAUSE_ON_HOVER: bool = true;

/// Whether clicking anywhere on a toast dismisses it.
pub const DEFAULT_CLOSE_ON_CLICK: bool = false;

/// Whether the countdown progress bar is hidden.
pub const DEFAULT_HIDE_PROGRESS_BAR: bool = false;

// ==========================================================================
// Stacking Defaults
// ==========================================================================

/// Maximum number of live toasts on the surface (0 = unlimited).
pub const DEFAULT_LIMIT: usize = 5;

/// Corner or edge the stack is anchored to.
pub const DEFAULT_POSITION: Position = Position::TopRight;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Length of the fade-out before a removed toast is detached (in milliseconds).
pub const DEFAULT_EXIT_TRANSITION_MS: u64 = 300;

/// Interval at which the host advances the timeline (in milliseconds).
pub const DEFAULT_TICK_MS: u64 = 16;

/// Minimum tick interval accepted from the settings file.
pub const MIN_TICK_MS: u64 = 4;

/// Maximum tick interval accepted from the settings file.
pub const MAX_TICK_MS: u64 = 250;

const _: () = {
    assert!(MIN_TICK_MS <= DEFAULT_TICK_MS);
    assert!(DEFAULT_TICK_MS <= MAX_TICK_MS);
};

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of lifecycle events kept by a manager before the oldest is evicted.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 256;

/// Smallest diagnostics buffer a manager will allocate.
pub const MIN_DIAGNOSTICS_CAPACITY: usize = 16;
