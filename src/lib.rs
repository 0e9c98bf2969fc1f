// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a toast notification system for the Iced GUI framework.
//!
//! Toasts are transient messages stacked at one corner or edge of the window.
//! Each one appears on the next frame, counts down to its own removal (pausing
//! while hovered), can be closed early, and detaches itself once its exit
//! transition ends. A [`toast::Manager`] enforces the display limit and merges
//! per-call options over global defaults.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod toast;
pub mod ui;
