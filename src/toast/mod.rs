// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for transient user feedback.
//!
//! Toasts appear on a shared surface, count down, pause while hovered, and
//! fade out before leaving. The host supplies time and input through a
//! [`Scheduler`] and [`Message`]s; this module never blocks and never fails.
//!
//! # Components
//!
//! - [`variant`] - `Variant` (neutral, info, success, warning, error)
//! - [`surface`] - The document, root and stacking container toasts live in
//! - [`scheduler`] - Host scheduling contract and the `Timeline` clock
//! - [`instance`] - One toast and its countdown state machine
//! - [`manager`] - `Manager`: configuration, limit and message routing
//! - [`dispatch`] - `Toaster`: one call per variant
//!
//! # Usage
//!
//! ```
//! use iced_toast::config::PartialConfig;
//! use iced_toast::toast::{Manager, Timeline, Variant};
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut manager = Manager::new(PartialConfig::new().with_limit(3));
//! let mut timeline = Timeline::new(start);
//!
//! manager.create(&PartialConfig::new(), Variant::Error, "Upload failed", &mut timeline);
//! assert_eq!(manager.live_count(), 1);
//!
//! // Drive time forward: the toast expires at 3s, then fades out.
//! manager.pump(&mut timeline, start + Duration::from_secs(3));
//! assert!(manager.surface().unwrap().toasts().all(|t| t.is_removing()));
//! manager.pump(&mut timeline, start + Duration::from_secs(4));
//! assert_eq!(manager.live_count(), 0);
//! ```

pub mod dispatch;
pub mod instance;
pub mod manager;
pub mod scheduler;
pub mod surface;
pub mod variant;

pub use dispatch::Toaster;
pub use instance::{Countdown, Outcome, Phase, RemovalReason, ToastId, ToastInstance};
pub use manager::{Manager, Message};
pub use scheduler::{FrameHandle, Scheduler, TimerHandle, Timeline};
pub use surface::{Container, Document, ProgressBar, Root, ToastElement};
pub use variant::Variant;
