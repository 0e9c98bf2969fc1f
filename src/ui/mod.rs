// SPDX-License-Identifier: MPL-2.0
//! User interface for the toast surface.
//!
//! - [`overlay`] - Renders the toast stack and reports pointer events
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod overlay;
