// SPDX-License-Identifier: MPL-2.0
//! Toast variants and their visual markers.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;

/// Severity/styling category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Plain message without an icon.
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Error,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Neutral,
        Variant::Info,
        Variant::Success,
        Variant::Warning,
        Variant::Error,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Neutral => "neutral",
            Variant::Info => "info",
            Variant::Success => "success",
            Variant::Warning => "warning",
            Variant::Error => "error",
        }
    }

    /// Class marker carried by the toast element, e.g. `--variant-error`.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("--variant-{}", self.as_str())
    }

    /// Glyph shown before the message. Neutral toasts have none.
    #[must_use]
    pub fn icon(self) -> Option<&'static str> {
        match self {
            Variant::Neutral => None,
            Variant::Info => Some("i"),
            Variant::Success => Some("✓"),
            Variant::Warning => Some("!"),
            Variant::Error => Some("✕"),
        }
    }

    /// Accent color for the border and progress bar.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Variant::Neutral => palette::GRAY_400,
            Variant::Info => palette::INFO_500,
            Variant::Success => palette::SUCCESS_500,
            Variant::Warning => palette::WARNING_500,
            Variant::Error => palette::ERROR_500,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_colors_are_distinct() {
        for (i, a) in Variant::ALL.iter().enumerate() {
            for b in &Variant::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{a} and {b} share a color");
            }
        }
    }

    #[test]
    fn only_neutral_has_no_icon() {
        assert!(Variant::Neutral.icon().is_none());
        assert!(Variant::ALL
            .iter()
            .filter(|v| **v != Variant::Neutral)
            .all(|v| v.icon().is_some()));
    }

    #[test]
    fn class_name_embeds_variant() {
        assert_eq!(Variant::Error.class_name(), "--variant-error");
        assert_eq!(Variant::default().class_name(), "--variant-neutral");
    }
}
