//! Editor color themes.
//!
//! Each theme is a flat table of CSS custom properties applied to the
//! document root; the stylesheet resolves everything editor-chrome-colored
//! through these variables. The selected theme persists independently of the
//! document snapshot.

use serde::{Deserialize, Serialize};

/// Named editor color palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Ocean,
}

impl Theme {
    /// All selectable themes, in menu order.
    pub const ALL: [Self; 3] = [Self::Dark, Self::Light, Self::Ocean];

    /// Stable lowercase name used as the persisted value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Ocean => "ocean",
        }
    }

    /// Capitalized name for the theme selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
            Self::Ocean => "Ocean",
        }
    }

    /// Parse a persisted theme name. Unknown names yield `None` so callers
    /// fall back to the default.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            "ocean" => Some(Self::Ocean),
            _ => None,
        }
    }

    /// CSS custom property table for this palette.
    #[must_use]
    pub fn variables(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Dark => &[
                ("--editor-bg", "#1e1e1e"),
                ("--editor-text", "#d4d4d4"),
                ("--editor-header-bg", "#252526"),
                ("--editor-border", "#3c3c3c"),
                ("--editor-button-bg", "#3e3e3e"),
                ("--editor-button-hover-bg", "#505050"),
                ("--editor-tab-active-bg", "#1e1e1e"),
                ("--editor-tab-inactive-bg", "transparent"),
                ("--editor-tab-active-text", "#ffffff"),
                ("--editor-tab-inactive-text", "#9ca3af"),
                ("--editor-tab-inactive-hover-bg", "rgba(255, 255, 255, 0.1)"),
                ("--editor-select-bg", "#3e3e3e"),
                ("--editor-select-text", "#ffffff"),
            ],
            Self::Light => &[
                ("--editor-bg", "#ffffff"),
                ("--editor-text", "#27272a"),
                ("--editor-header-bg", "#f4f4f5"),
                ("--editor-border", "#e4e4e7"),
                ("--editor-button-bg", "#e4e4e7"),
                ("--editor-button-hover-bg", "#d4d4d8"),
                ("--editor-tab-active-bg", "#ffffff"),
                ("--editor-tab-inactive-bg", "transparent"),
                ("--editor-tab-active-text", "#18181b"),
                ("--editor-tab-inactive-text", "#71717a"),
                ("--editor-tab-inactive-hover-bg", "rgba(0, 0, 0, 0.05)"),
                ("--editor-select-bg", "#e4e4e7"),
                ("--editor-select-text", "#18181b"),
            ],
            Self::Ocean => &[
                ("--editor-bg", "#0f172a"),
                ("--editor-text", "#94a3b8"),
                ("--editor-header-bg", "#1e293b"),
                ("--editor-border", "#334155"),
                ("--editor-button-bg", "#334155"),
                ("--editor-button-hover-bg", "#475569"),
                ("--editor-tab-active-bg", "#0f172a"),
                ("--editor-tab-inactive-bg", "transparent"),
                ("--editor-tab-active-text", "#e2e8f0"),
                ("--editor-tab-inactive-text", "#64748b"),
                ("--editor-tab-inactive-hover-bg", "rgba(100, 116, 139, 0.2)"),
                ("--editor-select-bg", "#334155"),
                ("--editor-select-text", "#e2e8f0"),
            ],
        }
    }
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;
