#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Main surface mode: rendered preview or the source editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Preview,
    Code,
}

/// Buffers selectable in the source editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorTab {
    #[default]
    Html,
    Css,
    Js,
}

impl EditorTab {
    /// All tabs, in display order.
    pub const ALL: [Self; 3] = [Self::Html, Self::Css, Self::Js];

    /// Tab button caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Js => "JavaScript",
        }
    }
}
