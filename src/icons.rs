//! Static glyphs used by the chat panel

use ratatui::style::Style;
use ratatui::text::Span;

/// A parameterless glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Navigate back
    Back,
    /// Stop a running response
    Stop,
    /// Send the composed message
    Send,
    /// Model vendor mark shown next to model labels
    Model,
    /// Marks the selected overlay row
    Check,
    /// Overlay is open
    ChevronUp,
    /// Overlay is closed
    ChevronDown,
}

impl Icon {
    /// The glyph text; every glyph is one column wide
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Back => "←",
            Self::Stop => "■",
            Self::Send => "↑",
            Self::Model => "✻",
            Self::Check => "✓",
            Self::ChevronUp => "▴",
            Self::ChevronDown => "▾",
        }
    }

    /// Chevron for the given overlay state
    #[must_use]
    pub const fn chevron(open: bool) -> Self {
        if open { Self::ChevronUp } else { Self::ChevronDown }
    }

    /// Render as a styled span
    #[must_use]
    pub fn span(self, style: Style) -> Span<'static> {
        Span::styled(self.glyph(), style)
    }
}
