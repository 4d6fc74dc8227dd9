//! Status bar widget

use crate::ui::colors;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Widget for displaying the status bar
#[derive(Debug)]
pub struct Widget {
    content: StatusContent,
}

/// Content type for the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusContent {
    /// Current model description and key hints
    Normal {
        /// Hover text of the model selector
        model_title: String,
    },
    /// Error message
    Error(String),
    /// Status message
    Status(String),
}

impl Widget {
    /// Create a new status bar showing the current model
    #[must_use]
    pub fn normal(model_title: impl Into<String>) -> Self {
        Self {
            content: StatusContent::Normal {
                model_title: model_title.into(),
            },
        }
    }

    /// Create a new status bar with an error message
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: StatusContent::Error(message.into()),
        }
    }

    /// Create a new status bar with a status message
    #[must_use]
    pub fn status(message: impl Into<String>) -> Self {
        Self {
            content: StatusContent::Status(message.into()),
        }
    }

    /// The content this bar shows
    #[must_use]
    pub const fn content(&self) -> &StatusContent {
        &self.content
    }

    /// Convert to a Paragraph widget
    #[must_use]
    pub fn to_paragraph(&self) -> Paragraph<'_> {
        let span = match &self.content {
            StatusContent::Error(msg) => Span::styled(
                format!(" Error: {msg} "),
                Style::default()
                    .fg(colors::ACCENT_NEGATIVE)
                    .add_modifier(Modifier::BOLD),
            ),
            StatusContent::Status(msg) => Span::styled(
                format!(" {msg} "),
                Style::default().fg(colors::ACCENT_POSITIVE),
            ),
            StatusContent::Normal { model_title } => Span::styled(
                format!(" {model_title} | click the model to switch | [q]uit "),
                Style::default().fg(colors::TEXT_DIM),
            ),
        };

        Paragraph::new(Line::from(span)).style(Style::default().bg(colors::SURFACE))
    }
}
