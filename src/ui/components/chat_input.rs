//! Chat input box widget

use crate::icons::Icon;
use crate::ui::colors;
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Widget for the message input box
#[derive(Debug, Clone, Copy)]
pub struct Widget<'a> {
    text: &'a str,
    busy: bool,
}

impl<'a> Widget<'a> {
    /// Create an input box showing `text`
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self { text, busy: false }
    }

    /// Show the stop glyph instead of send while a response streams
    #[must_use]
    pub const fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    /// The action glyph at the start of the box
    #[must_use]
    pub const fn action(&self) -> Icon {
        if self.busy { Icon::Stop } else { Icon::Send }
    }

    /// Convert to a Paragraph widget
    #[must_use]
    pub fn to_paragraph(&self) -> Paragraph<'a> {
        let action_style = if self.busy {
            Style::default().fg(colors::ACCENT_NEGATIVE)
        } else {
            Style::default().fg(colors::ACCENT_POSITIVE)
        };

        let body = if self.text.is_empty() {
            Span::styled("Type a message...", Style::default().fg(colors::TEXT_MUTED))
        } else {
            Span::styled(self.text, Style::default().fg(colors::TEXT_PRIMARY))
        };

        Paragraph::new(Line::from(vec![
            self.action().span(action_style),
            Span::raw(" "),
            body,
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        )
        .style(Style::default().bg(colors::INPUT_BG))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_action_follows_busy() {
        assert_eq!(Widget::new("").action(), Icon::Send);
        assert_eq!(Widget::new("").busy(true).action(), Icon::Stop);
    }

    /// The text row inside the border
    fn rendered(widget: Widget<'_>) -> Result<String, Box<dyn std::error::Error>> {
        let mut terminal = Terminal::new(TestBackend::new(30, 3))?;
        terminal.draw(|frame| frame.render_widget(widget.to_paragraph(), frame.area()))?;
        let buffer = terminal.backend().buffer();
        Ok((0..buffer.area.width)
            .filter_map(|x| buffer.cell((x, 1)).map(ratatui::buffer::Cell::symbol))
            .collect())
    }

    #[test]
    fn test_empty_shows_placeholder_and_send() -> Result<(), Box<dyn std::error::Error>> {
        let row = rendered(Widget::new(""))?;
        assert!(row.starts_with("│↑ Type a message..."));
        Ok(())
    }

    #[test]
    fn test_busy_shows_text_and_stop() -> Result<(), Box<dyn std::error::Error>> {
        let row = rendered(Widget::new("hello").busy(true))?;
        assert!(row.starts_with("│■ hello"));
        assert!(!row.contains("Type a message"));
        Ok(())
    }
}
