//! TUI rendering
//!
//! Layout, top to bottom: header, message pane, input box, toolbar with the
//! model selector, status bar. The selector is drawn last so its overlay
//! covers the message pane.

use crate::app::App;
use crate::icons::Icon;
use crate::ui::{ChatInputWidget, ModelSelectWidget, StatusBarWidget, colors};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_messages(frame, chunks[1]);
    frame.render_widget(
        ChatInputWidget::new(&app.input)
            .busy(app.awaiting_reply)
            .to_paragraph(),
        chunks[2],
    );

    let status_bar = match (&app.last_error, &app.status) {
        (Some(error), _) => StatusBarWidget::error(error.as_str()),
        (None, Some(message)) => StatusBarWidget::status(message.as_str()),
        (None, None) => StatusBarWidget::normal(app.model_title()),
    };
    frame.render_widget(status_bar.to_paragraph(), chunks[4]);

    let selector = ModelSelectWidget::new(&app.config.models, &app.selected_model)
        .overlay_gap(app.config.overlay_gap);
    frame.render_stateful_widget(selector, toolbar_slot(chunks[3]), &mut app.selector);
}

/// Where the selector's trigger goes within the toolbar row
#[must_use]
pub fn toolbar_slot(toolbar: Rect) -> Rect {
    Rect {
        x: toolbar.x.saturating_add(1),
        y: toolbar.y,
        width: toolbar.width.saturating_sub(1),
        height: toolbar.height,
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect) {
    let line = Line::from(vec![
        Span::raw(" "),
        Icon::Back.span(Style::default().fg(colors::TEXT_DIM)),
        Span::styled(
            " Chat",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(colors::SURFACE)),
        area,
    );
}

fn render_messages(frame: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        "No messages yet",
        Style::default().fg(colors::TEXT_MUTED),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER)),
    );
    frame.render_widget(paragraph, area);
}
