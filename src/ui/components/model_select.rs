//! Model selector widget
//!
//! Draws the trigger into the area it is given and, while open, an overlay
//! anchored above the trigger. The overlay may extend outside the widget's
//! area; it is clamped to the buffer instead.

use crate::icons::Icon;
use crate::registry::{ModelOption, Registry};
use crate::state::{ModelSelectState, SelectorLayout};
use crate::ui::colors;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, StatefulWidget, Widget as _},
};

/// Rows between the top of the trigger and the bottom of the overlay.
pub const DEFAULT_OVERLAY_GAP: u16 = 1;

/// Widget for the model selector
#[derive(Debug, Clone, Copy)]
pub struct Widget<'a> {
    registry: &'a Registry,
    selected: &'a str,
    overlay_gap: u16,
}

impl<'a> Widget<'a> {
    /// Create a selector for `registry` showing `selected`
    #[must_use]
    pub const fn new(registry: &'a Registry, selected: &'a str) -> Self {
        Self {
            registry,
            selected,
            overlay_gap: DEFAULT_OVERLAY_GAP,
        }
    }

    /// Set the gap between trigger and overlay
    #[must_use]
    pub const fn overlay_gap(mut self, gap: u16) -> Self {
        self.overlay_gap = gap;
        self
    }

    /// The option shown on the trigger
    #[must_use]
    pub fn current(&self) -> &'a ModelOption {
        self.registry.current(self.selected)
    }

    /// Hover text describing the current model
    #[must_use]
    pub fn title(&self) -> String {
        format!("Current model: {}", self.current().label)
    }

    /// The trigger's content
    #[must_use]
    pub fn trigger_line(&self, open: bool) -> Line<'a> {
        let bg = if open {
            colors::SURFACE_HIGHLIGHT
        } else {
            colors::INPUT_BG
        };
        let base = Style::default().fg(colors::TEXT_PRIMARY).bg(bg);

        Line::from(vec![
            Span::styled(" ", base),
            Icon::Model.span(base.fg(colors::ACCENT_MODEL)),
            Span::styled(" ", base),
            Span::styled(self.current().label.as_str(), base),
            Span::styled(" ", base),
            Icon::chevron(open).span(base.fg(colors::TEXT_DIM)),
            Span::styled(" ", base),
        ])
    }

    /// Columns the trigger occupies when unclipped
    #[must_use]
    pub fn trigger_width(&self) -> u16 {
        to_u16(self.trigger_line(false).width())
    }

    /// Columns the overlay occupies when unclipped
    #[must_use]
    pub fn overlay_width(&self) -> u16 {
        // " ✻ " + label + " ✓ " + borders
        to_u16(self.widest_label()).saturating_add(8)
    }

    /// Rows the overlay occupies when unclipped
    #[must_use]
    pub fn overlay_height(&self) -> u16 {
        to_u16(self.registry.len()).saturating_add(2)
    }

    fn widest_label(&self) -> usize {
        self.registry
            .iter()
            .map(|option| Span::raw(option.label.as_str()).width())
            .max()
            .unwrap_or(0)
    }

    fn overlay_lines(&self) -> Vec<Line<'a>> {
        let width = self.widest_label();
        self.registry
            .iter()
            .map(|option| {
                let is_selected = option.id == self.selected;
                let row_style = if is_selected {
                    Style::default()
                        .fg(colors::TEXT_PRIMARY)
                        .bg(colors::SURFACE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::TEXT_PRIMARY)
                };
                let padding = width.saturating_sub(Span::raw(option.label.as_str()).width());
                let check = if is_selected {
                    Icon::Check.span(row_style.fg(colors::ACCENT_POSITIVE))
                } else {
                    Span::styled(" ", row_style)
                };

                Line::from(vec![
                    Span::styled(" ", row_style),
                    Icon::Model.span(row_style.fg(colors::ACCENT_MODEL)),
                    Span::styled(" ", row_style),
                    Span::styled(option.label.as_str(), row_style),
                    Span::styled(" ".repeat(padding + 1), row_style),
                    check,
                    Span::styled(" ", row_style),
                ])
            })
            .collect()
    }
}

impl StatefulWidget for Widget<'_> {
    type State = ModelSelectState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let trigger = trigger_rect(area, self.trigger_width());
        let open = state.is_open();

        Paragraph::new(self.trigger_line(open)).render(trigger, buf);

        let overlay = open.then(|| {
            let overlay = overlay_rect(
                trigger,
                self.overlay_width(),
                self.overlay_height(),
                self.overlay_gap,
                buf.area,
            );
            Clear.render(overlay, buf);
            Paragraph::new(self.overlay_lines())
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(colors::BORDER)),
                )
                .style(Style::default().bg(colors::OVERLAY_BG))
                .render(overlay, buf);
            overlay
        });

        state.set_layout(SelectorLayout { trigger, overlay });
    }
}

/// The trigger's rectangle: left-aligned in `area`, one row tall
#[must_use]
pub fn trigger_rect(area: Rect, width: u16) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: width.min(area.width),
        height: area.height.min(1),
    }
}

/// The overlay's rectangle: above `trigger`, left-aligned with it
///
/// `gap` rows separate the overlay from the trigger. The result is shrunk and
/// shifted to stay within `bounds`; when there is no room above, it is pinned
/// to the top of `bounds` and may cover the trigger, in which case it takes
/// pointer presses ahead of the trigger.
#[must_use]
pub fn overlay_rect(trigger: Rect, width: u16, height: u16, gap: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);

    let y = trigger
        .y
        .saturating_sub(gap)
        .saturating_sub(height)
        .max(bounds.y);
    let x = trigger
        .x
        .min(bounds.right().saturating_sub(width))
        .max(bounds.x);

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
