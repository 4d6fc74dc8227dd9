//! Application state and logic for the demo chat panel
//!
//! The app owns the selected model id and passes it to the selector on every
//! render and pointer event; the selector reports changes back through a
//! callback. Each handled terminal event is one turn of the event loop and
//! ends with [`App::end_turn`].

mod event;

pub use event::{Event, Handler};

use crate::config::Config;
use crate::registry::Registry;
use crate::state::{EventOutcome, ModelSelectState};
use crate::surface::Surface;
use crate::ui::ModelSelectWidget;
use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use tracing::{debug, info};

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Id of the selected model; may name a model the registry lacks
    pub selected_model: String,

    /// Model selector dropdown state
    pub selector: ModelSelectState,

    /// Global pointer-down channel
    pub surface: Surface,

    /// Text typed into the message box
    pub input: String,

    /// Transient status message shown in the status bar
    pub status: Option<String>,

    /// Error shown in the status bar; takes precedence over `status`
    pub last_error: Option<String>,

    /// Whether a sent message is still waiting for its reply
    pub awaiting_reply: bool,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application, starting on `requested` when given
    #[must_use]
    pub fn new(config: Config, requested: Option<&str>) -> Self {
        let selected_model = config.initial_model(requested);
        info!(model = %selected_model, "Starting chat panel");
        Self {
            config,
            selected_model,
            selector: ModelSelectState::new(),
            surface: Surface::new(),
            input: String::new(),
            status: None,
            last_error: None,
            awaiting_reply: false,
            should_quit: false,
        }
    }

    /// The model registry
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.config.models
    }

    /// Hover text for the selector's trigger
    #[must_use]
    pub fn model_title(&self) -> String {
        ModelSelectWidget::new(self.registry(), &self.selected_model).title()
    }

    /// Handle a mouse event; only left-button presses matter
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            self.handle_pointer_down(Position::new(mouse.column, mouse.row));
        }
    }

    /// Deliver a pointer-down: first to the selector, then to the global channel
    pub fn handle_pointer_down(&mut self, position: Position) {
        let Self {
            config,
            selected_model,
            selector,
            surface,
            status,
            ..
        } = self;
        let registry = &config.models;

        let outcome = selector.handle_pointer_down(position, registry, surface, |id: &str| {
            *selected_model = id.to_string();
            *status = Some(format!("Model set to {}", registry.current(id).label));
        });

        if outcome == EventOutcome::Consumed {
            return;
        }

        for listener in surface.pointer_down() {
            selector.handle_outside_pointer(listener, position);
        }
    }

    /// Handle a key press
    ///
    /// Keys drive the host only; the selector is pointer-driven.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Esc if self.awaiting_reply => self.stop(),
            KeyCode::Esc => self.quit(),
            KeyCode::Char('q') if self.input.is_empty() => self.quit(),
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.send(),
            _ => {}
        }
    }

    fn current_label(&self) -> String {
        self.registry().current(&self.selected_model).label.clone()
    }

    /// Submit the typed message
    ///
    /// Only one message may wait for a reply at a time; sending another
    /// reports an error and keeps the input.
    pub fn send(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        let label = self.current_label();
        if self.awaiting_reply {
            self.set_error(format!("Still waiting for {label}; press Esc to stop"));
            return;
        }
        debug!(model = %self.selected_model, len = self.input.len(), "Message sent");
        self.clear_error();
        self.set_status(format!("Sent to {label}"));
        self.awaiting_reply = true;
        self.input.clear();
    }

    /// Abandon the pending reply
    pub fn stop(&mut self) {
        if !self.awaiting_reply {
            return;
        }
        debug!(model = %self.selected_model, "Reply stopped");
        self.awaiting_reply = false;
        self.clear_error();
        self.set_status("Stopped");
    }

    /// Idle turn: the pending reply, if any, arrives
    pub fn tick(&mut self) {
        if !self.awaiting_reply {
            return;
        }
        self.awaiting_reply = false;
        self.clear_error();
        self.set_status(format!("{} replied", self.current_label()));
    }

    /// Set an error message to display
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    /// Clear the current error message
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Set a status message to display
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Finish one event-loop turn
    pub fn end_turn(&self) {
        self.surface.end_turn();
    }

    /// Request the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SelectorLayout;
    use ratatui::layout::Rect;

    fn laid_out_app() -> App {
        let mut app = App::new(Config::default(), None);
        app.selector.set_layout(SelectorLayout {
            trigger: Rect::new(0, 20, 16, 1),
            overlay: None,
        });
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_new_uses_first_model() {
        let app = App::new(Config::default(), None);
        assert_eq!(app.selected_model, "claude-sonnet-4-5");
        assert!(!app.selector.is_open());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_new_keeps_unknown_requested_model() {
        let app = App::new(Config::default(), Some("gone"));
        assert_eq!(app.selected_model, "gone");
        assert_eq!(app.model_title(), "Current model: Sonnet 4.5");
    }

    #[test]
    fn test_trigger_press_does_not_reach_outside_listener() {
        let mut app = laid_out_app();
        app.handle_pointer_down(Position::new(2, 20));
        assert!(app.selector.is_open());
        app.end_turn();
        assert_eq!(app.surface.armed_count(), 1);
    }

    #[test]
    fn test_outside_press_closes_after_turn() {
        let mut app = laid_out_app();
        app.handle_pointer_down(Position::new(2, 20));

        app.handle_pointer_down(Position::new(50, 2));
        assert!(app.selector.is_open());

        app.end_turn();
        app.handle_pointer_down(Position::new(50, 2));
        assert!(!app.selector.is_open());
        assert_eq!(app.surface.listener_count(), 0);
        assert_eq!(app.selected_model, "claude-sonnet-4-5");
    }

    #[test]
    fn test_left_mouse_down_is_routed() {
        let mut app = laid_out_app();
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1,
            row: 20,
            modifiers: KeyModifiers::NONE,
        });
        assert!(app.selector.is_open());

        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 1,
            row: 20,
            modifiers: KeyModifiers::NONE,
        });
        assert!(app.selector.is_open());
    }

    #[test]
    fn test_keys_edit_input_and_quit() {
        let mut app = App::new(Config::default(), None);
        app.handle_key_event(key(KeyCode::Char('h')));
        app.handle_key_event(key(KeyCode::Char('q')));
        assert_eq!(app.input, "hq");
        assert!(!app.should_quit);

        app.handle_key_event(key(KeyCode::Backspace));
        assert_eq!(app.input, "h");

        app.handle_key_event(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_quits_with_empty_input() {
        let mut app = App::new(Config::default(), None);
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_send_reports_model_and_clears() {
        let mut app = App::new(Config::default(), Some("claude-opus-4-5"));
        app.input = "hello".to_string();
        app.send();
        assert!(app.input.is_empty());
        assert_eq!(app.status.as_deref(), Some("Sent to Opus 4.5"));
        assert!(app.awaiting_reply);
    }

    #[test]
    fn test_send_while_awaiting_reply_is_an_error() {
        let mut app = App::new(Config::default(), None);
        app.input = "first".to_string();
        app.send();
        app.input = "second".to_string();
        app.send();

        assert_eq!(app.input, "second");
        assert_eq!(
            app.last_error.as_deref(),
            Some("Still waiting for Sonnet 4.5; press Esc to stop")
        );
        assert!(app.awaiting_reply);
    }

    #[test]
    fn test_tick_delivers_reply_and_clears_error() {
        let mut app = App::new(Config::default(), None);
        app.tick();
        assert_eq!(app.status, None);

        app.input = "hello".to_string();
        app.send();
        app.set_error("stale");
        app.tick();

        assert!(!app.awaiting_reply);
        assert_eq!(app.last_error, None);
        assert_eq!(app.status.as_deref(), Some("Sonnet 4.5 replied"));
    }

    #[test]
    fn test_esc_stops_pending_reply_before_quitting() {
        let mut app = App::new(Config::default(), None);
        app.input = "hello".to_string();
        app.send();

        app.handle_key_event(key(KeyCode::Esc));
        assert!(!app.should_quit);
        assert!(!app.awaiting_reply);
        assert_eq!(app.status.as_deref(), Some("Stopped"));

        app.handle_key_event(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_send_ignores_blank_input() {
        let mut app = App::new(Config::default(), None);
        app.input = "   ".to_string();
        app.send();
        assert_eq!(app.status, None);
    }
}
