//! Model selector state: the dropdown's open/closed state machine
//!
//! The selected model id is owned by the caller and passed in on every event;
//! this state only tracks whether the overlay is showing and where the widget
//! was last drawn (for hit-testing).

use crate::registry::Registry;
use crate::surface::{ListenerId, Subscription, Surface};
use ratatui::layout::{Margin, Position, Rect};
use tracing::debug;

/// Whether the overlay is showing
#[derive(Debug, Default)]
pub enum SelectorState {
    /// Only the trigger is visible
    #[default]
    Closed,
    /// The overlay lists every option
    Open {
        /// Outside-click listener, released when this state is left
        outside_click: Subscription,
    },
}

impl SelectorState {
    /// Whether this is the `Open` state
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

/// Whether the selector handled a pointer event
///
/// `Consumed` stops the event from propagating to the global pointer channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The selector handled the event
    Consumed,
    /// The event was outside the selector
    Ignored,
}

/// Screen areas the selector occupied on its last render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorLayout {
    /// The always-visible trigger
    pub trigger: Rect,
    /// The overlay, when it was drawn
    pub overlay: Option<Rect>,
}

impl SelectorLayout {
    /// Whether `position` hits the trigger or the overlay
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.trigger.contains(position) || self.overlay.is_some_and(|o| o.contains(position))
    }

    /// Index of the overlay row under `position`, ignoring the border
    #[must_use]
    pub fn overlay_row(&self, position: Position) -> Option<usize> {
        let inner = self.overlay?.inner(Margin::new(1, 1));
        inner
            .contains(position)
            .then(|| usize::from(position.y - inner.y))
    }
}

/// State for the model selector dropdown
#[derive(Debug, Default)]
pub struct ModelSelectState {
    state: SelectorState,
    layout: Option<SelectorLayout>,
}

impl ModelSelectState {
    /// Create a closed selector
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SelectorState::Closed,
            layout: None,
        }
    }

    /// Whether the overlay is showing
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The current state tag
    #[must_use]
    pub const fn state(&self) -> &SelectorState {
        &self.state
    }

    /// Id of the outside-click listener, while open
    #[must_use]
    pub const fn listener_id(&self) -> Option<ListenerId> {
        match &self.state {
            SelectorState::Open { outside_click } => Some(outside_click.id()),
            SelectorState::Closed => None,
        }
    }

    /// Where the selector was last drawn
    #[must_use]
    pub const fn layout(&self) -> Option<SelectorLayout> {
        self.layout
    }

    /// Record where the selector was drawn; called by the widget on render
    pub const fn set_layout(&mut self, layout: SelectorLayout) {
        self.layout = Some(layout);
    }

    /// Activate the trigger: open when closed, close when open
    ///
    /// Always consumes the event so the opening press never reaches the
    /// outside-click listener it just registered.
    pub fn toggle(&mut self, surface: &Surface) -> EventOutcome {
        if self.is_open() {
            self.close();
        } else {
            self.open(surface);
        }
        EventOutcome::Consumed
    }

    /// Open the overlay; no-op when already open
    ///
    /// The outside-click listener only goes live on the next turn.
    pub fn open(&mut self, surface: &Surface) {
        if self.is_open() {
            return;
        }
        let outside_click = surface.subscribe_deferred();
        debug!(listener = ?outside_click.id(), "Model selector opened");
        self.state = SelectorState::Open { outside_click };
    }

    /// Close the overlay, releasing the outside-click listener
    ///
    /// Returns whether the selector was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        // Replacing the state drops the subscription guard.
        self.state = SelectorState::Closed;
        if let Some(layout) = &mut self.layout {
            layout.overlay = None;
        }
        if was_open {
            debug!("Model selector closed");
        }
        was_open
    }

    /// Activate an overlay option: report it to the owner, then close
    ///
    /// Ignored while closed, since no option is on screen.
    pub fn select(&mut self, id: &str, mut on_change: impl FnMut(&str)) -> EventOutcome {
        if !self.is_open() {
            return EventOutcome::Ignored;
        }
        debug!(model = id, "Model selected");
        on_change(id);
        self.close();
        EventOutcome::Consumed
    }

    /// Route a pointer-down that may target the trigger or the overlay
    ///
    /// Returns `Ignored` for presses outside both; the host should then
    /// deliver the press to the global pointer channel.
    pub fn handle_pointer_down(
        &mut self,
        position: Position,
        registry: &Registry,
        surface: &Surface,
        on_change: impl FnMut(&str),
    ) -> EventOutcome {
        let Some(layout) = self.layout else {
            return EventOutcome::Ignored;
        };

        // The overlay is drawn over the trigger when pinned against the top,
        // so it is hit-tested first.
        if self.is_open() && layout.overlay.is_some_and(|o| o.contains(position)) {
            // Border and padding presses land inside the overlay but pick nothing.
            return match layout
                .overlay_row(position)
                .and_then(|row| registry.options().get(row))
            {
                Some(option) => {
                    let id = option.id.clone();
                    self.select(&id, on_change)
                }
                None => EventOutcome::Consumed,
            };
        }

        if layout.trigger.contains(position) {
            return self.toggle(surface);
        }

        EventOutcome::Ignored
    }

    /// Handle a pointer-down delivered through the global channel
    ///
    /// Closes the overlay when `listener` is this selector's armed listener
    /// and `position` lies outside both the trigger and the overlay. Returns
    /// whether the selector closed.
    pub fn handle_outside_pointer(&mut self, listener: ListenerId, position: Position) -> bool {
        let SelectorState::Open { outside_click } = &self.state else {
            return false;
        };
        if outside_click.id() != listener || !outside_click.is_armed() {
            return false;
        }
        if self.layout.is_some_and(|layout| layout.contains(position)) {
            return false;
        }
        debug!(x = position.x, y = position.y, "Outside click dismissed model selector");
        self.close()
    }
}
