//! UI components for the chat panel
//!
//! This module contains the model selector widget and the reusable pieces the
//! demo host draws around it.

pub mod colors;
mod components;

pub use components::{
    chat_input::Widget as ChatInputWidget,
    model_select::{DEFAULT_OVERLAY_GAP, Widget as ModelSelectWidget, overlay_rect, trigger_rect},
    status_bar::{StatusContent, Widget as StatusBarWidget},
};
