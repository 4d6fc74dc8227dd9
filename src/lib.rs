//! model-select - Model selection dropdown for a terminal chat panel
//!
//! The selector shows the current model on a trigger and, when activated,
//! an overlay listing every model. Choosing one reports its id to the owner.
//! Clicks outside the selector dismiss the overlay; the outside-click
//! listener is tied to the open state and released whenever it ends.

pub mod app;
pub mod config;
pub mod icons;
pub mod paths;
pub mod registry;
pub mod state;
pub mod surface;
pub mod tui;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use registry::{ModelOption, Registry, RegistryError};
pub use state::{EventOutcome, ModelSelectState, SelectorState};
pub use surface::{ListenerId, Subscription, Surface};
pub use ui::ModelSelectWidget;
