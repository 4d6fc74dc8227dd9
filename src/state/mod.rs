//! Widget state types.

mod model_selector;

pub use model_selector::{EventOutcome, ModelSelectState, SelectorLayout, SelectorState};
