pub mod chat_input;
pub mod model_select;
pub mod status_bar;
