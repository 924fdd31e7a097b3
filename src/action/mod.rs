mod actions;
mod history;

pub use actions::{Action, TextBoxProperties};
pub use history::{ActionLog, DEFAULT_HISTORY_LIMIT};
