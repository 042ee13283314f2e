mod state;

pub use state::{App, DialogState, Focus, MessageLevel, StatusMessage};
