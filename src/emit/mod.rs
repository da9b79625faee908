mod json;
mod writer;

pub use json::JsonReport;
pub use writer::{actions_path, read_actions, write_actions};
