mod actions;

pub use actions::{generate_actions, DEFAULT_DIRECTIVE};
