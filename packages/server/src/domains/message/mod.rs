//! Rewrites a fetched post into a short promotional message.

pub mod activities;
pub mod prompts;

pub use activities::{generate_message, GenerateError, NO_DATA_MESSAGE};
