pub mod activities;
pub mod models;

pub use activities::Publisher;
pub use models::{PublishResult, NOT_INITIALIZED};
