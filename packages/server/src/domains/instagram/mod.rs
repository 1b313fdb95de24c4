pub mod activities;
pub mod models;

pub use activities::fetch_latest_post;
pub use models::{CanonicalPost, FetchError};
