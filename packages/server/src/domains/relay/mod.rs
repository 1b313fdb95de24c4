//! Fetch → generate → publish, composed per request.

pub mod models;
pub mod service;

pub use models::{AnalyzedPost, AutoPostResult, SourcePost};
pub use service::Relay;
