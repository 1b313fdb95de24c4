pub mod fetch_latest_post;

pub use fetch_latest_post::fetch_latest_post;
