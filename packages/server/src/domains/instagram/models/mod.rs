pub mod canonical_post;

pub use canonical_post::*;
