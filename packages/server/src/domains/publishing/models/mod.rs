pub mod publish_result;

pub use publish_result::*;
