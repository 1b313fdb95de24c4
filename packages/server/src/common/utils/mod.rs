pub mod post_length;

pub use post_length::*;
