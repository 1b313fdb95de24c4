// HTTP routes
pub mod auto_post;
pub mod health;
pub mod instagram;
pub mod tweets;

pub use auto_post::*;
pub use health::*;
pub use instagram::*;
pub use tweets::*;
