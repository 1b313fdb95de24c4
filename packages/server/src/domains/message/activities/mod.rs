pub mod generate_message;

pub use generate_message::*;
