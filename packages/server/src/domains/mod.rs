// Business domains
pub mod instagram;
pub mod message;
pub mod publishing;
pub mod relay;
