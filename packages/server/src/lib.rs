// Instagram → X relay - API core
//
// Fetches the latest Instagram post of an account, rewrites its caption with
// an LLM and republishes it on X. Vendor clients sit behind kernel traits so
// every pipeline step can run against mocks.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
