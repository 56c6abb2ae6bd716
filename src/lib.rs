pub mod config;
pub mod error;
pub mod log;
pub mod network;
pub mod routers;
#[cfg(test)]
pub mod tests;
pub mod utils;
