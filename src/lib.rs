pub mod app;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod extension;
pub mod handlers;
pub mod layers;
pub mod sinks;
pub mod utils;
