mod client;
mod config;

pub use client::ClientConfig;
pub use config::Config;
