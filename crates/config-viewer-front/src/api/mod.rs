pub mod client;
pub mod config;

pub use config::{load_config, ConfigSource, HttpConfigSource};
