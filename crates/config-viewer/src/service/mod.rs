pub mod f5_config;

pub use f5_config::F5ConfigSource;
