pub mod config_viewer;

pub use config_viewer::*;
