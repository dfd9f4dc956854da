use std::{path::PathBuf, sync::Arc};

use crate::service::F5ConfigSource;

#[derive(Clone)]
pub struct AppState {
    pub f5_source: Arc<F5ConfigSource>,
    pub statics_dir: PathBuf,
}

impl AppState {
    pub fn new(f5_source: F5ConfigSource, statics_dir: impl Into<PathBuf>) -> Self {
        Self {
            f5_source: Arc::new(f5_source),
            statics_dir: statics_dir.into(),
        }
    }
}
