use std::{io::ErrorKind, path::PathBuf};

use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::AppError;

const MOCK_DECLARATION: &str = include_str!("../../assets/f5_mock.json");

/// Where the document served at `/api/f5Config` comes from.
///
/// Files are re-read on every request so edits show up on the next page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum F5ConfigSource {
    Mock,
    File(PathBuf),
}

impl F5ConfigSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(path),
            None => Self::Mock,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Mock => "built-in mock declaration".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    #[instrument(skip(self), fields(source = %self.describe()))]
    pub async fn load(&self) -> Result<Value, AppError> {
        let raw = match self {
            Self::Mock => MOCK_DECLARATION.to_string(),
            Self::File(path) => tokio::fs::read_to_string(path).await.map_err(|source| {
                if source.kind() == ErrorKind::NotFound {
                    AppError::F5ConfigNotFound(path.clone())
                } else {
                    AppError::F5ConfigRead {
                        path: path.clone(),
                        source,
                    }
                }
            })?,
        };

        let document: Value = serde_json::from_str(&raw)?;
        debug!(bytes = raw.len(), "F5 configuration loaded");
        Ok(document)
    }
}
