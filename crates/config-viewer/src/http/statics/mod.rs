use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

/// Serves the Trunk `dist` bundle. Paths without a matching file get `index.html`.
pub fn service(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}
