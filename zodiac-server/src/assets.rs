//! Prebuilt front-end served as the router fallback.
//!
//! A request path that names a file under the asset root is served as-is.
//! Everything else, including directories and paths that try to climb out
//! of the root with `..`, gets the index document so client-side routing
//! keeps working.

use std::path::PathBuf;

use tower_http::services::{ServeDir, ServeFile};
use zodiac_core::config::AssetsConfig;

#[derive(Debug, Clone)]
pub struct AssetRoot {
    pub dir: PathBuf,
    pub index: PathBuf,
}

impl AssetRoot {
    pub fn new(dir: impl Into<PathBuf>, index: &str) -> Self {
        let dir = dir.into();
        let index = dir.join(index);
        Self { dir, index }
    }

    pub fn from_config(config: &AssetsConfig) -> std::io::Result<Self> {
        Ok(Self::new(config.resolve()?, &config.index))
    }

    pub fn has_index(&self) -> bool {
        self.index.is_file()
    }

    /// `GET`/`HEAD` only; other methods get 405 from `ServeDir`. When the
    /// index itself is missing the fallback answers 404.
    pub fn service(&self) -> ServeDir<ServeFile> {
        if !self.has_index() {
            tracing::warn!(index = %self.index.display(), "static index document not found");
        }
        ServeDir::new(&self.dir)
            .append_index_html_on_directories(false)
            .fallback(ServeFile::new(&self.index))
    }
}
