//! Resources read from a directory on disk

use super::ResourceSet;
use crate::error::AssetError;
use crate::logger;
use hyper::body::Bytes;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Resource set rooted at a directory
///
/// Logical paths are relative to the root. Paths that would leave the root
/// are reported as absent.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        contained.then(|| self.root.join(relative))
    }
}

impl ResourceSet for DirectoryAssets {
    fn load(&self, path: &str) -> Result<Bytes, AssetError> {
        let Some(file_path) = self.resolve(path) else {
            logger::log_warning(&format!("Path traversal attempt blocked: {path}"));
            return Err(AssetError::NotFound(path.to_string()));
        };

        match std::fs::read(&file_path) {
            Ok(content) => Ok(Bytes::from(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(AssetError::NotFound(path.to_string()))
            }
            Err(source) => Err(AssetError::Io {
                path: file_path.display().to_string(),
                source,
            }),
        }
    }
}
