//! View Cache
//!
//! Path-keyed compiled-artifact cache: given a source path and a
//! compilation closure, returns the on-disk artifact for that path,
//! invoking the closure only on a miss (or always, when disabled).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use xxhash_rust::xxh3::xxh3_64;

use crate::parse_util::CompileError;

#[derive(Debug, Error)]
pub enum ViewCacheError {
    #[error("view cache i/o failed")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Compile(#[from] CompileError),
}

#[derive(Debug, Clone)]
pub struct ViewCache {
    directory: PathBuf,
    enabled: bool,
}

impl ViewCache {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        ViewCache {
            directory: directory.into(),
            enabled: true,
        }
    }

    /// A disabled cache still writes artifacts but never reuses them.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Artifact location for a source path. Keyed on the path, not the
    /// content: recompiling a changed source overwrites the same artifact.
    pub fn artifact_path(&self, source_path: &str) -> PathBuf {
        let key = xxh3_64(source_path.as_bytes());
        self.directory.join(format!("{key:016x}.html"))
    }

    /// Return the cached artifact path for `source_path`, compiling through
    /// the closure when no valid cached entry exists.
    pub fn cached_view_path<F>(&self, source_path: &str, compile: F) -> Result<PathBuf, ViewCacheError>
    where
        F: FnOnce() -> Result<String, CompileError>,
    {
        let artifact = self.artifact_path(source_path);

        if self.enabled && artifact.exists() {
            tracing::debug!(path = source_path, "compiled view cache hit");
            return Ok(artifact);
        }

        let compiled = compile()?;
        fs::create_dir_all(&self.directory)?;
        fs::write(&artifact, compiled)?;
        tracing::debug!(
            path = source_path,
            artifact = %artifact.display(),
            "stored compiled view"
        );

        Ok(artifact)
    }

    /// Remove every stored artifact.
    pub fn clear(&self) -> io::Result<()> {
        if !self.directory.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(&self.directory)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                fs::remove_file(entry.path())?;
            }
        }

        Ok(())
    }
}
