//! View Component Discovery
//!
//! Scans component-definition files under a root directory and registers
//! every extracted component in the catalog. Discovery results can be
//! persisted to a cache file and restored without rescanning.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::glob;

use crate::config::ViewConfig;
use crate::view_component::{extract_anonymous_component, AnonymousViewComponent};

pub struct ViewComponentDiscovery {
    cache_path: PathBuf,
}

impl ViewComponentDiscovery {
    pub fn new(cache_path: impl Into<PathBuf>) -> Self {
        ViewComponentDiscovery {
            cache_path: cache_path.into(),
        }
    }

    /// Scan `root` recursively for `*.html` component-definition files.
    /// Files without the marker structure define no component and are
    /// skipped silently. Returns the number of components registered.
    pub fn discover(&self, root: &Path, config: &mut ViewConfig) -> io::Result<usize> {
        let pattern = root.join("**").join("*.html");
        let entries = glob(&pattern.to_string_lossy())
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

        let mut registered = 0;
        for path in entries.filter_map(Result::ok) {
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            if let Some(component) = extract_anonymous_component(&path, &content) {
                tracing::debug!(
                    name = %component.name,
                    path = %path.display(),
                    "discovered view component"
                );
                config.register_anonymous(component);
                registered += 1;
            }
        }

        tracing::info!(
            count = registered,
            root = %root.display(),
            "view component discovery finished"
        );
        Ok(registered)
    }

    pub fn has_cache(&self) -> bool {
        self.cache_path.exists()
    }

    /// Persist the catalog's anonymous components to the cache file.
    pub fn store_cache(&self, config: &ViewConfig) -> io::Result<()> {
        let components: Vec<&AnonymousViewComponent> = config.anonymous_components();
        let serialized = serde_json::to_string_pretty(&components)?;
        if let Some(parent) = self.cache_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.cache_path, serialized)
    }

    /// Register every cached component into `config`. Returns the number
    /// restored.
    pub fn restore_cache(&self, config: &mut ViewConfig) -> io::Result<usize> {
        let content = fs::read_to_string(&self.cache_path)?;
        let components: Vec<AnonymousViewComponent> = serde_json::from_str(&content)?;
        let count = components.len();
        for component in components {
            config.register_anonymous(component);
        }
        Ok(count)
    }

    /// Remove the cache file. Not an error if it never existed.
    pub fn destroy_cache(&self) -> io::Result<()> {
        match fs::remove_file(&self.cache_path) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
