//! View Components
//!
//! The component model: registered implementations resolved through the
//! catalog, and anonymous components extracted from marked source files.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{ComponentRegistration, ViewConfig};
use crate::parse_util::CompileError;

/// A registered component implementation: a named render unit that accepts
/// already-compiled slot content.
pub trait ComponentRenderer: Send + Sync {
    fn name(&self) -> &str;
    fn render(&self, slot: &str) -> String;
}

/// A component resolved for a tag during compilation.
#[derive(Clone)]
pub enum ViewComponent {
    Registered(Arc<dyn ComponentRenderer>),
    Anonymous(AnonymousViewComponent),
}

impl ViewComponent {
    pub fn name(&self) -> &str {
        match self {
            ViewComponent::Registered(renderer) => renderer.name(),
            ViewComponent::Anonymous(component) => &component.name,
        }
    }
}

impl fmt::Debug for ViewComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewComponent::Registered(renderer) => {
                f.debug_tuple("Registered").field(&renderer.name()).finish()
            }
            ViewComponent::Anonymous(component) => {
                f.debug_tuple("Anonymous").field(&component.name).finish()
            }
        }
    }
}

/// A component extracted from a marked source file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnonymousViewComponent {
    pub name: String,
    /// Effective source: file header plus the text between the markers.
    pub source: String,
    /// File the component was extracted from.
    pub path: PathBuf,
}

/// Opening/closing marker pair delimiting an anonymous component body.
/// First match over the file wins; later pairs are ignored as trailer text.
static ANONYMOUS_COMPONENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)^(?P<header>.*?)<x-component\s+name="(?P<name>[A-Za-z0-9_-]+)"\s*>(?P<body>.*?)</x-component>"#,
    )
    .unwrap()
});

/// Extract an anonymous component from a source file's content.
///
/// Returns `None` when the file carries no opening marker, no `name`
/// attribute, or no matching closing marker; such files simply define no
/// component.
pub fn extract_anonymous_component(
    path: &Path,
    content: &str,
) -> Option<AnonymousViewComponent> {
    let trimmed = content.trim_start();
    let captures = ANONYMOUS_COMPONENT.captures(trimmed)?;

    let header = captures.name("header").unwrap().as_str().trim();
    let body = captures.name("body").unwrap().as_str().trim_start();

    Some(AnonymousViewComponent {
        name: captures.name("name").unwrap().as_str().to_string(),
        source: format!("{header}{body}"),
        path: path.to_path_buf(),
    })
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// External object-resolution service used to instantiate catalog entries
/// that name an implementation rather than holding a constructed instance.
pub trait ComponentProvider: Send + Sync {
    fn resolve(&self, key: &str) -> Result<Arc<dyn ComponentRenderer>, BoxError>;
}

/// Provider used when no resolution service is configured. Catalogs that
/// only hold instances and anonymous components never reach it.
pub struct UnconfiguredProvider;

impl ComponentProvider for UnconfiguredProvider {
    fn resolve(&self, key: &str) -> Result<Arc<dyn ComponentRenderer>, BoxError> {
        Err(format!("no component resolution service configured (key `{key}`)").into())
    }
}

/// Resolves tag names to components through the catalog.
pub struct ComponentResolver<'a> {
    config: &'a ViewConfig,
    provider: &'a dyn ComponentProvider,
}

impl<'a> ComponentResolver<'a> {
    pub fn new(config: &'a ViewConfig, provider: &'a dyn ComponentProvider) -> Self {
        ComponentResolver { config, provider }
    }

    /// Resolve a tag name. `Ok(None)` means the tag is not a component and
    /// degrades to a generic element. Resolution-service failures propagate
    /// unchanged as the error source.
    pub fn resolve(&self, tag_name: &str) -> Result<Option<ViewComponent>, CompileError> {
        let component = match self.config.registration(tag_name) {
            None => None,
            Some(ComponentRegistration::Instance(renderer)) => {
                Some(ViewComponent::Registered(Arc::clone(renderer)))
            }
            Some(ComponentRegistration::Provider(key)) => {
                let renderer = self.provider.resolve(key).map_err(|source| {
                    CompileError::ComponentResolution {
                        name: tag_name.to_string(),
                        source,
                    }
                })?;
                Some(ViewComponent::Registered(renderer))
            }
            Some(ComponentRegistration::Anonymous(component)) => {
                Some(ViewComponent::Anonymous(component.clone()))
            }
        };

        Ok(component)
    }
}
