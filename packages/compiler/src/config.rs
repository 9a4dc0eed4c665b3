//! View Configuration
//!
//! The component catalog read by the compiler during a pass. Populated by
//! discovery or by direct registration; the compile pass itself never
//! writes to it.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::view_component::{AnonymousViewComponent, ComponentRenderer};

/// A catalog entry for a tag name.
pub enum ComponentRegistration {
    /// An already-constructed component instance.
    Instance(Arc<dyn ComponentRenderer>),
    /// A key resolved through the external resolution service on first use.
    Provider(String),
    /// A component extracted from a marked source file.
    Anonymous(AnonymousViewComponent),
}

impl fmt::Debug for ComponentRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentRegistration::Instance(renderer) => {
                f.debug_tuple("Instance").field(&renderer.name()).finish()
            }
            ComponentRegistration::Provider(key) => {
                f.debug_tuple("Provider").field(key).finish()
            }
            ComponentRegistration::Anonymous(component) => {
                f.debug_tuple("Anonymous").field(&component.name).finish()
            }
        }
    }
}

/// Compiler configuration: the tag-name → component catalog.
#[derive(Debug, Default)]
pub struct ViewConfig {
    components: IndexMap<String, ComponentRegistration>,
}

impl ViewConfig {
    pub fn new() -> Self {
        ViewConfig::default()
    }

    /// Register a constructed component under its own name.
    pub fn register_instance(&mut self, renderer: Arc<dyn ComponentRenderer>) {
        self.components.insert(
            renderer.name().to_string(),
            ComponentRegistration::Instance(renderer),
        );
    }

    /// Register an implementation key to be instantiated through the
    /// resolution service when the tag is first compiled.
    pub fn register_provider(&mut self, tag_name: impl Into<String>, key: impl Into<String>) {
        self.components
            .insert(tag_name.into(), ComponentRegistration::Provider(key.into()));
    }

    pub fn register_anonymous(&mut self, component: AnonymousViewComponent) {
        self.components.insert(
            component.name.clone(),
            ComponentRegistration::Anonymous(component),
        );
    }

    pub fn registration(&self, tag_name: &str) -> Option<&ComponentRegistration> {
        self.components.get(tag_name)
    }

    pub fn is_component(&self, tag_name: &str) -> bool {
        self.components.contains_key(tag_name)
    }

    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Anonymous entries, in registration order. This is what the discovery
    /// cache persists.
    pub fn anonymous_components(&self) -> Vec<&AnonymousViewComponent> {
        self.components
            .values()
            .filter_map(|registration| match registration {
                ComponentRegistration::Anonymous(component) => Some(component),
                _ => None,
            })
            .collect()
    }
}
