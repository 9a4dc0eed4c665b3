#![deny(clippy::all)]

//! View Compiler
//!
//! Compiles a parsed markup tree into a typed element tree through a
//! pluggable attribute-rewrite pipeline. Tag names resolve to raw regions,
//! registered or file-defined components, slot placeholders, or generic
//! elements; attribute rules may capture values, wrap nodes in iteration
//! constructs, or consume a node into a preceding loop's fallback branch.
//! Component discovery and a path-keyed artifact cache sit alongside the
//! core pass.

pub mod attributes;
pub mod compiler;
pub mod config;
pub mod discovery;
pub mod elements;
pub mod markup;
pub mod parse_util;
pub mod util;
pub mod view_cache;
pub mod view_component;

// Re-exports
pub use compiler::ViewCompiler;
pub use config::{ComponentRegistration, ViewConfig};
pub use discovery::ViewComponentDiscovery;
pub use elements::{
    CodeEmitter, CompiledView, Element, ElementId, ElementTree, TreeSerializer,
};
pub use markup::ParsedNode;
pub use parse_util::{CompileError, NodePath};
pub use view_cache::{ViewCache, ViewCacheError};
pub use view_component::{
    AnonymousViewComponent, ComponentProvider, ComponentRenderer, ViewComponent,
};
