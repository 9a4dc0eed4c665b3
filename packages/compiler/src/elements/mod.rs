//! Elements
//!
//! The compiled intermediate tree: arena-held element variants, the factory
//! that builds them from parsed markup, and the structural serializer.

pub mod element;
pub mod factory;
pub mod serializer;

pub use element::{AttributeMap, Element, ElementId, ElementTree};
pub use factory::{CompiledView, ElementFactory, FactoryContext};
pub use serializer::{CodeEmitter, TreeSerializer};
