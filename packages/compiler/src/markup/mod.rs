//! Parsed Markup
//!
//! The contract with the external markup parser: the immutable parsed tree
//! the compiler consumes, and its verbatim serialization.

pub mod ast;
pub mod serializer;

pub use ast::{ParsedElement, ParsedNode, ParsedText};
pub use serializer::{serialize_element, serialize_node, serialize_nodes};
