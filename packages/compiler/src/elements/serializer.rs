//! Element Serializer
//!
//! The code-emission seam and its structural implementation: renders an
//! element tree back to markup text. The real emission backend is an
//! external collaborator; this serializer stands in for it in tests,
//! diagnostics, and the CLI.

use crate::view_component::{AnonymousViewComponent, ViewComponent};

use super::element::{Element, ElementId, ElementTree};

/// The external code-emission stage: turns a finished element tree into
/// output text.
pub trait CodeEmitter: Send + Sync {
    fn emit(&self, tree: &ElementTree) -> String;
}

/// Slot markers recognized by the textual anonymous-component rendering.
const SLOT_MARKERS: [&str; 3] = ["<x-slot />", "<x-slot/>", "<x-slot></x-slot>"];

/// Structural emitter: markup text out, nothing evaluated.
#[derive(Debug, Clone, Default)]
pub struct TreeSerializer;

impl TreeSerializer {
    pub fn new() -> Self {
        TreeSerializer
    }

    pub fn serialize(&self, tree: &ElementTree) -> String {
        let mut out = String::new();
        for &root in tree.roots() {
            self.write_element(tree, root, &mut out);
        }
        out
    }

    fn serialize_children(&self, tree: &ElementTree, id: ElementId) -> String {
        let mut out = String::new();
        for &child in tree.children(id) {
            self.write_element(tree, child, &mut out);
        }
        out
    }

    fn write_element(&self, tree: &ElementTree, id: ElementId, out: &mut String) {
        match tree.get(id) {
            Element::Text { text } => out.push_str(text),
            Element::Raw { markup } => out.push_str(markup),
            Element::Slot { name } => {
                out.push_str("<x-slot name=\"");
                out.push_str(name);
                out.push_str("\"></x-slot>");
            }
            Element::Generic { tag, attributes } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(value);
                    out.push('"');
                }
                out.push('>');
                for &child in tree.children(id) {
                    self.write_element(tree, child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            Element::Component { component, .. } => {
                let slot = self.serialize_children(tree, id);
                match component {
                    ViewComponent::Registered(renderer) => out.push_str(&renderer.render(&slot)),
                    ViewComponent::Anonymous(anonymous) => {
                        out.push_str(&render_anonymous(anonymous, &slot))
                    }
                }
            }
            // Captures are codegen state; the text passes through unchanged.
            Element::Data { .. } => {
                for &child in tree.children(id) {
                    self.write_element(tree, child, out);
                }
            }
            // Structural form only: the loop source subtree. Evaluating the
            // iteration and choosing the fallback is the backend's job.
            Element::Loop { .. } => {
                for &child in tree.children(id) {
                    self.write_element(tree, child, out);
                }
            }
        }
    }
}

/// Textual slot injection: the invocation-site content replaces the first
/// slot marker in the component source.
fn render_anonymous(component: &AnonymousViewComponent, slot: &str) -> String {
    for marker in SLOT_MARKERS {
        if component.source.contains(marker) {
            return component.source.replacen(marker, slot, 1);
        }
    }
    component.source.clone()
}

impl CodeEmitter for TreeSerializer {
    fn emit(&self, tree: &ElementTree) -> String {
        self.serialize(tree)
    }
}
