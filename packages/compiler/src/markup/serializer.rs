//! Parsed Markup Serializer
//!
//! Serializes a parsed subtree back to markup text. Used for verbatim
//! regions, whose contents must reproduce the original subtree exactly and
//! are never individually resolved.

use super::ast::{ParsedElement, ParsedNode};

/// Serialize a single parsed node to markup text.
pub fn serialize_node(node: &ParsedNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Serialize an element and its subtree to markup text.
pub fn serialize_element(element: &ParsedElement) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

/// Serialize a sequence of parsed nodes to markup text.
pub fn serialize_nodes(nodes: &[ParsedNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &ParsedNode, out: &mut String) {
    match node {
        ParsedNode::Text(text) => out.push_str(&text.content),
        ParsedNode::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &ParsedElement, out: &mut String) {
    out.push('<');
    out.push_str(&element.name);
    for (name, value) in &element.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
    for child in &element.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
}
