//! Test utilities
//!
//! Flattens an element tree into rows of strings to ease assertions, plus a
//! fake component renderer.

use view_compiler::{ComponentRenderer, Element, ElementId, ElementTree};

/// Flatten a tree to a list of rows, depth-first. A loop's bound fallback
/// subtree follows its children, introduced by a `LoopFallback` row.
pub fn humanize(tree: &ElementTree) -> Vec<Vec<String>> {
    let mut result = Vec::new();
    for &root in tree.roots() {
        visit(tree, root, &mut result);
    }
    result
}

fn visit(tree: &ElementTree, id: ElementId, result: &mut Vec<Vec<String>>) {
    match tree.get(id) {
        Element::Text { text } => result.push(vec!["Text".to_string(), text.clone()]),
        Element::Raw { markup } => result.push(vec!["Raw".to_string(), markup.clone()]),
        Element::Slot { name } => result.push(vec!["Slot".to_string(), name.clone()]),
        Element::Generic { tag, attributes } => {
            result.push(vec!["Generic".to_string(), tag.clone()]);
            for (name, value) in attributes {
                result.push(vec!["Attribute".to_string(), name.clone(), value.clone()]);
            }
        }
        Element::Component {
            component,
            attributes,
        } => {
            result.push(vec!["Component".to_string(), component.name().to_string()]);
            for (name, value) in attributes {
                result.push(vec!["Attribute".to_string(), name.clone(), value.clone()]);
            }
        }
        Element::Data { name, value } => {
            result.push(vec!["Data".to_string(), name.clone(), value.clone()]);
        }
        Element::Loop { expression, .. } => {
            result.push(vec!["Loop".to_string(), expression.clone()]);
        }
    }

    for &child in tree.children(id) {
        visit(tree, child, result);
    }

    if let Element::Loop {
        fallback: Some(fallback),
        ..
    } = tree.get(id)
    {
        result.push(vec!["LoopFallback".to_string()]);
        visit(tree, *fallback, result);
    }
}

/// Shorthand for building expected rows.
pub fn rows(expected: &[&[&str]]) -> Vec<Vec<String>> {
    expected
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

/// Renderer that wraps its slot content in a named div.
pub struct FakeComponent {
    pub name: String,
}

impl FakeComponent {
    pub fn new(name: &str) -> Self {
        FakeComponent {
            name: name.to_string(),
        }
    }
}

impl ComponentRenderer for FakeComponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, slot: &str) -> String {
        format!("<div class=\"{}\">{}</div>", self.name, slot)
    }
}
