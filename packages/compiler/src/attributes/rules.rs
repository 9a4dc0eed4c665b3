//! Attribute Rules
//!
//! The closed set of attribute transformations. Each rule is stateless
//! beyond the attribute name it matched and is invoked once per matching
//! attribute occurrence, in source order. A rule may wrap or replace the
//! node, or consume it entirely.

use crate::elements::{Element, ElementId, ElementTree};
use crate::parse_util::{CompileError, NodePath};

/// A named transformation rule, selected by the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeRule {
    /// `data-*` family: capture an attribute value for the compiled output.
    /// Applies only to component and data nodes; a no-op everywhere else.
    Data { name: String },
    /// `:*` family: capture an expression, leaving a live placeholder in the
    /// attribute while preserving the original source text in the capture.
    Expression { name: String },
    /// `:foreach`: wrap the node in an iteration construct.
    Foreach,
    /// `forelse`: bind the node as the preceding loop's fallback branch.
    Forelse,
}

impl AttributeRule {
    /// Apply the rule to `id`.
    ///
    /// `Ok(Some(_))` is the node to continue with (the input, a wrapper, or
    /// a replacement); `Ok(None)` means the node was fully consumed and must
    /// not be attached.
    pub fn apply(
        &self,
        tree: &mut ElementTree,
        id: ElementId,
        path: &NodePath,
    ) -> Result<Option<ElementId>, CompileError> {
        match self {
            AttributeRule::Data { name } => Ok(Some(apply_data(tree, id, name))),
            AttributeRule::Expression { name } => Ok(Some(apply_expression(tree, id, name))),
            AttributeRule::Foreach => Ok(Some(apply_foreach(tree, id))),
            AttributeRule::Forelse => apply_forelse(tree, id, path),
        }
    }
}

fn apply_data(tree: &mut ElementTree, id: ElementId, name: &str) -> ElementId {
    if !matches!(tree.get(id), Element::Component { .. } | Element::Data { .. }) {
        return id;
    }

    let value = tree.attribute(id, name).unwrap_or_default().to_string();
    tree.wrap(
        id,
        Element::Data {
            name: name.to_string(),
            value,
        },
    )
}

fn apply_expression(tree: &mut ElementTree, id: ElementId, name: &str) -> ElementId {
    let key = format!(":{name}");
    let Some(raw) = tree.attribute(id, &key).map(str::to_string) else {
        return id;
    };

    // The live attribute becomes an evaluable placeholder; the capture keeps
    // the original source text for later static analysis.
    tree.set_attribute(id, &key, format!("{{{{ {raw} }}}}"));
    tree.wrap(
        id,
        Element::Data {
            name: name.to_string(),
            value: raw,
        },
    )
}

fn apply_foreach(tree: &mut ElementTree, id: ElementId) -> ElementId {
    let Some(expression) = tree.attribute(id, ":foreach").map(str::to_string) else {
        return id;
    };

    tree.remove_attribute(id, ":foreach");
    tree.wrap(
        id,
        Element::Loop {
            expression,
            fallback: None,
        },
    )
}

fn apply_forelse(
    tree: &mut ElementTree,
    id: ElementId,
    path: &NodePath,
) -> Result<Option<ElementId>, CompileError> {
    match tree.previous(id) {
        Some(previous) if matches!(tree.get(previous), Element::Loop { .. }) => {
            tree.remove_attribute(id, "forelse");
            if let Element::Loop { fallback, .. } = tree.get_mut(previous) {
                *fallback = Some(id);
            }
            // The node now exists only as the loop's bound fallback.
            Ok(None)
        }
        _ => Err(CompileError::invalid_element(
            "no matching loop found in preceding element",
            path,
        )),
    }
}
