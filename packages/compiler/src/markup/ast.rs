//! Parsed Markup AST
//!
//! Node definitions for the tree handed over by the external markup parser.
//! Attribute order is source order; attribute names arrive in their source
//! casing and are canonicalized by the element factory, not here.

use serde::{Deserialize, Serialize};

/// Node type union
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ParsedNode {
    Element(ParsedElement),
    Text(ParsedText),
}

/// Element node
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedElement {
    pub name: String,
    /// Ordered name/value pairs, in source order.
    #[serde(default)]
    pub attributes: Vec<(String, String)>,
    #[serde(default)]
    pub children: Vec<ParsedNode>,
}

/// Text node
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedText {
    pub content: String,
}

impl ParsedNode {
    pub fn element(
        name: impl Into<String>,
        attributes: Vec<(&str, &str)>,
        children: Vec<ParsedNode>,
    ) -> Self {
        ParsedNode::Element(ParsedElement {
            name: name.into(),
            attributes: attributes
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            children,
        })
    }

    pub fn text(content: impl Into<String>) -> Self {
        ParsedNode::Text(ParsedText {
            content: content.into(),
        })
    }

    /// Tag name for element nodes, `None` for text.
    pub fn name(&self) -> Option<&str> {
        match self {
            ParsedNode::Element(element) => Some(&element.name),
            ParsedNode::Text(_) => None,
        }
    }
}

impl ParsedElement {
    /// First attribute with the given source name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }
}
