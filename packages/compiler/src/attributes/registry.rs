//! Attribute Registry
//!
//! Maps attribute names, as they appear in source, to transformation rules
//! and runs the resulting pipeline over a node. Matching is a closed list
//! built at compiler construction; exact names are registered ahead of the
//! family prefixes they would otherwise fall into.

use crate::elements::{ElementId, ElementTree};
use crate::parse_util::{CompileError, NodePath};
use crate::util::canonicalize_attribute_name;

use super::rules::AttributeRule;

/// How a registered rule matches a source attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributePattern {
    Exact(&'static str),
    Prefix(&'static str),
}

impl AttributePattern {
    fn matches(&self, name: &str) -> bool {
        match self {
            AttributePattern::Exact(exact) => name == *exact,
            AttributePattern::Prefix(prefix) => name.starts_with(prefix),
        }
    }
}

/// Which rule a pattern selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeRuleKind {
    Data,
    Expression,
    Foreach,
    Forelse,
}

/// The rule table consulted once per attribute occurrence.
#[derive(Debug)]
pub struct AttributeRegistry {
    rules: Vec<(AttributePattern, AttributeRuleKind)>,
}

impl AttributeRegistry {
    /// Registry with the built-in rule set.
    pub fn new() -> Self {
        let mut registry = AttributeRegistry { rules: Vec::new() };
        registry.register(AttributePattern::Exact(":foreach"), AttributeRuleKind::Foreach);
        registry.register(AttributePattern::Exact("forelse"), AttributeRuleKind::Forelse);
        registry.register(AttributePattern::Prefix(":"), AttributeRuleKind::Expression);
        registry.register(AttributePattern::Prefix("data-"), AttributeRuleKind::Data);
        registry
    }

    /// Append a pattern → rule entry. Registration order is match order.
    pub fn register(&mut self, pattern: AttributePattern, kind: AttributeRuleKind) {
        self.rules.push((pattern, kind));
    }

    /// First registered rule matching a source attribute name.
    pub fn rule_for(&self, source_name: &str) -> Option<AttributeRule> {
        let kind = self
            .rules
            .iter()
            .find(|(pattern, _)| pattern.matches(source_name))
            .map(|(_, kind)| *kind)?;

        let rule = match kind {
            AttributeRuleKind::Foreach => AttributeRule::Foreach,
            AttributeRuleKind::Forelse => AttributeRule::Forelse,
            AttributeRuleKind::Expression => AttributeRule::Expression {
                name: canonicalize_attribute_name(source_name.trim_start_matches(':')),
            },
            AttributeRuleKind::Data => AttributeRule::Data {
                name: canonicalize_attribute_name(source_name),
            },
        };

        Some(rule)
    }

    /// Run the pipeline over a freshly resolved node, in source attribute
    /// order. Later rules operate on the node produced by earlier ones.
    /// `Ok(None)` means some rule consumed the node; consuming rules are
    /// mutually exclusive with any further processing of that node.
    pub fn apply(
        &self,
        tree: &mut ElementTree,
        id: ElementId,
        source_attributes: &[(String, String)],
        path: &NodePath,
    ) -> Result<Option<ElementId>, CompileError> {
        let mut current = id;

        for (name, _) in source_attributes {
            let Some(rule) = self.rule_for(name) else {
                continue;
            };

            match rule.apply(tree, current, path)? {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }

        Ok(Some(current))
    }
}

impl Default for AttributeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
