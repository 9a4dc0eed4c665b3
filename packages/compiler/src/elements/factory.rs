//! Element Factory
//!
//! Deterministic, recursive resolution of parsed markup nodes into element
//! variants. Each node resolves to exactly one element (or none), is run
//! through the attribute pipeline, and is attached with its parent and
//! previous-sibling links wired. Resolution order, first match wins: text,
//! verbatim region, component, slot, generic element.

use std::sync::Arc;

use crate::attributes::AttributeRegistry;
use crate::config::ViewConfig;
use crate::markup::{self, ParsedElement, ParsedNode};
use crate::parse_util::{CompileError, NodePath};
use crate::util::canonicalize_attribute_name;
use crate::view_component::{ComponentProvider, ComponentResolver};

use super::element::{AttributeMap, Element, ElementId, ElementTree};
use super::serializer::CodeEmitter;

/// Tags whose subtrees are serialized back verbatim and never reinterpreted.
const VERBATIM_TAGS: [&str; 2] = ["pre", "code"];

/// Reserved tag for slot placeholders.
const SLOT_TAG: &str = "x-slot";

/// Mutable per-branch state, cloned for every recursive descent so that
/// resolving one subtree cannot leak configuration into a sibling subtree.
/// Shared read-only collaborators (catalog, resolution service) are not
/// part of it.
#[derive(Clone)]
pub struct FactoryContext {
    /// The code-emission binding active for this branch.
    pub emitter: Arc<dyn CodeEmitter>,
}

/// A completed pass: the element tree plus the emission binding that was
/// active at the root.
pub struct CompiledView {
    pub tree: ElementTree,
    emitter: Arc<dyn CodeEmitter>,
}

impl CompiledView {
    pub fn roots(&self) -> &[ElementId] {
        self.tree.roots()
    }

    /// Hand the tree to the emission stage.
    pub fn emit(&self) -> String {
        self.emitter.emit(&self.tree)
    }
}

impl std::fmt::Debug for CompiledView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledView")
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}

/// Walks the external parsed tree and builds the element tree.
pub struct ElementFactory<'a> {
    config: &'a ViewConfig,
    provider: &'a dyn ComponentProvider,
    registry: &'a AttributeRegistry,
    context: FactoryContext,
}

impl<'a> ElementFactory<'a> {
    pub fn new(
        config: &'a ViewConfig,
        provider: &'a dyn ComponentProvider,
        registry: &'a AttributeRegistry,
        context: FactoryContext,
    ) -> Self {
        ElementFactory {
            config,
            provider,
            registry,
            context,
        }
    }

    /// An isolated copy for one recursive descent: the per-branch context is
    /// cloned, the shared collaborators are passed along by reference.
    fn branch(&self) -> ElementFactory<'a> {
        ElementFactory {
            config: self.config,
            provider: self.provider,
            registry: self.registry,
            context: self.context.clone(),
        }
    }

    /// Build the full tree for one compilation pass. Fails as a whole; a
    /// partial tree is never returned.
    pub fn build(&self, nodes: &[ParsedNode]) -> Result<CompiledView, CompileError> {
        let mut tree = ElementTree::new();
        let root_path = NodePath::root();
        let mut last_attached: Option<ElementId> = None;

        for (index, node) in nodes.iter().enumerate() {
            let path = root_path.child(index);
            let branch = self.branch();
            let Some(resolved) = branch.make_element(&mut tree, node, &path)? else {
                continue;
            };

            tree.set_previous(resolved, last_attached);
            let outcome =
                self.registry
                    .apply(&mut tree, resolved, source_attributes(node), &path)?;
            if let Some(finished) = outcome {
                tree.push_root(finished);
                last_attached = Some(finished);
            }
        }

        Ok(CompiledView {
            tree,
            emitter: Arc::clone(&self.context.emitter),
        })
    }

    /// Resolve one parsed node to its element shape. `Ok(None)` means the
    /// node vanishes (whitespace-only text).
    fn make_element(
        &self,
        tree: &mut ElementTree,
        node: &ParsedNode,
        path: &NodePath,
    ) -> Result<Option<ElementId>, CompileError> {
        match node {
            ParsedNode::Text(text) => {
                if text.content.trim().is_empty() {
                    return Ok(None);
                }
                Ok(Some(tree.alloc(Element::Text {
                    text: text.content.clone(),
                })))
            }
            ParsedNode::Element(parsed) => Ok(Some(self.make_tag_element(tree, parsed, path)?)),
        }
    }

    fn make_tag_element(
        &self,
        tree: &mut ElementTree,
        parsed: &ParsedElement,
        path: &NodePath,
    ) -> Result<ElementId, CompileError> {
        if VERBATIM_TAGS.contains(&parsed.name.as_str()) {
            return Ok(tree.alloc(Element::Raw {
                markup: markup::serialize_element(parsed),
            }));
        }

        // Components take precedence over the reserved slot tag.
        let resolver = ComponentResolver::new(self.config, self.provider);
        if let Some(component) = resolver.resolve(&parsed.name)? {
            let id = tree.alloc(Element::Component {
                component,
                attributes: canonicalized_attributes(&parsed.attributes),
            });
            self.build_children(tree, id, &parsed.children, path)?;
            return Ok(id);
        }

        if parsed.name == SLOT_TAG {
            let name = parsed
                .attribute("name")
                .filter(|value| !value.is_empty())
                .unwrap_or(Element::DEFAULT_SLOT_NAME);
            let id = tree.alloc(Element::Slot {
                name: name.to_string(),
            });
            self.build_children(tree, id, &parsed.children, path)?;
            return Ok(id);
        }

        let id = tree.alloc(Element::Generic {
            tag: parsed.name.clone(),
            attributes: canonicalized_attributes(&parsed.attributes),
        });
        self.build_children(tree, id, &parsed.children, path)?;
        Ok(id)
    }

    /// Resolve children independently, run each through the attribute
    /// pipeline, and append survivors in order. The previous-sibling link is
    /// wired before the pipeline runs, so backward-looking rules see the
    /// sibling the node is about to follow; a consumed node leaves the link
    /// chain pointing past it.
    fn build_children(
        &self,
        tree: &mut ElementTree,
        parent: ElementId,
        children: &[ParsedNode],
        path: &NodePath,
    ) -> Result<(), CompileError> {
        let mut last_attached: Option<ElementId> = None;

        for (index, child) in children.iter().enumerate() {
            let child_path = path.child(index);
            let branch = self.branch();
            let Some(resolved) = branch.make_element(tree, child, &child_path)? else {
                continue;
            };

            tree.set_previous(resolved, last_attached);
            let outcome =
                self.registry
                    .apply(tree, resolved, source_attributes(child), &child_path)?;
            if let Some(finished) = outcome {
                tree.append_child(parent, finished);
                last_attached = Some(finished);
            }
        }

        Ok(())
    }
}

fn canonicalized_attributes(attributes: &[(String, String)]) -> AttributeMap {
    let mut map = AttributeMap::new();
    for (name, value) in attributes {
        map.insert(canonicalize_attribute_name(name), value.clone());
    }
    map
}

fn source_attributes(node: &ParsedNode) -> &[(String, String)] {
    match node {
        ParsedNode::Element(element) => &element.attributes,
        ParsedNode::Text(_) => &[],
    }
}
