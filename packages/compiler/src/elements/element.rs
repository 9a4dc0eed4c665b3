//! Element Model
//!
//! The tagged-variant intermediate tree. Nodes live in an arena table and
//! are addressed by [`ElementId`]; parent and previous-sibling links are
//! non-owning id lookups, children an ordered id list owned by the parent
//! slot. No reference cycles, no shared ownership.

use indexmap::IndexMap;

use crate::view_component::ViewComponent;

/// Insertion-ordered attribute map with canonicalized keys. The last write
/// for a key wins.
pub type AttributeMap = IndexMap<String, String>;

/// Non-owning handle into an [`ElementTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u32);

impl ElementId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the compiled intermediate tree; the variants are mutually
/// exclusive interpretations of one parsed node.
#[derive(Debug, Clone)]
pub enum Element {
    /// Raw text content. Leaf.
    Text { text: String },
    /// Verbatim source slice whose contents are never reinterpreted. Leaf.
    Raw { markup: String },
    /// An ordinary markup element.
    Generic {
        tag: String,
        attributes: AttributeMap,
    },
    /// A placeholder a component body injects content into.
    Slot { name: String },
    /// A component invocation; children are the slot content.
    Component {
        component: ViewComponent,
        attributes: AttributeMap,
    },
    /// A value captured out of an attribute; wraps its single child.
    Data { name: String, value: String },
    /// An iteration construct wrapping its single child, with an optional
    /// bound fallback branch.
    Loop {
        expression: String,
        fallback: Option<ElementId>,
    },
}

impl Element {
    /// Default slot name used when `<x-slot>` carries no `name` attribute.
    pub const DEFAULT_SLOT_NAME: &'static str = "slot";
}

#[derive(Debug)]
struct ElementNode {
    element: Element,
    parent: Option<ElementId>,
    previous: Option<ElementId>,
    children: Vec<ElementId>,
}

/// Arena-held element tree. Built once per compilation pass; immutable
/// afterwards. During the pass the attribute pipeline may replace a node
/// with a wrapper, and binding a loop fallback is the one mutation of an
/// already-attached node.
#[derive(Debug, Default)]
pub struct ElementTree {
    nodes: Vec<ElementNode>,
    roots: Vec<ElementId>,
}

impl ElementTree {
    pub fn new() -> Self {
        ElementTree::default()
    }

    /// Allocate an unattached node.
    pub fn alloc(&mut self, element: Element) -> ElementId {
        let id = ElementId(self.nodes.len() as u32);
        self.nodes.push(ElementNode {
            element,
            parent: None,
            previous: None,
            children: Vec::new(),
        });
        id
    }

    pub fn get(&self, id: ElementId) -> &Element {
        &self.nodes[id.index()].element
    }

    pub fn get_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.nodes[id.index()].element
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes[id.index()].parent
    }

    /// Immediately preceding sibling at the node's own tree level, or `None`
    /// if it is first.
    pub fn previous(&self, id: ElementId) -> Option<ElementId> {
        self.nodes[id.index()].previous
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        &self.nodes[id.index()].children
    }

    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    /// Append `child` as the last child of `parent`, wiring its parent and
    /// previous-sibling links.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        let previous = self.nodes[parent.index()].children.last().copied();
        let node = &mut self.nodes[child.index()];
        node.parent = Some(parent);
        node.previous = previous;
        self.nodes[parent.index()].children.push(child);
    }

    /// Attach `root` at the top level, wiring its previous-sibling link to
    /// the last root.
    pub fn push_root(&mut self, root: ElementId) {
        let previous = self.roots.last().copied();
        self.nodes[root.index()].previous = previous;
        self.roots.push(root);
    }

    /// Wire the previous-sibling link of a not-yet-attached node, so rules
    /// that look backwards see the sibling the node is about to follow.
    pub(crate) fn set_previous(&mut self, id: ElementId, previous: Option<ElementId>) {
        self.nodes[id.index()].previous = previous;
    }

    /// Wrap `inner` in a new node: the wrapper takes over `inner`'s
    /// previous-sibling position and `inner` becomes its only child.
    pub fn wrap(&mut self, inner: ElementId, wrapper: Element) -> ElementId {
        let previous = self.previous(inner);
        let wrapper_id = self.alloc(wrapper);
        self.append_child(wrapper_id, inner);
        self.set_previous(wrapper_id, previous);
        wrapper_id
    }

    /// Node that actually carries attributes for `id`: `Data` and `Loop`
    /// wrappers delegate to the node they wrap.
    fn attribute_target(&self, id: ElementId) -> ElementId {
        let mut current = id;
        loop {
            match self.get(current) {
                Element::Data { .. } | Element::Loop { .. } => {
                    match self.children(current).first().copied() {
                        Some(inner) => current = inner,
                        None => return current,
                    }
                }
                _ => return current,
            }
        }
    }

    /// Attribute lookup by canonical key, delegating through wrappers.
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        match self.get(self.attribute_target(id)) {
            Element::Generic { attributes, .. } | Element::Component { attributes, .. } => {
                attributes.get(name).map(String::as_str)
            }
            _ => None,
        }
    }

    /// Attribute write by canonical key, delegating through wrappers like
    /// [`attribute`](Self::attribute). A no-op on kinds without attributes.
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: String) {
        let target = self.attribute_target(id);
        if let Element::Generic { attributes, .. } | Element::Component { attributes, .. } =
            self.get_mut(target)
        {
            attributes.insert(name.to_string(), value);
        }
    }

    /// Remove an attribute by canonical key, delegating through wrappers.
    pub fn remove_attribute(&mut self, id: ElementId, name: &str) {
        let target = self.attribute_target(id);
        if let Element::Generic { attributes, .. } | Element::Component { attributes, .. } =
            self.get_mut(target)
        {
            attributes.shift_remove(name);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
