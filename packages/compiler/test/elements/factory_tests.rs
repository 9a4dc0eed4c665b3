//! Element Factory Tests
//!
//! Shape resolution: text, verbatim regions, components, slots, generic
//! fallback, and attribute canonicalization.

#[path = "../util/mod.rs"]
mod util;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use view_compiler::markup::ParsedNode;
    use view_compiler::{CompiledView, ViewCompiler, ViewConfig};

    use super::util::{humanize, rows, FakeComponent};

    fn compile(nodes: &[ParsedNode]) -> CompiledView {
        ViewCompiler::new(ViewConfig::new())
            .compile(nodes)
            .expect("compilation should succeed")
    }

    #[test]
    fn should_drop_whitespace_only_text() {
        let nodes = vec![
            ParsedNode::text("  \n\t "),
            ParsedNode::element("div", vec![], vec![ParsedNode::text("   ")]),
        ];

        let compiled = compile(&nodes);
        assert_eq!(humanize(&compiled.tree), rows(&[&["Generic", "div"]]));
    }

    #[test]
    fn should_be_idempotent_over_whitespace_only_input() {
        let nodes = vec![ParsedNode::text("   ")];
        let compiler = ViewCompiler::new(ViewConfig::new());

        let first = compiler.compile(&nodes).unwrap();
        let second = compiler.compile(&nodes).unwrap();

        assert!(first.tree.roots().is_empty());
        assert!(second.tree.roots().is_empty());
        assert!(second.tree.is_empty());
    }

    #[test]
    fn should_keep_text_content_verbatim() {
        let nodes = vec![ParsedNode::text("  hello world ")];

        let compiled = compile(&nodes);
        assert_eq!(
            humanize(&compiled.tree),
            rows(&[&["Text", "  hello world "]])
        );
    }

    #[test]
    fn should_not_resolve_children_of_verbatim_regions() {
        let nodes = vec![ParsedNode::element(
            "pre",
            vec![("class", "hl")],
            vec![
                ParsedNode::text("   "),
                ParsedNode::element("b", vec![], vec![ParsedNode::text("x")]),
            ],
        )];

        let compiled = compile(&nodes);
        // The subtree reproduces the original markup byte for byte: the
        // whitespace text survives and the nested element is not resolved.
        assert_eq!(
            humanize(&compiled.tree),
            rows(&[&["Raw", "<pre class=\"hl\">   <b>x</b></pre>"]])
        );
    }

    #[test]
    fn should_resolve_registered_components() {
        let mut config = ViewConfig::new();
        config.register_instance(Arc::new(FakeComponent::new("x-card")));
        let compiler = ViewCompiler::new(config);

        let nodes = vec![ParsedNode::element(
            "x-card",
            vec![("title", "greeting")],
            vec![ParsedNode::text("hello")],
        )];

        let compiled = compiler.compile(&nodes).unwrap();
        assert_eq!(
            humanize(&compiled.tree),
            rows(&[
                &["Component", "x-card"],
                &["Attribute", "title", "greeting"],
                &["Text", "hello"],
            ])
        );
    }

    #[test]
    fn should_resolve_slot_with_default_name() {
        let compiled = compile(&[ParsedNode::element("x-slot", vec![], vec![])]);
        assert_eq!(humanize(&compiled.tree), rows(&[&["Slot", "slot"]]));
    }

    #[test]
    fn should_resolve_slot_with_explicit_name() {
        let compiled = compile(&[ParsedNode::element(
            "x-slot",
            vec![("name", "header")],
            vec![],
        )]);
        assert_eq!(humanize(&compiled.tree), rows(&[&["Slot", "header"]]));
    }

    #[test]
    fn should_treat_empty_slot_name_as_default() {
        let compiled = compile(&[ParsedNode::element("x-slot", vec![("name", "")], vec![])]);
        assert_eq!(humanize(&compiled.tree), rows(&[&["Slot", "slot"]]));
    }

    #[test]
    fn should_prefer_components_over_reserved_slot_tag() {
        let mut config = ViewConfig::new();
        config.register_instance(Arc::new(FakeComponent::new("x-slot")));
        let compiler = ViewCompiler::new(config);

        let compiled = compiler
            .compile(&[ParsedNode::element("x-slot", vec![], vec![])])
            .unwrap();
        assert_eq!(humanize(&compiled.tree), rows(&[&["Component", "x-slot"]]));
    }

    #[test]
    fn should_fall_back_to_generic_for_unknown_tags() {
        let compiled = compile(&[ParsedNode::element(
            "app-widget",
            vec![],
            vec![ParsedNode::text("x")],
        )]);
        assert_eq!(
            humanize(&compiled.tree),
            rows(&[&["Generic", "app-widget"], &["Text", "x"]])
        );
    }

    #[test]
    fn should_canonicalize_attribute_keys() {
        let compiled = compile(&[ParsedNode::element(
            "div",
            vec![("aria-label", "close"), ("id", "a")],
            vec![],
        )]);
        assert_eq!(
            humanize(&compiled.tree),
            rows(&[
                &["Generic", "div"],
                &["Attribute", "ariaLabel", "close"],
                &["Attribute", "id", "a"],
            ])
        );
    }

    #[test]
    fn should_wire_parent_and_previous_sibling_links() {
        let compiled = compile(&[ParsedNode::element(
            "ul",
            vec![],
            vec![
                ParsedNode::element("li", vec![], vec![ParsedNode::text("a")]),
                ParsedNode::text("\n  "),
                ParsedNode::element("li", vec![], vec![ParsedNode::text("b")]),
            ],
        )]);

        let tree = &compiled.tree;
        let list = tree.roots()[0];
        let items = tree.children(list);
        // The whitespace text vanished; the second item's previous sibling
        // is the first item.
        assert_eq!(items.len(), 2);
        assert_eq!(tree.previous(items[0]), None);
        assert_eq!(tree.previous(items[1]), Some(items[0]));
        assert_eq!(tree.parent(items[1]), Some(list));
    }
}
