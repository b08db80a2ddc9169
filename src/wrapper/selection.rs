//! Shared selection core behind both wrapper flavors

use once_cell::sync::Lazy;

use crate::element::{Child, Element, Props, Selector};

static EMPTY_PROPS: Lazy<Props> = Lazy::new(Props::new);

/// Shared empty prop map for empty selections.
pub(crate) fn empty_props() -> &'static Props {
    &EMPTY_PROPS
}

/// A selection of rendered elements plus render-time state and context.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Selection {
    pub(crate) nodes: Vec<Element>,
    pub(crate) state: Props,
    pub(crate) context: Props,
}

impl Selection {
    pub(crate) fn new(root: Element) -> Self {
        Self {
            nodes: vec![root],
            state: Props::new(),
            context: Props::new(),
        }
    }

    /// Derive a selection of every node-or-descendant matching the
    /// selector. State and context carry over from the parent selection.
    pub(crate) fn select(&self, selector: &Selector) -> Self {
        let mut matches = Vec::new();
        for node in &self.nodes {
            collect_matches(node, selector, &mut matches);
        }
        Self {
            nodes: matches.into_iter().cloned().collect(),
            state: self.state.clone(),
            context: self.context.clone(),
        }
    }
}

/// Linear walk over an element and its descendants, collecting matches
/// in tree order.
pub(crate) fn collect_matches<'a>(
    element: &'a Element,
    selector: &Selector,
    out: &mut Vec<&'a Element>,
) {
    if selector.matches(element) {
        out.push(element);
    }
    for child in &element.children {
        if let Child::Element(nested) = child {
            collect_matches(nested, selector, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Element {
        Element::host("ul")
            .child(Element::host("li").prop("class", "selected").text("one"))
            .child(Element::host("li").text("two"))
            .child(Element::host("li").child(Element::component("Icon")))
    }

    #[test]
    fn test_select_walks_descendants_in_tree_order() {
        let selection = Selection::new(sample_tree());

        let items = selection.select(&Selector::from("li"));
        assert_eq!(items.nodes.len(), 3);

        let icons = selection.select(&Selector::from("Icon"));
        assert_eq!(icons.nodes.len(), 1);
    }

    #[test]
    fn test_select_includes_the_root() {
        let selection = Selection::new(sample_tree());
        let lists = selection.select(&Selector::from("ul"));
        assert_eq!(lists.nodes.len(), 1);
    }

    #[test]
    fn test_select_keeps_state_and_context() {
        let mut selection = Selection::new(sample_tree());
        selection.state = Props::new().with("count", 3);

        let items = selection.select(&Selector::from("li"));
        assert_eq!(items.state, selection.state);
    }

    #[test]
    fn test_select_misses_yield_empty() {
        let selection = Selection::new(sample_tree());
        let missing = selection.select(&Selector::from("table"));
        assert!(missing.nodes.is_empty());
    }
}
