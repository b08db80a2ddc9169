//! Shallow wrapper: a tree rendered one component level deep

use crate::element::{Element, Props, Selector};

use super::selection::Selection;
use super::Wrapper;

/// Handle over a shallow-rendered element tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ShallowWrapper {
    selection: Selection,
}

impl ShallowWrapper {
    pub fn new(root: Element) -> Self {
        Self {
            selection: Selection::new(root),
        }
    }

    /// Attach the component state captured at render time.
    pub fn with_state(mut self, state: Props) -> Self {
        self.selection.state = state;
        self
    }

    /// Attach the context the component rendered under.
    pub fn with_context(mut self, context: Props) -> Self {
        self.selection.context = context;
        self
    }

    /// Derive a wrapper over every node-or-descendant matching the
    /// selector.
    pub fn find(&self, selector: &Selector) -> Self {
        Self {
            selection: self.selection.select(selector),
        }
    }
}

impl Wrapper for ShallowWrapper {
    fn nodes(&self) -> &[Element] {
        &self.selection.nodes
    }

    fn state(&self) -> &Props {
        &self.selection.state
    }

    fn context(&self) -> &Props {
        &self.selection.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::PropValue;

    #[test]
    fn test_accessors() {
        let wrapper = ShallowWrapper::new(
            Element::host("button")
                .prop("class", "btn primary")
                .prop("disabled", true),
        )
        .with_state(Props::new().with("count", 3));

        assert!(wrapper.exists());
        assert_eq!(wrapper.name(), Some("button"));
        assert_eq!(wrapper.prop("disabled"), Some(&PropValue::Bool(true)));
        assert_eq!(wrapper.classes(), vec!["btn", "primary"]);
        assert!(wrapper.has_class("primary"));
        assert_eq!(wrapper.state_value("count"), Some(&PropValue::Number(3.0)));
    }

    #[test]
    fn test_find_derives_a_wrapper() {
        let wrapper = ShallowWrapper::new(
            Element::host("form")
                .child(Element::host("input").prop("name", "email"))
                .child(Element::host("input").prop("name", "password")),
        );

        let inputs = wrapper.find(&Selector::from("input"));
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs.name(), Some("input"));

        let missing = wrapper.find(&Selector::from("select"));
        assert!(!missing.exists());
        assert_eq!(missing.name(), None);
        assert!(missing.props().is_empty());
    }
}
