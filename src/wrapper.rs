//! Wrapper handles over rendered element trees
//!
//! A wrapper is a handle over a selection of rendered elements plus the
//! component state and context captured at render time. Two flavors are
//! supported, mirroring shallow and full rendering:
//!
//! - [`ShallowWrapper`] - a tree rendered one component level deep
//! - [`MountedWrapper`] - a fully rendered tree
//!
//! Both expose the same accessors through the [`Wrapper`] trait; the
//! matchers in [`crate::expect`] work against either. The [`is_wrapper`]
//! guard recognizes the two flavors behind `&dyn Any`, for call sites
//! that only hold an opaque value under test.

pub mod mounted;
pub mod shallow;

mod selection;

pub use mounted::MountedWrapper;
pub use shallow::ShallowWrapper;

use std::any::Any;

use crate::element::{Element, PropValue, Props, Selector};

use selection::{collect_matches, empty_props};

/// Read-only accessors over a selection of rendered elements.
///
/// Object safe, so renderer integrations can hand out `&dyn Wrapper`.
pub trait Wrapper {
    /// The selected elements. Empty when nothing matched.
    fn nodes(&self) -> &[Element];

    /// Component state captured at render time.
    fn state(&self) -> &Props;

    /// Context the component rendered under.
    fn context(&self) -> &Props;

    /// Whether the selection is non-empty.
    fn exists(&self) -> bool {
        !self.nodes().is_empty()
    }

    fn len(&self) -> usize {
        self.nodes().len()
    }

    fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }

    /// Display name of the first selected element.
    fn name(&self) -> Option<&str> {
        self.nodes().first().map(|node| node.display_name())
    }

    /// Props of the first selected element; empty for an empty selection.
    fn props(&self) -> &Props {
        self.nodes()
            .first()
            .map(|node| &node.props)
            .unwrap_or_else(|| empty_props())
    }

    fn prop(&self, key: &str) -> Option<&PropValue> {
        self.props().get(key)
    }

    /// Class names from the `class` (or `className`) prop, split on
    /// whitespace.
    fn classes(&self) -> Vec<&str> {
        let value = self
            .props()
            .get("class")
            .or_else(|| self.props().get("className"));
        match value {
            Some(PropValue::Str(s)) => s.split_whitespace().collect(),
            _ => Vec::new(),
        }
    }

    fn has_class(&self, name: &str) -> bool {
        self.classes().iter().any(|class| *class == name)
    }

    fn state_value(&self, key: &str) -> Option<&PropValue> {
        self.state().get(key)
    }

    fn context_value(&self, key: &str) -> Option<&PropValue> {
        self.context().get(key)
    }

    /// Every selected element or descendant matching the selector,
    /// in tree order.
    fn query(&self, selector: &Selector) -> Vec<&Element> {
        let mut matches = Vec::new();
        for node in self.nodes() {
            collect_matches(node, selector, &mut matches);
        }
        matches
    }

    /// Whether the first selected element matches the selector.
    fn is(&self, selector: &Selector) -> bool {
        self.nodes()
            .first()
            .map_or(false, |node| selector.matches(node))
    }
}

/// View an opaque value as a wrapper, if it is one of the supported
/// flavors.
pub fn as_wrapper(actual: &dyn Any) -> Option<&dyn Wrapper> {
    if let Some(wrapper) = actual.downcast_ref::<ShallowWrapper>() {
        return Some(wrapper);
    }
    if let Some(wrapper) = actual.downcast_ref::<MountedWrapper>() {
        return Some(wrapper);
    }
    None
}

/// Whether the value under test is a supported wrapper type.
pub fn is_wrapper(actual: &dyn Any) -> bool {
    as_wrapper(actual).is_some()
}

/// Panics unless the value is a supported wrapper type.
pub fn assert_is_wrapper(actual: &dyn Any) {
    assert!(
        is_wrapper(actual),
        "value under test is not a rendered element wrapper"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_recognizes_both_flavors() {
        let shallow = ShallowWrapper::new(Element::host("div"));
        let mounted = MountedWrapper::new(Element::host("div"));

        assert!(is_wrapper(&shallow));
        assert!(is_wrapper(&mounted));
    }

    #[test]
    fn test_guard_rejects_other_values() {
        assert!(!is_wrapper(&5_i32));
        assert!(!is_wrapper(&"string"));
        assert!(!is_wrapper(&Element::host("div")));
    }

    #[test]
    fn test_as_wrapper_erases_the_flavor() {
        let shallow = ShallowWrapper::new(Element::host("button").prop("class", "primary"));
        let wrapper = as_wrapper(&shallow).unwrap();

        assert_eq!(wrapper.name(), Some("button"));
        assert!(wrapper.has_class("primary"));
    }

    #[test]
    #[should_panic(expected = "not a rendered element wrapper")]
    fn test_assert_is_wrapper_panics_on_other_values() {
        assert_is_wrapper(&"not a wrapper");
    }
}
