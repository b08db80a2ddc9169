//! Element nodes, kinds, and children
//!
//! An `Element` is one node of a rendered tree: a kind (host tag or
//! component display name), a prop map, and a list of children. The tree
//! is whatever the renderer under test produced; this crate only reads it.

use serde::Serialize;
use std::fmt;

use super::props::{PropValue, Props};

/// What an element renders as.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ElementKind {
    /// An intrinsic host tag, like `div` or `button`.
    Host(String),
    /// A user component, identified by display name.
    Component(String),
}

impl ElementKind {
    pub fn display_name(&self) -> &str {
        match self {
            ElementKind::Host(tag) => tag,
            ElementKind::Component(name) => name,
        }
    }
}

/// A child of an element. Text and numbers are "primitive" children;
/// nested elements are not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Child {
    Element(Element),
    Text(String),
    Number(f64),
}

impl Child {
    pub fn is_primitive(&self) -> bool {
        !matches!(self, Child::Element(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        if let Child::Element(el) = self {
            Some(el)
        } else {
            None
        }
    }
}

impl From<Element> for Child {
    fn from(value: Element) -> Self {
        Child::Element(value)
    }
}

impl From<&str> for Child {
    fn from(value: &str) -> Self {
        Child::Text(value.to_string())
    }
}

impl From<String> for Child {
    fn from(value: String) -> Self {
        Child::Text(value)
    }
}

impl From<f64> for Child {
    fn from(value: f64) -> Self {
        Child::Number(value)
    }
}

impl From<i32> for Child {
    fn from(value: i32) -> Self {
        Child::Number(value as f64)
    }
}

/// One node of a rendered element tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub kind: ElementKind,
    pub props: Props,
    pub children: Vec<Child>,
}

impl Element {
    /// An intrinsic host element, like `Element::host("section")`.
    pub fn host(tag: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Host(tag.into()),
            props: Props::new(),
            children: Vec::new(),
        }
    }

    /// A component element with the given display name.
    pub fn component(name: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Component(name.into()),
            props: Props::new(),
            children: Vec::new(),
        }
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Child::Text(text.into()))
    }

    pub fn display_name(&self) -> &str {
        self.kind.display_name()
    }

    pub fn get_prop(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_host(&self) -> bool {
        matches!(self.kind, ElementKind::Host(_))
    }

    pub fn is_component(&self) -> bool {
        matches!(self.kind, ElementKind::Component(_))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::render::element_to_string(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chains() {
        let el = Element::host("button")
            .prop("disabled", true)
            .prop("value", "ok")
            .text("Buy now");

        assert_eq!(el.display_name(), "button");
        assert_eq!(el.props.len(), 2);
        assert_eq!(el.children.len(), 1);
        assert!(el.is_host());
        assert!(!el.is_component());
    }

    #[test]
    fn test_component_display_name() {
        let el = Element::component("Potato");
        assert_eq!(el.display_name(), "Potato");
        assert!(el.is_component());
    }

    #[test]
    fn test_primitive_children() {
        let el = Element::host("div")
            .child("Clicked ")
            .child(4)
            .child(Element::host("span"));

        assert!(el.children[0].is_primitive());
        assert!(el.children[1].is_primitive());
        assert!(!el.children[2].is_primitive());
    }

    #[test]
    fn test_serializes_to_json() {
        let el = Element::host("div").prop("id", "root");
        let json = serde_json::to_value(&el).unwrap();

        assert_eq!(json["kind"]["Host"], "div");
        assert_eq!(json["props"]["id"], "root");
    }
}
