//! Selectors for locating and classifying elements
//!
//! A selector names either a host tag (`"button"`), a component display
//! name (`"SaveButton"`), or a set of props an element must carry.

use std::fmt;

use super::node::{Element, ElementKind};
use super::props::Props;
use crate::render::stringify_props_inline;

#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// Matches host elements with this tag name.
    Kind(String),
    /// Matches component elements with this display name.
    Component(String),
    /// Matches elements carrying every listed prop with an equal value.
    Props(Props),
}

impl Selector {
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Kind(tag) => matches!(&element.kind, ElementKind::Host(t) if t == tag),
            Selector::Component(name) => {
                matches!(&element.kind, ElementKind::Component(n) if n == name)
            }
            Selector::Props(expected) => expected
                .iter()
                .all(|(key, value)| element.props.get(key) == Some(value)),
        }
    }
}

// Tag names start lowercase, component names don't. Same convention the
// renderer uses to tell the two apart.
impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        let component = value.chars().next().map_or(false, |c| c.is_uppercase());
        if component {
            Selector::Component(value.to_string())
        } else {
            Selector::Kind(value.to_string())
        }
    }
}

impl From<Props> for Selector {
    fn from(value: Props) -> Self {
        Selector::Props(value)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Kind(tag) => write!(f, "{tag}"),
            Selector::Component(name) => write!(f, "{name}"),
            Selector::Props(props) => write!(f, "{}", stringify_props_inline(props)),
        }
    }
}
