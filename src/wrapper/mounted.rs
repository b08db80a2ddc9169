//! Mounted wrapper: a fully rendered tree

use crate::element::{Element, Props, Selector};

use super::selection::Selection;
use super::Wrapper;

/// Handle over a fully rendered element tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MountedWrapper {
    selection: Selection,
}

impl MountedWrapper {
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

impl Wrapper for MountedWrapper {
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
