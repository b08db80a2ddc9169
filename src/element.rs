//! Element model for rendered component trees
//!
//! This module provides the lightweight tree model the wrapper handles
//! operate on:
//!
//! - `props` - Prop values and the insertion-ordered prop map
//! - `node` - Element nodes, kinds, and children
//! - `selector` - Selectors for locating and classifying elements

pub mod node;
pub mod props;
pub mod selector;

// Re-export commonly used types at module root
pub use node::{Child, Element, ElementKind};
pub use props::{PropValue, Props};
pub use selector::Selector;
