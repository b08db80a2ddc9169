//! # expect-element
//!
//! Component-testing assertion matchers for rendered element trees.
//!
//! The crate is a thin assertion layer: wrap a rendered tree in a
//! [`wrapper::ShallowWrapper`] or [`wrapper::MountedWrapper`], hand it to
//! [`expect`], and chain matchers. Failed matchers panic with a
//! descriptive, single-line message; [`Expectation::not`] inverts the
//! next matchers in the chain.
//!
//! ```rust-example
//! use expect_element::{expect, Element, ShallowWrapper};
//!
//! let wrapper = ShallowWrapper::new(
//!     Element::host("button").prop("class", "btn").text("Buy now"),
//! );
//!
//! expect(&wrapper).to_have_class("btn").to_exist();
//! expect(&wrapper).not().to_contain("Spinner");
//! ```
//!
//! ## Testing
//!
//! For fixture factories used across the test suites, see the
//! [testing module](crate::testing).

pub mod element;
pub mod expect;
pub mod render;
pub mod testing;
pub mod wrapper;

// Re-export the surface most call sites need
pub use element::{Child, Element, ElementKind, PropValue, Props, Selector};
pub use expect::{expect, Expectation};
pub use render::element_to_string;
pub use wrapper::{
    as_wrapper, assert_is_wrapper, is_wrapper, MountedWrapper, ShallowWrapper, Wrapper,
};
