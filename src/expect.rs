//! Expectation context and matchers
//!
//! Entry point is [`expect`]: it wraps the value under test in an
//! [`Expectation`], which carries a negation flag and the wording state
//! for failure messages. Matchers live in [`matchers`] and are available
//! whenever the actual value is a [`crate::wrapper::Wrapper`].

pub mod expectation;
pub mod matchers;

pub use expectation::{expect, Expectation};
