//! Testing utilities
//!
//! Factories for building elements, prop maps, and wrappers succinctly in
//! tests. Fixture trees built by hand get verbose fast; these keep test
//! bodies down to the shape being asserted.

pub mod testing_factories;

pub use testing_factories::{mk_component, mk_host, mk_mounted, mk_props, mk_shallow};
