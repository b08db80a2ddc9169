//! Test factories for creating elements and wrappers succinctly

use crate::element::{Element, PropValue, Props};
use crate::wrapper::{MountedWrapper, ShallowWrapper};

/// Make a host element with props from terse specs
pub fn mk_host(tag: &str, props: &[(&str, PropValue)]) -> Element {
    props
        .iter()
        .fold(Element::host(tag), |el, (key, value)| {
            el.prop(*key, value.clone())
        })
}

/// Make a component element with props from terse specs
pub fn mk_component(name: &str, props: &[(&str, PropValue)]) -> Element {
    props
        .iter()
        .fold(Element::component(name), |el, (key, value)| {
            el.prop(*key, value.clone())
        })
}

/// Make a prop map from terse specs
pub fn mk_props(entries: &[(&str, PropValue)]) -> Props {
    entries
        .iter()
        .fold(Props::new(), |props, (key, value)| {
            props.with(*key, value.clone())
        })
}

/// Make a shallow wrapper over a root element
pub fn mk_shallow(root: Element) -> ShallowWrapper {
    ShallowWrapper::new(root)
}

/// Make a mounted wrapper over a root element
pub fn mk_mounted(root: Element) -> MountedWrapper {
    MountedWrapper::new(root)
}
