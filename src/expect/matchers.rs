//! Matchers over wrapper values
//!
//! Every matcher consumes the expectation, panics on mismatch, and
//! returns the expectation for chaining. With [`Expectation::not`] set,
//! the pass/fail result of each matcher inverts and the message wording
//! flips polarity.

use crate::element::{PropValue, Props, Selector};
use crate::render::{element_to_string, stringify_inline, stringify_props_inline};
use crate::wrapper::Wrapper;

use super::expectation::Expectation;

impl<'a, W: Wrapper + ?Sized> Expectation<&'a W> {
    /// How the wrapped element reads in messages: its display name, or
    /// `element` for an empty selection.
    fn subject(&self) -> String {
        self.actual
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| "element".to_string())
    }

    fn style_object(&self) -> Props {
        match self.actual.prop("style") {
            Some(PropValue::Object(props)) => props.clone(),
            _ => Props::new(),
        }
    }

    /// Assert the element was given a prop.
    pub fn to_have_prop(self, key: &str) -> Self {
        let pass = self.actual.props().contains_key(key);
        self.verify(pass, || {
            format!(
                "Expected {} to {}have prop \"{}\"",
                self.subject(),
                self.polarity(),
                key
            )
        });
        self
    }

    /// Assert the element was given a prop with this exact value.
    pub fn to_have_prop_eq(self, key: &str, value: impl Into<PropValue>) -> Self {
        let expected = value.into();
        let actual = self.actual.prop(key);

        if self.negated {
            self.verify(actual == Some(&expected), || {
                format!(
                    "Expected {} property \"{}\" to not be {}",
                    self.subject(),
                    key,
                    stringify_inline(&expected)
                )
            });
        } else {
            self.verify(actual.is_some(), || {
                format!("Expected {} to have prop \"{}\"", self.subject(), key)
            });
            self.verify(actual == Some(&expected), || {
                format!(
                    "Expected {} property \"{}\" to be {}",
                    self.subject(),
                    key,
                    stringify_inline(&expected)
                )
            });
        }
        self
    }

    /// Assert the element was given every listed prop.
    pub fn to_have_props(self, expected: Props) -> Self {
        if self.negated {
            let pass = expected
                .iter()
                .all(|(key, value)| self.actual.prop(key) == Some(value));
            self.verify(pass, || {
                format!(
                    "Expected {} to not have props {}",
                    self.subject(),
                    stringify_props_inline(&expected)
                )
            });
            return self;
        }

        let mut checked = self;
        for (key, value) in expected.iter() {
            checked = checked.to_have_prop_eq(key, value.clone());
        }
        checked
    }

    /// Assert the element carries a css class.
    pub fn to_have_class(self, class: &str) -> Self {
        let pass = self.actual.has_class(class);
        self.verify(pass, || {
            format!(
                "Expected {} to {}have class \"{}\"",
                self.subject(),
                self.polarity(),
                class
            )
        });
        self
    }

    /// Assert the component state deep-equals every listed entry.
    pub fn to_have_state(self, expected: Props) -> Self {
        if self.negated {
            let pass = expected
                .iter()
                .all(|(key, value)| self.actual.state_value(key) == Some(value));
            self.verify(pass, || {
                format!(
                    "Expected state to not match {}",
                    stringify_props_inline(&expected)
                )
            });
            return self;
        }

        for (key, value) in expected.iter() {
            self.verify(self.actual.state_value(key) == Some(value), || {
                format!(
                    "Expected state \"{}\" to equal {}",
                    key,
                    stringify_inline(value)
                )
            });
        }
        self
    }

    /// Assert the `style` prop specifies a css property.
    pub fn to_have_style(self, property: &str) -> Self {
        let style = self.style_object();
        self.verify(style.contains_key(property), || {
            format!(
                "Expected {} to {}have css property \"{}\"",
                self.subject(),
                self.polarity(),
                property
            )
        });
        self
    }

    /// Assert the `style` prop carries this exact css value.
    pub fn to_have_style_eq(self, property: &str, value: impl Into<PropValue>) -> Self {
        let expected = value.into();
        let style = self.style_object();
        let pass = style.get(property) == Some(&expected);
        self.verify(pass, || {
            let css = Props::new().with(property, expected.clone());
            format!(
                "Expected {} to {}have css {}",
                self.subject(),
                self.polarity(),
                stringify_props_inline(&css)
            )
        });
        self
    }

    /// Assert the `style` prop carries every listed css value.
    pub fn to_have_styles(self, expected: Props) -> Self {
        let style = self.style_object();
        if self.negated {
            let pass = expected
                .iter()
                .all(|(key, value)| style.get(key) == Some(value));
            self.verify(pass, || {
                format!(
                    "Expected {} to not have css {}",
                    self.subject(),
                    stringify_props_inline(&expected)
                )
            });
            return self;
        }

        let mut checked = self;
        for (key, value) in expected.iter() {
            checked = checked.to_have_style_eq(key, value.clone());
        }
        checked
    }

    /// Assert the render context deep-equals every listed entry.
    pub fn to_have_context(self, expected: Props) -> Self {
        if self.negated {
            let pass = expected
                .iter()
                .all(|(key, value)| self.actual.context_value(key) == Some(value));
            self.verify(pass, || {
                format!(
                    "Expected context to not match {}",
                    stringify_props_inline(&expected)
                )
            });
            return self;
        }

        for (key, value) in expected.iter() {
            self.verify(self.actual.context_value(key) == Some(value), || {
                format!(
                    "Expected context property \"{}\" to equal {}",
                    key,
                    stringify_inline(value)
                )
            });
        }
        self
    }

    /// Assert the element matches a selector.
    pub fn to_be_a(self, selector: impl Into<Selector>) -> Self {
        let selector = selector.into();
        let pass = self.actual.is(&selector);
        self.verify(pass, || {
            format!(
                "Expected {} to {}be {} {}",
                self.subject(),
                self.polarity(),
                self.article,
                selector
            )
        });
        self
    }

    /// Same as [`to_be_a`](Expectation::to_be_a), with different wording.
    pub fn to_be_an(mut self, selector: impl Into<Selector>) -> Self {
        self.article = "an";
        self.to_be_a(selector)
    }

    /// Assert the selection is non-empty.
    pub fn to_exist(self) -> Self {
        let pass = self.actual.exists();
        self.verify(pass, || {
            format!("Expected element to {}exist", self.polarity())
        });
        self
    }

    /// Assert the element or one of its descendants matches a selector.
    /// The failure message shows the rendered element.
    pub fn to_contain(self, selector: impl Into<Selector>) -> Self {
        let selector = selector.into();
        let pass = !self.actual.query(&selector).is_empty();
        self.verify(pass, || {
            let rendered = self
                .actual
                .nodes()
                .first()
                .map(element_to_string)
                .unwrap_or_else(|| "element".to_string());
            format!(
                "Expected {} to {}contain \"{}\"",
                rendered,
                self.polarity(),
                selector
            )
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::expect::expect;
    use crate::wrapper::ShallowWrapper;

    fn button() -> ShallowWrapper {
        ShallowWrapper::new(
            Element::host("button")
                .prop("class", "btn primary")
                .prop("disabled", true)
                .prop("style", Props::new().with("color", "red")),
        )
    }

    #[test]
    fn test_matchers_chain() {
        let wrapper = button();
        expect(&wrapper)
            .to_have_prop("disabled")
            .to_have_class("btn")
            .to_have_style("color")
            .to_exist();
    }

    #[test]
    #[should_panic(expected = "Expected button to have prop \"missing\"")]
    fn test_prop_failure_names_the_element() {
        let wrapper = button();
        expect(&wrapper).to_have_prop("missing");
    }

    #[test]
    #[should_panic(expected = "Expected button to not have class \"btn\"")]
    fn test_negated_failure_flips_wording() {
        let wrapper = button();
        expect(&wrapper).not().to_have_class("btn");
    }

    #[test]
    #[should_panic(expected = "Expected element to have prop \"id\"")]
    fn test_empty_selection_reads_as_element() {
        let wrapper = button().find(&Selector::from("missing"));
        expect(&wrapper).to_have_prop("id");
    }
}
