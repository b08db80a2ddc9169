//! Single-line rendering of prop values and maps
//!
//! Used wherever a message needs to show an expected value inline:
//! selector display, context and style mismatch messages. No truncation;
//! callers pass small values.

use crate::element::{PropValue, Props};

use super::format_number;

/// Render one prop value on a single line. Strings get single quotes,
/// object-likes render in brace form.
pub fn stringify_inline(value: &PropValue) -> String {
    match value {
        PropValue::Null => "null".to_string(),
        PropValue::Bool(b) => b.to_string(),
        PropValue::Number(n) => format_number(*n),
        PropValue::Str(s) => format!("'{s}'"),
        PropValue::Func(name) => {
            if name.is_empty() {
                "fn".to_string()
            } else {
                name.clone()
            }
        }
        PropValue::Pattern(re) => format!("/{}/", re.as_str()),
        PropValue::Element(el) => format!("<{}>", el.display_name()),
        PropValue::Array(items) => {
            let inner: Vec<String> = items.iter().map(stringify_inline).collect();
            format!("[{}]", inner.join(", "))
        }
        PropValue::Object(props) => stringify_props_inline(props),
        PropValue::Instance(type_name) => format!("{type_name} {{...}}"),
    }
}

/// Render a prop map on a single line: `{color: 'red', width: 3}`.
pub fn stringify_props_inline(props: &Props) -> String {
    if props.is_empty() {
        return "{}".to_string();
    }
    let inner: Vec<String> = props
        .iter()
        .map(|(key, value)| format!("{}: {}", key, stringify_inline(value)))
        .collect();
    format!("{{{}}}", inner.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    #[test]
    fn test_scalars() {
        assert_eq!(stringify_inline(&PropValue::Null), "null");
        assert_eq!(stringify_inline(&PropValue::Bool(false)), "false");
        assert_eq!(stringify_inline(&PropValue::Number(3.0)), "3");
        assert_eq!(stringify_inline(&PropValue::Str("red".into())), "'red'");
    }

    #[test]
    fn test_nested_object() {
        let props = Props::new()
            .with("color", "red")
            .with("margin", Props::new().with("top", 4));

        assert_eq!(
            stringify_props_inline(&props),
            "{color: 'red', margin: {top: 4}}"
        );
    }

    #[test]
    fn test_arrays_and_elements() {
        let value = PropValue::Array(vec![
            PropValue::Number(1.0),
            PropValue::from(Element::component("Icon")),
        ]);
        assert_eq!(stringify_inline(&value), "[1, <Icon>]");
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(stringify_props_inline(&Props::new()), "{}");
    }
}
