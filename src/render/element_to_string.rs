//! One-line element summaries for error messages
//!
//! Different from a full tree serializer: output stays on a single line,
//! children are summarized rather than rendered, and anything large gets
//! abbreviated. The goal is a readable hint of what the element was, not
//! a faithful reproduction.

use crate::element::{Child, Element, PropValue};

use super::format_number;

/// Attribute strings at least this long push children out of the summary.
const PROPS_BUDGET: usize = 20;

/// Child text longer than this gets truncated at a word boundary.
const TEXT_LIMIT: usize = 25;

/// Render one prop value as a short primitive string.
fn to_primitive(value: &PropValue) -> String {
    match value {
        PropValue::Null => "null".to_string(),
        PropValue::Bool(b) => b.to_string(),
        PropValue::Number(n) => format_number(*n),
        PropValue::Str(s) => s.clone(),
        // Get function names.
        PropValue::Func(name) => {
            if name.is_empty() {
                "fn".to_string()
            } else {
                name.clone()
            }
        }
        // Patterns require explicit string coercion.
        PropValue::Pattern(re) => format!("/{}/", re.as_str()),
        // Prettify nested elements.
        PropValue::Element(el) => format!("<{}>", el.display_name()),
        // Abbreviate arrays and objects.
        PropValue::Array(items) => format!("Array[{}]", items.len()),
        // Show instance type names.
        PropValue::Instance(type_name) => format!("{type_name} {{...}}"),
        // Abbreviate using the number of object keys.
        PropValue::Object(props) => {
            if props.is_empty() {
                "Object[empty]".to_string()
            } else {
                format!("Object[{}]", props.len())
            }
        }
    }
}

/// Turn the prop map into an html-style attribute string.
fn stringify_props(element: &Element) -> String {
    let mut out = String::new();
    for (key, value) in element.props.iter() {
        out.push(' ');
        match value {
            // Truthy booleans render as a bare attribute.
            PropValue::Bool(true) => out.push_str(key),
            PropValue::Str(s) => {
                out.push_str(key);
                out.push_str("=\"");
                out.push_str(s);
                out.push('"');
            }
            other => {
                out.push_str(key);
                out.push_str("={");
                out.push_str(&to_primitive(other));
                out.push('}');
            }
        }
    }
    out
}

fn primitive_text(child: &Child) -> Option<String> {
    match child {
        Child::Text(s) => Some(s.clone()),
        Child::Number(n) => Some(format_number(*n)),
        Child::Element(_) => None,
    }
}

/// Truncate at the furthest space no more than `TEXT_LIMIT` characters in.
/// Char-indexed, so multibyte text never splits a code point.
fn truncate_at_word(content: &str) -> String {
    let chars: Vec<char> = content.chars().collect();
    if chars.len() <= TEXT_LIMIT {
        return content.to_string();
    }

    let cut = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == ' ')
        .map(|(i, _)| i)
        .take_while(|i| *i <= TEXT_LIMIT)
        .last()
        .unwrap_or(0);

    let head: String = chars[..cut].iter().collect();
    format!("{head}...")
}

/// Turn the children into a screen-space friendly summary.
fn stringify_children(element: &Element, props_string: &str) -> String {
    let space_remains = props_string.chars().count() < PROPS_BUDGET;
    let all_primitive = element.children.iter().all(Child::is_primitive);

    // Hide children if there isn't enough space left.
    if !all_primitive || !space_remains {
        return "...".to_string();
    }

    let content: String = element.children.iter().filter_map(primitive_text).collect();
    truncate_at_word(&content)
}

/// Turn an element into a single-line string for error messages.
/// Non-recursive; children are summarized, never rendered.
pub fn element_to_string(element: &Element) -> String {
    let kind = element.display_name();
    let props = stringify_props(element);

    if element.children.is_empty() {
        format!("<{kind}{props} />")
    } else {
        let children = stringify_children(element, &props);
        format!("<{kind}{props}>{children}</{kind}>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Props;

    #[test]
    fn test_bare_element() {
        assert_eq!(element_to_string(&Element::host("section")), "<section />");
    }

    #[test]
    fn test_component_name() {
        assert_eq!(element_to_string(&Element::component("Potato")), "<Potato />");
    }

    #[test]
    fn test_string_props_use_quotes() {
        let el = Element::host("input").prop("value", "text");
        assert_eq!(element_to_string(&el), "<input value=\"text\" />");
    }

    #[test]
    fn test_expression_props_use_braces() {
        let el = Element::host("div").prop("things", 4);
        assert_eq!(element_to_string(&el), "<div things={4} />");
    }

    #[test]
    fn test_object_abbreviation() {
        let el = Element::host("div").prop("style", Props::new());
        assert_eq!(element_to_string(&el), "<div style={Object[empty]} />");
    }

    #[test]
    fn test_truncates_long_text_at_word_boundary() {
        assert_eq!(truncate_at_word("Exactly 25 letters long!!"), "Exactly 25 letters long!!");
        assert_eq!(
            truncate_at_word("Exactly 25 characterslongloljustkidding"),
            "Exactly 25..."
        );
        // No space to break at: everything goes.
        assert_eq!(truncate_at_word("abcdefghijklmnopqrstuvwxyz"), "...");
    }

    #[test]
    fn test_truncation_is_char_safe() {
        // 30 multibyte chars with a space at index 10
        let text = "éééééééééé ééééééééééééééééééé";
        assert_eq!(truncate_at_word(text), "éééééééééé...");
    }
}
