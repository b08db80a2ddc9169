//! Diagnostic rendering for error messages
//!
//! - `element_to_string` - One-line, best-effort element summaries
//! - `inline_object` - Single-line rendering of prop values and maps

pub mod element_to_string;
pub mod inline_object;

pub use element_to_string::element_to_string;
pub use inline_object::{stringify_inline, stringify_props_inline};

/// Render a numeric prop or child the way a diagnostic reads best:
/// integral values without a trailing `.0`.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn test_format_number_drops_integral_fraction() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
