//! Cell value conversions shared by downstream crates.

use polars::prelude::AnyValue;

/// Render a cell as text. Null becomes the empty string.
pub fn any_to_string(value: AnyValue) -> String {
    match value {
        AnyValue::String(value) => value.to_string(),
        AnyValue::StringOwned(value) => value.to_string(),
        AnyValue::Null => String::new(),
        _ => value.to_string(),
    }
}

/// Render a cell as text, keeping null distinct from an empty string.
pub fn any_to_opt_string(value: AnyValue) -> Option<String> {
    match value {
        AnyValue::Null => None,
        other => Some(any_to_string(other)),
    }
}
