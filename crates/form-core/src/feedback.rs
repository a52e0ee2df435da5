//! Mapping validation errors back to form pages
//!
//! Record validation reports errors as a nested object mirroring the
//! record. The form needs to know which pages hold an error so it can
//! flag them in the page stepper.

use serde_json::Value;

use crate::layout::ResolvedLayout;

/// Flatten a nested error object into dot-joined leaf paths.
///
/// Objects are descended into; arrays, strings and every other value are
/// leaves.
///
/// ```
/// use form_core::feedback::flatten_keys_dot_joined;
/// use serde_json::json;
///
/// let errors = json!({"a": {"b": {"c": 1}, "d": {"e": {"f": 2, "g": 3}}, "h": 4}});
/// assert_eq!(
///     flatten_keys_dot_joined(&errors),
///     vec!["a.b.c", "a.d.e.f", "a.d.e.g", "a.h"]
/// );
/// ```
pub fn flatten_keys_dot_joined(value: &Value) -> Vec<String> {
    let mut out = Vec::new();
    if let Value::Object(map) = value {
        for (key, child) in map {
            match child {
                Value::Object(_) => {
                    out.extend(
                        flatten_keys_dot_joined(child)
                            .into_iter()
                            .map(|nested| format!("{key}.{nested}")),
                    );
                }
                _ => out.push(key.clone()),
            }
        }
    }
    out
}

/// Pages owning at least one errored field, in page order.
pub fn pages_with_errors<'a>(layout: &'a ResolvedLayout, errors: &Value) -> Vec<&'a str> {
    let error_paths = flatten_keys_dot_joined(errors);

    layout
        .pages
        .iter()
        .map(|page| page.section.as_str())
        .filter(|page| {
            error_paths
                .iter()
                .any(|path| layout.page_of(path) == Some(*page))
        })
        .collect()
}
