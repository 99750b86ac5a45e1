//! Human-readable change summaries for audit entries

use serde_json::Value;

/// Changes listed before the summary is cut short
const MAX_LISTED_CHANGES: usize = 8;

/// Summarize what changed between two JSON snapshots
///
/// Nested objects are walked down to their leaves, so toggling one category
/// reads as `budget2.categories.fence.on: true -> false` rather than a
/// whole-card replacement. Returns `None` when the snapshots are equal.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let mut changes = Vec::new();
    collect_changes(before, after, "", &mut changes);

    if changes.is_empty() {
        return None;
    }

    let hidden = changes.len().saturating_sub(MAX_LISTED_CHANGES);
    changes.truncate(MAX_LISTED_CHANGES);
    let mut summary = changes.join(", ");
    if hidden > 0 {
        summary.push_str(&format!(" (+{} more)", hidden));
    }
    Some(summary)
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn collect_changes(before: &Value, after: &Value, path: &str, changes: &mut Vec<String>) {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            for (key, before_val) in before_obj {
                let field = join_path(path, key);
                match after_obj.get(key) {
                    Some(after_val) => collect_changes(before_val, after_val, &field, changes),
                    None => changes.push(format!("{}: {} -> (removed)", field, format_value(before_val))),
                }
            }
            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!(
                        "{}: (added) -> {}",
                        join_path(path, key),
                        format_value(after_val)
                    ));
                }
            }
        }
        _ if before != after => {
            let field = if path.is_empty() { "value" } else { path };
            changes.push(format!(
                "{}: {} -> {}",
                field,
                format_value(before),
                format_value(after)
            ));
        }
        _ => {}
    }
}

/// Render a JSON value compactly for a summary line
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > 40 => {
            let head: String = s.chars().take(37).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identical_values_have_no_diff() {
        let value = json!({"dark": false, "tab": "Dashboard"});
        assert_eq!(generate_diff(&value, &value), None);
    }

    #[test]
    fn test_nested_leaf_change_is_reported_by_path() {
        let before = json!({"budget2": {"categories": {"fence": {"value": 14000, "on": true}}}});
        let after = json!({"budget2": {"categories": {"fence": {"value": 14000, "on": false}}}});

        assert_eq!(
            generate_diff(&before, &after).unwrap(),
            "budget2.categories.fence.on: true -> false"
        );
    }

    #[test]
    fn test_added_and_removed_keys() {
        let before = json!({"repc": {"title": "A"}});
        let after = json!({"card_1": {"title": "B"}});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("repc: {1 fields} -> (removed)"));
        assert!(diff.contains("card_1: (added) -> {1 fields}"));
    }

    #[test]
    fn test_long_strings_are_shortened() {
        let before = json!({"clientName": "x"});
        let after = json!({"clientName": "y".repeat(60)});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("..."));
        assert!(diff.len() < 80);
    }

    #[test]
    fn test_many_changes_are_capped() {
        let before = json!({"a": 1, "b": 1, "c": 1, "d": 1, "e": 1, "f": 1, "g": 1, "h": 1, "i": 1, "j": 1});
        let after = json!({"a": 2, "b": 2, "c": 2, "d": 2, "e": 2, "f": 2, "g": 2, "h": 2, "i": 2, "j": 2});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.ends_with("(+2 more)"));
    }

    #[test]
    fn test_scalar_change() {
        assert_eq!(
            generate_diff(&json!(1), &json!(2)).unwrap(),
            "value: 1 -> 2"
        );
    }
}
