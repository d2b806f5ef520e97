// SPDX-License-Identifier: MPL-2.0
//! Pretty-printed JSON summary of a level for the debug panel.
//!
//! The raw and serialized payload blobs can run to thousands of
//! characters, so every string value is shortened before display.

use super::Level;
use serde_json::Value;

/// Longest string value shown verbatim in the summary.
const MAX_STRING_CHARS: usize = 30;

const ELLIPSIS: &str = "...";

/// Renders a level as pretty-printed JSON with long string values
/// truncated to their first [`MAX_STRING_CHARS`] characters plus `...`.
///
/// Truncation applies recursively to every string value in the
/// structure, not only top-level fields. Keys are left untouched.
pub fn summarize(level: &Level) -> String {
    let mut value = serde_json::to_value(level).unwrap_or(Value::Null);
    shorten_strings(&mut value);
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

fn shorten_strings(value: &mut Value) {
    match value {
        Value::String(s) => {
            // Count chars, not bytes: a multi-byte title must not be
            // split mid code point.
            if s.chars().count() > MAX_STRING_CHARS {
                let mut short: String = s.chars().take(MAX_STRING_CHARS).collect();
                short.push_str(ELLIPSIS);
                *s = short;
            }
        }
        Value::Array(items) => {
            for item in items {
                shorten_strings(item);
            }
        }
        Value::Object(map) => {
            for (_, item) in map.iter_mut() {
                shorten_strings(item);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{Block, BlockType};

    fn level_with_raw(raw: &str) -> Level {
        Level {
            title: "T".into(),
            author: "A".into(),
            raw_data: raw.into(),
            serialized_data: "S".into(),
            data: vec![],
        }
    }

    #[test]
    fn short_strings_pass_through_unchanged() {
        let exactly_thirty = "a".repeat(30);
        let summary = summarize(&level_with_raw(&exactly_thirty));
        assert!(summary.contains(&exactly_thirty));
        assert!(!summary.contains("..."));
    }

    #[test]
    fn long_strings_truncate_to_thirty_chars_plus_ellipsis() {
        let long = "b".repeat(45);
        let summary = summarize(&level_with_raw(&long));
        let expected = format!("{}...", "b".repeat(30));
        assert!(summary.contains(&expected));
        assert!(!summary.contains(&"b".repeat(31)));
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let long = "é".repeat(40);
        let summary = summarize(&level_with_raw(&long));
        let expected = format!("{}...", "é".repeat(30));
        assert!(summary.contains(&expected));
    }

    #[test]
    fn truncation_reaches_nested_block_values() {
        let mut level = level_with_raw("R");
        level.data.push(Block {
            x: 0,
            y: 0,
            z: 0,
            block_type: BlockType {
                name: "n".repeat(50),
                value: "v".into(),
                parent: None,
            },
        });
        let summary = summarize(&level);
        assert!(summary.contains(&format!("{}...", "n".repeat(30))));
    }

    #[test]
    fn summary_is_pretty_printed() {
        let summary = summarize(&level_with_raw("R"));
        assert!(summary.contains("\n"));
        assert!(summary.contains("\"title\": \"T\""));
        assert!(summary.contains("\"rawData\": \"R\""));
    }
}
