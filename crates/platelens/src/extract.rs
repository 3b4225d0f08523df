//! Structured extraction from free-form model output.
//!
//! Stages expect exactly one embedded JSON value (object or array) but the
//! service may wrap it in prose. The scanner walks the text tracking bracket
//! depth and string/escape state, so delimiter characters inside string
//! literals do not confuse it. When no balanced candidate parses, the
//! caller's fallback is returned and a warning is logged; extraction
//! failure never propagates as an error.

use serde_json::Value;
use tracing::warn;

/// Expected shape of the embedded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    Object,
    Array,
}

impl JsonShape {
    fn open(self) -> char {
        match self {
            JsonShape::Object => '{',
            JsonShape::Array => '[',
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            JsonShape::Object => value.is_object(),
            JsonShape::Array => value.is_array(),
        }
    }
}

/// Extraction result: the parsed value, or the fallback when parsing failed.
#[derive(Debug, Clone)]
pub struct Extracted {
    pub value: Value,
    pub used_fallback: bool,
}

/// Recover one JSON value of the expected shape from `text`.
pub fn extract(text: &str, shape: JsonShape, fallback: Value) -> Extracted {
    // Clean output first: the whole text is the value.
    if let Ok(value) = serde_json::from_str::<Value>(text.trim()) {
        if shape.matches(&value) {
            return Extracted {
                value,
                used_fallback: false,
            };
        }
    }

    // Otherwise scan for balanced candidates, first parseable wins.
    for (start, _) in text.char_indices().filter(|&(_, c)| c == shape.open()) {
        if let Some(end) = balanced_end(&text[start..]) {
            let candidate = &text[start..start + end];
            if let Ok(value) = serde_json::from_str::<Value>(candidate) {
                if shape.matches(&value) {
                    return Extracted {
                        value,
                        used_fallback: false,
                    };
                }
            }
        }
    }

    warn!(
        "no parseable {:?} found in generation output ({} chars), using fallback",
        shape,
        text.len()
    );
    Extracted {
        value: fallback,
        used_fallback: true,
    }
}

/// Byte length of the balanced JSON value starting at the first byte of
/// `text` (which must be `{` or `[`), or None if the text ends before the
/// brackets balance.
fn balanced_end(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(idx + c.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clean_object_parses_without_fallback() {
        let out = extract(r#"{"a": 1}"#, JsonShape::Object, json!({}));
        assert!(!out.used_fallback);
        assert_eq!(out.value["a"], 1);
    }

    #[test]
    fn object_embedded_in_prose_is_recovered() {
        let text = r#"Sure! Here is the analysis you asked for:
{"protein": 12.5, "note": "high"}
Let me know if you need anything else."#;
        let out = extract(text, JsonShape::Object, json!({}));
        assert!(!out.used_fallback);
        assert_eq!(out.value["protein"], 12.5);
    }

    #[test]
    fn delimiters_inside_string_literals_do_not_confuse_the_scanner() {
        let text = r#"Result: {"name": "stew {with} extras", "weight": 200} done"#;
        let out = extract(text, JsonShape::Object, json!({}));
        assert!(!out.used_fallback);
        assert_eq!(out.value["name"], "stew {with} extras");
    }

    #[test]
    fn nested_arrays_balance_correctly() {
        let text = r#"prose [ {"items": [1, 2, [3]]} ] more prose"#;
        let out = extract(text, JsonShape::Array, json!([]));
        assert!(!out.used_fallback);
        assert_eq!(out.value[0]["items"][2][0], 3);
    }

    #[test]
    fn missing_delimiters_yield_fallback() {
        let fallback = json!({"name": "unknown_food"});
        let out = extract("no structured data here", JsonShape::Object, fallback.clone());
        assert!(out.used_fallback);
        assert_eq!(out.value, fallback);
    }

    #[test]
    fn unbalanced_text_yields_fallback() {
        let out = extract(r#"{"a": [1, 2"#, JsonShape::Object, json!({}));
        assert!(out.used_fallback);
    }

    #[test]
    fn shape_mismatch_yields_fallback() {
        // An array is present but the caller expects an object.
        let out = extract(r#"[1, 2, 3]"#, JsonShape::Object, json!({"d": true}));
        assert!(out.used_fallback);
        assert_eq!(out.value["d"], true);
    }

    #[test]
    fn later_balanced_candidate_wins_over_earlier_garbage() {
        // First `{` opens an unbalanced fragment inside prose; the scanner
        // should still find the real object after it.
        let text = r#"note: use { braces carefully. {"ok": true}"#;
        let out = extract(text, JsonShape::Object, json!({}));
        assert!(!out.used_fallback);
        assert_eq!(out.value["ok"], true);
    }
}
