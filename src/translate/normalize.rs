//! Normalize raw generative output into a command batch
//!
//! Backends are asked for a bare JSON array but routinely wrap it in a
//! markdown code fence, use single quotes, leave trailing commas, or
//! return a single object instead of an array. Each step here tolerates
//! the absence of the artifact it targets:
//!
//! 1. strip one surrounding code fence (any language tag);
//! 2. run the parse chain: strict JSON first, then a relaxed rewrite -
//!    first success wins, exhaustion is a `MalformedOutput` error;
//! 3. wrap a top-level object into a one-element array;
//! 4. deserialize into the strict command schema.

use crate::command::schema::CommandBatch;
use crate::core::error::{BridgeError, Result};
use serde_json::Value;

/// Parse raw backend text into an ordered command batch
pub fn normalize_response(raw: &str) -> Result<CommandBatch> {
    let text = strip_code_fence(raw);
    let value = parse_value(text)?;
    into_batch(value)
}

/// Strip one leading/trailing fenced code block, if present
///
/// The opening fence may carry a language tag ("json", "javascript", ...)
/// which is discarded along with the fence itself.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.trim_end();
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    // drop the language tag on the opening fence line
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };
    rest.trim()
}

/// Ordered parse attempts; the first success wins
fn parse_value(text: &str) -> Result<Value> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(strict_err) => serde_json::from_str(&relax_json(text)).map_err(|_| {
            BridgeError::MalformedOutput(format!("not valid JSON: {strict_err}"))
        }),
    }
}

/// Rewrite common model-JSON dialect into strict JSON
///
/// Converts single-quoted strings to double-quoted and removes trailing
/// commas before a closing bracket. Content inside double-quoted strings
/// is copied verbatim.
fn relax_json(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '"' => {
                out.push('"');
                i += 1;
                while i < chars.len() {
                    let c = chars[i];
                    out.push(c);
                    i += 1;
                    if c == '\\' {
                        if i < chars.len() {
                            out.push(chars[i]);
                            i += 1;
                        }
                    } else if c == '"' {
                        break;
                    }
                }
            }
            '\'' => {
                out.push('"');
                i += 1;
                while i < chars.len() {
                    let c = chars[i];
                    if c == '\\' && i + 1 < chars.len() {
                        // \' inside a single-quoted string is a plain quote
                        let next = chars[i + 1];
                        if next == '\'' {
                            out.push('\'');
                        } else {
                            out.push('\\');
                            out.push(next);
                        }
                        i += 2;
                    } else if c == '\'' {
                        i += 1;
                        break;
                    } else if c == '"' {
                        out.push('\\');
                        out.push('"');
                        i += 1;
                    } else {
                        out.push(c);
                        i += 1;
                    }
                }
                out.push('"');
            }
            ',' => {
                let mut j = i + 1;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                if j < chars.len() && (chars[j] == ']' || chars[j] == '}') {
                    // trailing comma: skip it, keep the whitespace
                    i += 1;
                } else {
                    out.push(',');
                    i += 1;
                }
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

/// Coerce the parsed value into a batch
///
/// A single object becomes a one-element batch; downstream always
/// expects a sequence.
fn into_batch(value: Value) -> Result<CommandBatch> {
    let array = match value {
        Value::Array(items) => Value::Array(items),
        object @ Value::Object(_) => Value::Array(vec![object]),
        other => {
            return Err(BridgeError::MalformedOutput(format!(
                "expected array or object, got: {other}"
            )))
        }
    };
    serde_json::from_value(array).map_err(|e| BridgeError::MalformedOutput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::schema::CommandType;

    const SIMPLE_ARRAY: &str =
        r##"[{"type": "rectangle", "width": 200, "height": 100, "color": "#2563EB"}]"##;

    #[test]
    fn test_plain_array_parses() {
        let batch = normalize_response(SIMPLE_ARRAY).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].element_type, CommandType::Rectangle);
        assert_eq!(batch[0].color.as_deref(), Some("#2563EB"));
    }

    #[test]
    fn test_fenced_with_tag_equals_unfenced() {
        let fenced = format!("```json\n{SIMPLE_ARRAY}\n```");
        assert_eq!(
            normalize_response(&fenced).unwrap(),
            normalize_response(SIMPLE_ARRAY).unwrap()
        );
    }

    #[test]
    fn test_fence_tag_is_irrelevant() {
        let fenced = format!("```javascript\n{SIMPLE_ARRAY}\n```");
        assert_eq!(
            normalize_response(&fenced).unwrap(),
            normalize_response(SIMPLE_ARRAY).unwrap()
        );
    }

    #[test]
    fn test_bare_fence_without_tag() {
        let fenced = format!("```\n{SIMPLE_ARRAY}\n```");
        let batch = normalize_response(&fenced).unwrap();
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_unclosed_fence_still_parses() {
        let fenced = format!("```json\n{SIMPLE_ARRAY}");
        let batch = normalize_response(&fenced).unwrap();
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_single_object_wrapped_into_batch() {
        let raw = r#"{"type": "circle", "width": 80, "height": 80}"#;
        let batch = normalize_response(raw).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].element_type, CommandType::Circle);
    }

    #[test]
    fn test_single_quoted_strings_accepted() {
        let raw = r#"[{'type': 'text', 'text': 'Sign Up', 'fontSize': 18}]"#;
        let batch = normalize_response(raw).unwrap();
        assert_eq!(batch[0].element_type, CommandType::Text);
        assert_eq!(batch[0].text.as_deref(), Some("Sign Up"));
        assert_eq!(batch[0].font_size, Some(18.0));
    }

    #[test]
    fn test_trailing_commas_accepted() {
        let raw = r#"[{"type": "frame", "width": 1440,}, ]"#;
        let batch = normalize_response(raw).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].element_type, CommandType::Frame);
    }

    #[test]
    fn test_strict_parse_preferred_over_relaxed() {
        // An apostrophe inside a valid double-quoted string must survive
        let raw = r#"[{"type": "text", "text": "it's fine"}]"#;
        let batch = normalize_response(raw).unwrap();
        assert_eq!(batch[0].text.as_deref(), Some("it's fine"));
    }

    #[test]
    fn test_order_preserved() {
        let raw = r#"[
            {"type": "frame", "name": "Page"},
            {"type": "rectangle", "name": "Header"},
            {"type": "text", "name": "Title", "text": "Hi"}
        ]"#;
        let batch = normalize_response(raw).unwrap();
        let names: Vec<_> = batch.iter().map(|c| c.name.as_deref().unwrap()).collect();
        assert_eq!(names, vec!["Page", "Header", "Title"]);
    }

    #[test]
    fn test_prose_is_malformed() {
        let result = normalize_response("I cannot create that design for you.");
        assert!(matches!(result, Err(BridgeError::MalformedOutput(_))));
    }

    #[test]
    fn test_scalar_is_malformed() {
        let result = normalize_response("42");
        assert!(matches!(result, Err(BridgeError::MalformedOutput(_))));
    }

    #[test]
    fn test_unknown_element_type_is_malformed() {
        let raw = r#"[{"type": "blob", "width": 10}]"#;
        let result = normalize_response(raw);
        assert!(matches!(result, Err(BridgeError::MalformedOutput(_))));
    }

    #[test]
    fn test_relax_preserves_double_quoted_content() {
        let relaxed = relax_json(r#"{"text": "a, ] 'quoted' b"}"#);
        assert_eq!(relaxed, r#"{"text": "a, ] 'quoted' b"}"#);
    }

    #[test]
    fn test_relax_converts_nested_double_quotes() {
        let relaxed = relax_json(r#"{'text': 'say "hi"'}"#);
        assert_eq!(relaxed, r#"{"text": "say \"hi\""}"#);
    }
}
