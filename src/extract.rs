//! Recover the JSON object embedded in a model reply.
//!
//! Models wrap the requested JSON in prose or code fences often enough that
//! the reply cannot be parsed directly. The object is located by scanning from
//! the first `{` to its matching `}`, skipping braces inside string literals.
//! If the braces never balance (truncated or sloppy output) the span from the
//! first `{` to the last `}` is used instead.

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, VitwiError};

/// Return the JSON object span inside `text`, if there is one.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    if let Some(end) = balanced_end(&text[start..]) {
        return Some(&text[start..start + end]);
    }
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Byte length of the balanced object at the start of `s` (which begins with `{`).
fn balanced_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Extract and parse the JSON object inside a model reply.
pub fn parse_json_object(text: &str) -> Result<Value> {
    let span = extract_json_object(text).ok_or(VitwiError::NoJsonFound)?;
    serde_json::from_str(span).map_err(|e| {
        debug!(error = %e, span_len = span.len(), "model reply is not valid JSON");
        VitwiError::JsonParse(e)
    })
}
