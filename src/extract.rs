//! Pulls the JSON object out of free-form model text.
//!
//! Models often wrap the requested object in prose or code fences. Only
//! top-level `{...}` spans are candidates: once a candidate fails to parse,
//! scanning resumes after its closing brace, so its nested objects are never
//! returned in its place. A top-level `{` that never closes ends the scan.
//! Braces inside JSON string literals do not count toward nesting.

use serde_json::Value;
use crate::error::{AppError, Result};

pub fn extract_json_object(text: &str) -> Result<Value> {
    let mut first_error = None;
    let mut pos = 0;

    while let Some(offset) = text[pos..].find('{') {
        let start = pos + offset;
        let Some(end) = balanced_end(&text[start..]) else {
            // Truncated object: parse up to the last `}` so it fails as malformed
            if let Some(last) = text[start..].rfind('}') {
                match serde_json::from_str::<Value>(&text[start..=start + last]) {
                    Ok(value) => return Ok(value),
                    Err(e) => {
                        first_error.get_or_insert(e);
                    }
                }
            }
            break;
        };
        match serde_json::from_str::<Value>(&text[start..start + end]) {
            Ok(value) => return Ok(value),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
        pos = start + end;
    }

    Err(match first_error {
        Some(e) => AppError::MalformedJson(e),
        None => AppError::NoJsonFound,
    })
}

/// Byte length of the object starting at the `{` at the head of `s`, if it closes.
fn balanced_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in s.bytes().enumerate() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}
