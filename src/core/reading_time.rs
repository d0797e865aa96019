//! Reading-time estimate for rich-content bodies.
//!
//! A body is a sequence of blocks; a block may carry `children` spans with a
//! `text` field. Only span text is counted, never block or mark structure.

use serde_json::Value;

/// Words read per minute
pub const WORDS_PER_MINUTE: usize = 200;

/// Label returned when there is no block sequence to measure
pub const FALLBACK_LABEL: &str = "5 min read";

/// Estimate reading time as a `"<n> min read"` label.
///
/// A block sequence with no words yields `"0 min read"`.
pub fn reading_time(body: Option<&Value>) -> String {
    match body.and_then(Value::as_array) {
        Some(blocks) => {
            let minutes = word_count(blocks).div_ceil(WORDS_PER_MINUTE);
            format!("{} min read", minutes)
        }
        None => FALLBACK_LABEL.to_string(),
    }
}

/// Count words across all span text in the given blocks
pub fn word_count(blocks: &[Value]) -> usize {
    let text = blocks
        .iter()
        .flat_map(span_texts)
        .collect::<Vec<_>>()
        .join(" ");

    text.split_whitespace().count()
}

fn span_texts(block: &Value) -> Vec<&str> {
    block
        .get("children")
        .and_then(Value::as_array)
        .map(|children| {
            children
                .iter()
                .filter_map(|span| span.get("text").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default()
}
