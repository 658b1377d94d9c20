use crate::models::{Destination, GroupProfile};
use serde_json::Value;
use std::collections::HashMap;

/// Coerce a loose JSON scalar to the text the vectorizer should see.
///
/// Strings pass through, numbers and booleans are stringified, anything else
/// (null, arrays, objects) contributes nothing.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Count whitespace-separated lower-case tokens in a piece of text.
pub fn token_counts(text: &str) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for token in text.to_lowercase().split_whitespace() {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Build the token vector for a destination from its `type`, `state` and
/// `name` fields. Missing fields contribute nothing.
pub fn destination_tokens(destination: &Destination) -> HashMap<String, u32> {
    let text = format!(
        "{} {} {}",
        destination.kind.as_ref().map(value_text).unwrap_or_default(),
        destination.state.as_ref().map(value_text).unwrap_or_default(),
        destination.name.as_ref().map(value_text).unwrap_or_default(),
    );
    token_counts(&text)
}

/// Euclidean norm of a sparse count vector.
pub fn vector_norm(counts: &HashMap<String, u32>) -> f64 {
    counts
        .values()
        .map(|&c| f64::from(c) * f64::from(c))
        .sum::<f64>()
        .sqrt()
}

/// Cosine similarity (0-1) between the group tag vector and a destination
/// token vector
///
/// Dot product over the shared tokens divided by the product of the two
/// Euclidean norms. A destination with no tokens scores 0. The group norm is
/// precomputed on the profile; the fallback vocabulary keeps it non-zero, but
/// a zero value must not divide.
pub fn cosine_similarity(profile: &GroupProfile, dest_tokens: &HashMap<String, u32>) -> f64 {
    let dest_norm = vector_norm(dest_tokens);
    if dest_norm == 0.0 {
        return 0.0;
    }

    let group_norm = if profile.tag_norm > 0.0 {
        profile.tag_norm
    } else {
        1.0
    };

    let dot: f64 = dest_tokens
        .iter()
        .filter_map(|(token, &count)| {
            profile
                .tags
                .get(token)
                .map(|&group_count| f64::from(group_count) * f64::from(count))
        })
        .sum();

    (dot / (group_norm * dest_norm)).clamp(0.0, 1.0)
}
