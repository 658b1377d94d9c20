use crate::core::similarity::{value_text, vector_norm};
use crate::models::{GroupProfile, User};
use serde_json::Value;
use std::collections::HashMap;

/// Generic interests used when no group member supplies any usable tags.
pub const FALLBACK_TAGS: [&str; 6] = ["nature", "city", "relax", "scenic", "food", "adventure"];

/// Budget reference used when no group member has a parseable `budget_max`.
pub const DEFAULT_BUDGET: f64 = 5000.0;

/// Build the aggregated profile for a group of users
///
/// Budgets and preference fields are parsed leniently: a user whose fields
/// are absent or malformed simply contributes nothing, and the fixed
/// fallbacks kick in when the whole group contributes nothing.
pub fn build_group_profile(users: &[User], default_budget: f64) -> GroupProfile {
    let budgets: Vec<f64> = users
        .iter()
        .filter_map(|u| parse_budget(u.budget_max.as_ref()))
        .collect();

    let mut budget_reference = if budgets.is_empty() {
        default_budget
    } else {
        budgets.iter().sum::<f64>() / budgets.len() as f64
    };

    // The reference must stay finite and positive even when upstream data is
    // nonsense (e.g. negative budgets).
    if !budget_reference.is_finite() || budget_reference <= 0.0 {
        budget_reference = default_budget;
    }

    let mut tags: HashMap<String, u32> = HashMap::new();
    for user in users {
        for token in parse_tag_field(user.preferred_activities.as_ref()) {
            *tags.entry(token).or_insert(0) += 1;
        }
        for token in parse_tag_field(user.preferred_types.as_ref()) {
            *tags.entry(token).or_insert(0) += 1;
        }
    }

    if tags.is_empty() {
        tags = FALLBACK_TAGS.iter().map(|&t| (t.to_string(), 1)).collect();
    }

    let tag_norm = vector_norm(&tags);

    GroupProfile {
        tags,
        tag_norm,
        budget_reference,
    }
}

/// Parse a budget value as a float
///
/// Numbers pass through, strings are trimmed and parsed. Absent, null,
/// blank, unparseable or non-finite values are skipped.
pub fn parse_budget(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    parsed.is_finite().then_some(parsed)
}

/// Decode one preference field into normalized tags
///
/// Accepts a real JSON array, a comma-joined string, a bracket-stringified
/// list, or a single bare token. Pure function; malformed input yields an
/// empty list rather than an error.
pub fn parse_tag_field(value: Option<&Value>) -> Vec<String> {
    let raw: Vec<String> = match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(value_text).collect(),
        Some(Value::String(s)) => split_tag_string(s),
        // Bare numbers, booleans and objects carry no usable tags.
        Some(_) => Vec::new(),
    };

    raw.iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Split a string-encoded tag list. JSON-array syntax is tried first; on
/// failure brackets and quotes are stripped and the rest splits on commas.
fn split_tag_string(s: &str) -> Vec<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if trimmed.starts_with('[') {
        if let Ok(items) = serde_json::from_str::<Vec<Value>>(trimmed) {
            return items.iter().map(value_text).collect();
        }
    }

    trimmed
        .replace(['[', ']', '"', '\''], "")
        .split(',')
        .map(str::to_string)
        .collect()
}
