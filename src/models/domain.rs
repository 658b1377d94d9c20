use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A group member's travel preferences as stored upstream.
///
/// The upstream API is loose about types: budgets arrive as numbers or
/// numeric strings, preference fields as real arrays, comma-joined strings,
/// or bracket-stringified lists. Everything is kept as raw JSON here and
/// interpreted by the profile builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub budget_min: Option<Value>,
    #[serde(default)]
    pub budget_max: Option<Value>,
    #[serde(default)]
    pub preferred_activities: Option<Value>,
    #[serde(default)]
    pub preferred_types: Option<Value>,
}

/// A destination record from the catalog.
///
/// The engine only reads `type`, `state`, `name` and `price_min`; every
/// other field is carried through `extra` and echoed back unchanged in the
/// response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Destination {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Aggregated preference profile for a whole travel group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupProfile {
    /// Normalized preference tokens with their occurrence counts across all
    /// users and both preference fields (multiset, not a set).
    pub tags: HashMap<String, u32>,
    /// Euclidean norm of the tag vector, computed once at build time.
    pub tag_norm: f64,
    /// Mean of the valid per-user maximum budgets, or the configured default.
    pub budget_reference: f64,
}

/// A destination with its computed group similarity score attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredDestination {
    #[serde(flatten)]
    pub destination: Destination,
    pub similarity: f64,
}

/// Scoring weights for the similarity blend
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub tags: f64,
    pub price: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self { tags: 0.8, price: 0.2 }
    }
}
