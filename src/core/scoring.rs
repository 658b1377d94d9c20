use crate::core::similarity::{cosine_similarity, destination_tokens};
use crate::models::{Destination, GroupProfile, ScoringWeights};
use serde_json::Value;

/// Price similarity assigned when a destination's price cannot be read at
/// all (wrong type, unparseable string).
pub const NEUTRAL_PRICE_SIMILARITY: f64 = 0.5;

/// Calculate the affordability signal (0-1) for a destination
///
/// A missing or blank price counts as 0, which is always affordable. A price
/// within the group's reference budget scores 1.0; beyond it the score decays
/// as `budget / price`.
pub fn price_similarity(price_min: Option<&Value>, budget_reference: f64) -> f64 {
    let price = match price_min {
        None | Some(Value::Null) => 0.0,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(p) if p.is_finite() => p,
            _ => return NEUTRAL_PRICE_SIMILARITY,
        },
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                // Upstream sends "" for unpriced rows; same as missing.
                0.0
            } else {
                match trimmed.parse::<f64>() {
                    Ok(p) if p.is_finite() => p,
                    _ => return NEUTRAL_PRICE_SIMILARITY,
                }
            }
        }
        Some(_) => return NEUTRAL_PRICE_SIMILARITY,
    };

    if price <= budget_reference {
        1.0
    } else {
        (budget_reference / price).max(0.0)
    }
}

/// Calculate the blended similarity score (0-1) for a destination
///
/// Scoring formula:
/// score = (
///     tag_similarity * 0.8 +       # Lexical overlap with group tags
///     price_similarity * 0.2       # Affordability against group budget
/// )
pub fn calculate_similarity(
    profile: &GroupProfile,
    destination: &Destination,
    weights: &ScoringWeights,
) -> f64 {
    let tag_sim = cosine_similarity(profile, &destination_tokens(destination));
    let price_sim = price_similarity(destination.price_min.as_ref(), profile.budget_reference);

    (tag_sim * weights.tags + price_sim * weights.price).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::{build_group_profile, DEFAULT_BUDGET};
    use crate::models::User;
    use serde_json::json;

    fn destination(kind: &str, state: &str, name: &str, price_min: Value) -> Destination {
        Destination {
            kind: Some(json!(kind)),
            state: Some(json!(state)),
            name: Some(json!(name)),
            price_min: Some(price_min),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_price_within_budget() {
        assert_eq!(price_similarity(Some(&json!(100)), 5000.0), 1.0);
        assert_eq!(price_similarity(Some(&json!("4999.99")), 5000.0), 1.0);
    }

    #[test]
    fn test_price_at_exact_budget() {
        assert_eq!(price_similarity(Some(&json!(1000)), 1000.0), 1.0);
    }

    #[test]
    fn test_price_beyond_budget_decays() {
        // 2x the budget halves the score
        assert_eq!(price_similarity(Some(&json!(2000)), 1000.0), 0.5);
        // 10x the budget
        assert_eq!(price_similarity(Some(&json!(10000)), 1000.0), 0.1);
    }

    #[test]
    fn test_price_missing_counts_as_zero() {
        assert_eq!(price_similarity(None, 1000.0), 1.0);
        assert_eq!(price_similarity(Some(&json!(null)), 1000.0), 1.0);
        assert_eq!(price_similarity(Some(&json!("")), 1000.0), 1.0);
    }

    #[test]
    fn test_price_unparseable_is_neutral() {
        assert_eq!(
            price_similarity(Some(&json!("call us")), 1000.0),
            NEUTRAL_PRICE_SIMILARITY
        );
        assert_eq!(
            price_similarity(Some(&json!({"amount": 5})), 1000.0),
            NEUTRAL_PRICE_SIMILARITY
        );
    }

    #[test]
    fn test_blend_formula() {
        let users = vec![User {
            preferred_activities: Some(json!("beach,hiking")),
            ..User::default()
        }];
        let profile = build_group_profile(&users, DEFAULT_BUDGET);
        let dest = destination("Beach", "FL", "Coastal Park", json!(100));

        let score = calculate_similarity(&profile, &dest, &ScoringWeights::default());

        // price <= default budget, so the price term contributes exactly 0.2
        let tag_sim = cosine_similarity(&profile, &destination_tokens(&dest));
        assert!(tag_sim > 0.0);
        assert!((score - (0.8 * tag_sim + 0.2)).abs() < 1e-9);
    }

    #[test]
    fn test_score_within_unit_range() {
        let users = vec![User {
            preferred_activities: Some(json!(["beach", "beach", "beach"])),
            budget_max: Some(json!(50)),
            ..User::default()
        }];
        let profile = build_group_profile(&users, DEFAULT_BUDGET);
        let dest = destination("Beach", "FL", "Beach Beach Beach", json!(1_000_000));

        let score = calculate_similarity(&profile, &dest, &ScoringWeights::default());
        assert!((0.0..=1.0).contains(&score));
    }
}
