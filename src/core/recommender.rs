use crate::core::profile::build_group_profile;
use crate::core::scoring::calculate_similarity;
use crate::models::{Destination, ScoredDestination, ScoringWeights, User};

/// Default number of recommendations returned per request.
pub const DEFAULT_LIMIT: usize = 10;

/// Result of a recommendation run
#[derive(Debug)]
pub struct RecommendResult {
    pub recommendations: Vec<ScoredDestination>,
    pub total_destinations: usize,
}

/// Main recommendation orchestrator
///
/// # Pipeline stages
/// 1. Build the group profile (tags + budget reference)
/// 2. Score every destination independently
/// 3. Rank by similarity and truncate
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
    default_budget: f64,
}

impl Recommender {
    pub fn new(weights: ScoringWeights, default_budget: f64) -> Self {
        Self {
            weights,
            default_budget,
        }
    }

    pub fn with_defaults() -> Self {
        Self {
            weights: ScoringWeights::default(),
            default_budget: crate::core::profile::DEFAULT_BUDGET,
        }
    }

    /// Rank destinations for a group of users
    ///
    /// Destinations are scored independently; one that cannot be scored is
    /// dropped without affecting the rest. The sort is stable, so equal
    /// scores keep their input order.
    ///
    /// # Arguments
    /// * `users` - The travel group's member records
    /// * `destinations` - The destination catalog to rank
    /// * `limit` - Maximum number of recommendations to return
    pub fn recommend(
        &self,
        users: &[User],
        destinations: Vec<Destination>,
        limit: usize,
    ) -> RecommendResult {
        let total_destinations = destinations.len();

        if users.is_empty() || destinations.is_empty() {
            return RecommendResult {
                recommendations: Vec::new(),
                total_destinations,
            };
        }

        let profile = build_group_profile(users, self.default_budget);

        let mut scored: Vec<ScoredDestination> = destinations
            .into_iter()
            .filter_map(|destination| {
                let similarity = calculate_similarity(&profile, &destination, &self.weights);

                // A non-finite score means the record could not be processed;
                // drop it rather than poison the ordering.
                similarity.is_finite().then(|| ScoredDestination {
                    destination,
                    similarity,
                })
            })
            .collect();

        scored.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored.truncate(limit);

        RecommendResult {
            recommendations: scored,
            total_destinations,
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_defaults()
    }
}
