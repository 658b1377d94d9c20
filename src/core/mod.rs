// Core algorithm exports
pub mod profile;
pub mod recommender;
pub mod scoring;
pub mod similarity;

pub use profile::{build_group_profile, parse_budget, parse_tag_field, DEFAULT_BUDGET, FALLBACK_TAGS};
pub use recommender::{RecommendResult, Recommender, DEFAULT_LIMIT};
pub use scoring::{calculate_similarity, price_similarity};
pub use similarity::{cosine_similarity, destination_tokens, token_counts};
