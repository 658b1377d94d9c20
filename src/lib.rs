//! Aroov Algo - Group recommendation service for the Aroov travel app
//!
//! This library scores a catalog of travel destinations against the
//! aggregated preferences of a group of users and returns a ranked top-N
//! list. Each request is scored independently; there is no shared state.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{build_group_profile, RecommendResult, Recommender};
pub use crate::models::{
    Destination, GroupProfile, RecommendRequest, ScoredDestination, ScoringWeights, User,
};
