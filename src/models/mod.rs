// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Destination, GroupProfile, ScoredDestination, ScoringWeights, User};
pub use requests::RecommendRequest;
pub use responses::{ErrorResponse, HealthResponse};
