use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Destination, User};

/// Request to rank destinations for a group
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub destinations: Vec<Destination>,
    /// Optional cap on the number of results; the configured maximum still
    /// applies on top of it.
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}
