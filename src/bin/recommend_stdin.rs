//! Pipe-mode recommendation engine.
//!
//! The Node backend spawns this binary and writes one JSON request
//! (`{"users": [...], "destinations": [...]}`) to its stdin. The ranked
//! destination array is written to stdout. Failures are reported as a JSON
//! `{"error": ...}` object on stdout so the supervisor can always parse the
//! output.

use std::io::{self, Read};

use serde_json::json;
use thiserror::Error;

use aroov_algo::core::{Recommender, DEFAULT_LIMIT};
use aroov_algo::models::RecommendRequest;

/// Errors that can occur while reading the piped request
#[derive(Debug, Error)]
enum PipeError {
    #[error("Failed to read stdin: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid input data: {0}")]
    Json(#[from] serde_json::Error),
}

fn run() -> Result<String, PipeError> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    // Blank input means "nothing to rank", not an error.
    if input.trim().is_empty() {
        return Ok("[]".to_string());
    }

    let request: RecommendRequest = serde_json::from_str(&input)?;
    let limit = request
        .limit
        .map(usize::from)
        .unwrap_or(DEFAULT_LIMIT)
        .min(DEFAULT_LIMIT);

    let recommender = Recommender::with_defaults();
    let result = recommender.recommend(&request.users, request.destinations, limit);

    Ok(serde_json::to_string(&result.recommendations)?)
}

fn main() {
    let output = match run() {
        Ok(body) => body,
        Err(e) => json!({ "error": e.to_string() }).to_string(),
    };

    println!("{}", output);
}
