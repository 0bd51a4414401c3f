use serde::{Deserialize, Serialize};
use crate::models::domain::MatchResult;
use crate::models::requests::MatchDealRequest;

/// Response for the deal match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDealResponse {
    pub deal: MatchDealRequest,
    pub matches: Vec<MatchResult>,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub investors: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
