use crate::models::domain::{MatchWithUsers, Profile, RankedMatch};
use serde::{Deserialize, Serialize};

/// Envelope for profile endpoints: `{ success, data?, error? }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Profile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProfileResponse {
    pub fn ok(profile: Profile) -> Self {
        Self { success: true, data: Some(profile), error: None }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(message.into()) }
    }
}

/// Envelope for GET /api/matching/find: `{ success, matches?, error? }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<RankedMatch>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FindMatchesResponse {
    pub fn ok(matches: Vec<RankedMatch>) -> Self {
        Self { success: true, matches: Some(matches), error: None }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self { success: false, matches: None, error: Some(message.into()) }
    }
}

/// Envelope for GET /api/matching/user: persisted matches with nested users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMatchesResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<MatchWithUsers>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UserMatchesResponse {
    pub fn ok(matches: Vec<MatchWithUsers>) -> Self {
        Self { success: true, matches: Some(matches), error: None }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self { success: false, matches: None, error: Some(message.into()) }
    }
}

/// Envelope for POST /api/matching/create: `{ success, error? }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMatchResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CreateMatchResponse {
    pub fn ok() -> Self {
        Self { success: true, error: None }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self { success: false, error: Some(message.into()) }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
