use crate::models::Profile;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to Supabase
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid service role key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Supabase profile store adapter
///
/// All profile reads and writes go through Supabase's PostgREST interface:
/// - Fetching a single profile
/// - Listing the candidate pool for matching
/// - Replacing a profile on save
pub struct SupabaseClient {
    base_url: String,
    service_key: String,
    table: String,
    client: Client,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(base_url: String, service_key: String, table: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, service_key, table, client }
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            self.table
        )
    }

    fn check_auth(status: reqwest::StatusCode) -> Result<(), SupabaseError> {
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(SupabaseError::Unauthorized);
        }
        Ok(())
    }

    /// Fetch a single profile by user id
    pub async fn get_profile(&self, user_id: &str) -> Result<Profile, SupabaseError> {
        let url = format!(
            "{}?user_id=eq.{}&select=*&limit=1",
            self.table_url(),
            urlencoding::encode(user_id)
        );

        tracing::debug!("Fetching profile for user: {}", user_id);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await?;

        let status = response.status();
        Self::check_auth(status)?;
        if !status.is_success() {
            return Err(SupabaseError::ApiError(format!(
                "Failed to fetch profile: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        let rows = json
            .as_array()
            .ok_or_else(|| SupabaseError::InvalidResponse("Expected a row array".into()))?;

        let row = rows
            .first()
            .ok_or_else(|| SupabaseError::NotFound(format!("Profile not found for user {}", user_id)))?;

        serde_json::from_value(row.clone())
            .map_err(|e| SupabaseError::InvalidResponse(format!("Failed to parse profile: {}", e)))
    }

    /// List the candidate pool for a user: every other profile
    ///
    /// The requester is excluded server-side; rows that fail to parse are
    /// skipped rather than failing the whole pool.
    pub async fn list_candidates(&self, user_id: &str) -> Result<Vec<Profile>, SupabaseError> {
        let url = format!(
            "{}?user_id=neq.{}&select=*",
            self.table_url(),
            urlencoding::encode(user_id)
        );

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await?;

        let status = response.status();
        Self::check_auth(status)?;
        if !status.is_success() {
            return Err(SupabaseError::ApiError(format!(
                "Failed to list candidates: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        let rows = json
            .as_array()
            .ok_or_else(|| SupabaseError::InvalidResponse("Expected a row array".into()))?;

        let profiles: Vec<Profile> = rows
            .iter()
            .filter_map(|row| serde_json::from_value(row.clone()).ok())
            .filter(|p: &Profile| p.user_id != user_id)
            .collect();

        tracing::debug!("Listed {} candidates for {}", profiles.len(), user_id);

        Ok(profiles)
    }

    /// Replace a profile, creating the row on first save
    ///
    /// Uses PostgREST upsert (merge-duplicates on the user_id key) and asks
    /// for the stored representation back.
    pub async fn upsert_profile(&self, profile: &Profile) -> Result<Profile, SupabaseError> {
        let url = format!("{}?on_conflict=user_id", self.table_url());

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .json(&[profile])
            .send()
            .await?;

        let status = response.status();
        Self::check_auth(status)?;
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to upsert profile for {}: {} - {}", profile.user_id, status, body);
            return Err(SupabaseError::ApiError(format!(
                "Failed to save profile: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        let rows = json
            .as_array()
            .ok_or_else(|| SupabaseError::InvalidResponse("Expected a row array".into()))?;

        let row = rows
            .first()
            .ok_or_else(|| SupabaseError::InvalidResponse("Upsert returned no rows".into()))?;

        serde_json::from_value(row.clone())
            .map_err(|e| SupabaseError::InvalidResponse(format!("Failed to parse profile: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supabase_client_creation() {
        let client = SupabaseClient::new(
            "https://project.supabase.co/".to_string(),
            "service_key".to_string(),
            "profiles".to_string(),
        );

        assert_eq!(client.table_url(), "https://project.supabase.co/rest/v1/profiles");
    }

    #[test]
    fn test_auth_statuses_map_to_unauthorized() {
        assert!(matches!(
            SupabaseClient::check_auth(reqwest::StatusCode::UNAUTHORIZED),
            Err(SupabaseError::Unauthorized)
        ));
        assert!(SupabaseClient::check_auth(reqwest::StatusCode::OK).is_ok());
    }
}
