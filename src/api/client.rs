use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use crate::api::clean::{clean_mentors, RawMentor};
use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::model::{Mentor, Preferences};

const MENTORS_PATH: &str = "/api/v1/mentors";

/// Submission body for creating a mentor. The service assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewMentor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    pub preferences: Preferences,
}

/// Client for the remote mentor-matching service.
///
/// Every call is fire-once: one outstanding request, awaited to
/// completion, no retry or cancellation.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .expect("Failed to build API client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn mentors_url(&self) -> String {
        format!("{}{}", self.base_url, MENTORS_PATH)
    }

    /// Fetch the mentor collection: GET, decode the raw rows, clean
    /// them into [`Mentor`] values. Any connection, status, or decode
    /// failure propagates.
    pub async fn fetch_mentors(&self) -> Result<Vec<Mentor>, ApiError> {
        let url = self.mentors_url();
        debug!(url = %url, "fetching mentors");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Connection { source: e })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let raw: Vec<RawMentor> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode { source: e })?;

        Ok(clean_mentors(raw))
    }

    /// Submit a new mentor: POST the JSON body, decode the status
    /// object the service answers with and log it. Nothing is returned
    /// to the caller.
    pub async fn post_mentor(&self, mentor: &NewMentor) -> Result<(), ApiError> {
        let url = self.mentors_url();
        debug!(url = %url, name = %mentor.name, "posting mentor");

        let response = self
            .client
            .post(&url)
            .json(mentor)
            .send()
            .await
            .map_err(|e| ApiError::Connection { source: e })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ApiError::Decode { source: e })?;

        info!(status = %body, "mentor service accepted submission");
        Ok(())
    }
}
