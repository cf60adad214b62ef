use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::settings::NarratorSettings;
use crate::models::match_data::TeamScore;

/// Substitute status line when the narrator is unreachable or returns
/// nothing. Same sentence the original app fell back to.
pub const FALLBACK_STATUS: &str = "Match is getting interesting.";

#[derive(Debug, Error)]
pub enum NarrationError {
    #[error("narrator service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("invalid narrator response: {0}")]
    InvalidResponse(String),

    #[error("narrator request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NarrationRequest<'a> {
    team_a: &'a TeamScore,
    team_b: &'a TeamScore,
    total_overs: u32,
}

#[derive(Debug, Deserialize)]
struct NarrationResponse {
    status: String,
}

/// Client for the external text-generation service that turns two scorelines
/// into a one-sentence match summary.
#[derive(Clone)]
pub struct NarratorService {
    client: Client,
    base_url: String,
    api_key: SecretString,
    timeout: Duration,
    total_overs: u32,
}

impl NarratorService {
    pub fn new(settings: &NarratorSettings) -> Self {
        Self {
            client: Client::new(),
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
            total_overs: settings.total_overs,
        }
    }

    /// Best-effort status line. Any failure is absorbed and replaced with
    /// the fixed fallback so a narrator outage never blocks a score update.
    pub async fn generate_status(&self, team_a: &TeamScore, team_b: &TeamScore) -> String {
        match self.narrate(team_a, team_b).await {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!("Narrator call failed, using fallback status: {}", e);
                FALLBACK_STATUS.to_string()
            }
        }
    }

    pub async fn narrate(
        &self,
        team_a: &TeamScore,
        team_b: &TeamScore,
    ) -> Result<String, NarrationError> {
        let url = format!("{}/generate_status", self.base_url);

        tracing::debug!("Calling narrator service at {}", url);

        let response = self
            .client
            .post(&url)
            .header("X-API-Key", self.api_key.expose_secret())
            .json(&NarrationRequest {
                team_a,
                team_b,
                total_overs: self.total_overs,
            })
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NarrationError::Timeout
                } else {
                    NarrationError::Network(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(NarrationError::ServiceUnavailable(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let narration: NarrationResponse = response.json().await?;

        // An empty sentence counts as a failure, not a status.
        let status = narration.status.trim().to_string();
        if status.is_empty() {
            return Err(NarrationError::InvalidResponse("empty status".to_string()));
        }

        tracing::info!("Narrator produced status: {}", status);

        Ok(status)
    }
}
