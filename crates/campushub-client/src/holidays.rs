use campushub_types::models::Holiday;
use reqwest::Client;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Read-only client for the public holiday calendar service.
///
/// Separate from [`crate::ApiClient`] on purpose: this service is
/// unauthenticated, external, and answers with a bare JSON array
/// instead of the backend's success/message envelope.
#[derive(Clone)]
pub struct HolidayClient {
    http: Client,
    base: Url,
    country: String,
}

impl HolidayClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: Client::new(),
            base: config.holiday_base.clone(),
            country: config.country.clone(),
        }
    }

    /// Public holidays for the configured country in the given year.
    pub async fn public_holidays(&self, year: i32) -> Result<Vec<Holiday>, ApiError> {
        let path = format!("/api/v3/PublicHolidays/{year}/{}", self.country);
        let url = self
            .base
            .join(&path)
            .map_err(|err| ApiError::Decode(format!("bad holiday URL: {err}")))?;

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Rejected(format!(
                "holiday service answered with status {status}"
            )));
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
    }
}
