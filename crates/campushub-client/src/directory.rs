use campushub_types::api::{FaqPayload, UniversitiesPayload};
use campushub_types::models::{FaqItem, University};

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// The universities the platform covers. Public read.
    pub async fn list_universities(&self) -> Result<Vec<University>, ApiError> {
        let payload: UniversitiesPayload = self.get_public("/api/universities", &[]).await?;
        Ok(payload.universities)
    }

    /// Frequently asked questions. Public read.
    pub async fn list_faq(&self) -> Result<Vec<FaqItem>, ApiError> {
        let payload: FaqPayload = self.get_public("/api/faq", &[]).await?;
        Ok(payload.faqs)
    }
}
