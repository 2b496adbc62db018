use campushub_types::api::{
    ContactCreated, FeedbackCreated, FeedbackListPayload, NewContact, NewFeedback,
};
use campushub_types::models::FeedbackEntry;

use crate::error::ApiError;
use crate::http::ApiClient;

/// Optional filters for the feedback listing.
#[derive(Debug, Clone, Default)]
pub struct FeedbackFilter {
    pub event_id: Option<i64>,
    pub status: Option<String>,
}

impl FeedbackFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(event_id) = self.event_id {
            query.push(("event_id", event_id.to_string()));
        }
        if let Some(status) = &self.status {
            query.push(("status", status.clone()));
        }
        query
    }
}

impl ApiClient {
    /// File feedback about an event. Requires a message; everything
    /// else is optional and validated server-side.
    pub async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<i64, ApiError> {
        if feedback.message.trim().is_empty() {
            return Err(ApiError::Rejected("Feedback message cannot be empty.".to_string()));
        }
        let created: FeedbackCreated = self.post("/api/feedback", feedback).await?;
        Ok(created.feedback_id)
    }

    pub async fn list_feedback(
        &self,
        filter: &FeedbackFilter,
    ) -> Result<Vec<FeedbackEntry>, ApiError> {
        let payload: FeedbackListPayload = self.get("/api/feedback", &filter.to_query()).await?;
        Ok(payload.feedbacks)
    }

    /// Submit the contact form. Consent and field completeness are
    /// enforced by the server; its validation text comes back as
    /// [`ApiError::Rejected`] with the form state untouched.
    pub async fn submit_contact(&self, contact: &NewContact) -> Result<i64, ApiError> {
        let created: ContactCreated = self.post_public("/api/contact", contact).await?;
        Ok(created.contact_id)
    }
}
