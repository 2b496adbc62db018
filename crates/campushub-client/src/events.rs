use campushub_types::api::{CommentPayload, EventDetailsPayload, EventListPayload, NewComment};
use campushub_types::models::{Comment, Event};
use chrono::NaiveDate;

use crate::error::ApiError;
use crate::http::ApiClient;

/// Optional filters for the public event listing. Changing a filter
/// re-fires the load; there is no client-side filtering.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub university: Option<String>,
    pub date: Option<NaiveDate>,
}

impl EventFilter {
    pub fn by_university(name: impl Into<String>) -> Self {
        Self { university: Some(name.into()), date: None }
    }

    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(university) = &self.university {
            query.push(("university", university.clone()));
        }
        if let Some(date) = self.date {
            query.push(("date", date.to_string()));
        }
        query
    }
}

impl ApiClient {
    /// Active events, optionally filtered. An empty list is a valid
    /// answer, not an error.
    pub async fn list_events(&self, filter: &EventFilter) -> Result<Vec<Event>, ApiError> {
        let payload: EventListPayload = self.get("/api/events", &filter.to_query()).await?;
        Ok(payload.events)
    }

    /// One event plus its comments, fetched in a single round trip.
    pub async fn event_details(&self, event_id: i64) -> Result<(Event, Vec<Comment>), ApiError> {
        let payload: EventDetailsPayload =
            self.get(&format!("/api/events/{event_id}"), &[]).await?;
        Ok((payload.event, payload.comments))
    }

    /// Append a comment. On acknowledgment the server returns the
    /// stored comment, which the caller prepends to its local list.
    pub async fn post_comment(&self, event_id: i64, message: &str) -> Result<Comment, ApiError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ApiError::Rejected("Please write a comment first.".to_string()));
        }

        let req = NewComment { message: message.to_string(), rating: None };
        let payload: CommentPayload = self
            .post(&format!("/api/events/{event_id}/comments"), &req)
            .await?;
        Ok(payload.comment)
    }
}
