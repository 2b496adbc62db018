use std::collections::HashSet;

use campushub_types::api::{Ack, EventListPayload};
use campushub_types::models::Event;
use tracing::info;

use crate::error::ApiError;
use crate::http::ApiClient;

/// The set of event ids the current user tracks on their personal
/// calendar. Client-held and non-authoritative: the server copy wins on
/// the next load.
#[derive(Debug, Clone, Default)]
pub struct FavoriteSet {
    ids: HashSet<i64>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events(events: &[Event]) -> Self {
        Self { ids: events.iter().map(|e| e.id).collect() }
    }

    pub fn from_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        Self { ids: ids.into_iter().collect() }
    }

    pub fn contains(&self, event_id: i64) -> bool {
        self.ids.contains(&event_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn insert(&mut self, event_id: i64) {
        self.ids.insert(event_id);
    }

    fn remove(&mut self, event_id: i64) {
        self.ids.remove(&event_id);
    }
}

impl ApiClient {
    /// The favorited events backing the personal calendar view.
    pub async fn my_calendar(&self) -> Result<Vec<Event>, ApiError> {
        let payload: EventListPayload = self.get("/api/favorites", &[]).await?;
        Ok(payload.events)
    }

    pub async fn add_favorite(&self, event_id: i64) -> Result<(), ApiError> {
        let _: Ack = self
            .post(&format!("/api/favorites/{event_id}"), &serde_json::json!({}))
            .await?;
        Ok(())
    }

    pub async fn remove_favorite(&self, event_id: i64) -> Result<(), ApiError> {
        let _: Ack = self.delete(&format!("/api/favorites/{event_id}")).await?;
        Ok(())
    }
}

/// Toggle membership optimistically: flip the local bit first so the UI
/// answers immediately, then issue the matching add/remove request. A
/// server failure rolls the flip back, so local state never drifts from
/// the server's.
///
/// Returns whether the event is a favorite after the toggle.
pub async fn toggle_favorite(
    client: &ApiClient,
    favorites: &mut FavoriteSet,
    event_id: i64,
) -> Result<bool, ApiError> {
    let was_member = favorites.contains(event_id);

    if was_member {
        favorites.remove(event_id);
    } else {
        favorites.insert(event_id);
    }

    let result = if was_member {
        client.remove_favorite(event_id).await
    } else {
        client.add_favorite(event_id).await
    };

    match result {
        Ok(()) => {
            info!(event_id, favorited = !was_member, "favorite toggled");
            Ok(!was_member)
        }
        Err(err) => {
            // Undo the optimistic flip before surfacing the failure.
            if was_member {
                favorites.insert(event_id);
            } else {
                favorites.remove(event_id);
            }
            Err(err)
        }
    }
}
