use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// The user identity cached next to the credential token.
/// Persisted as a serialized record so any view can read it without
/// another round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(rename = "user_id")]
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// A campus event as the public listing endpoints return it.
/// Read-only for regular users; admins edit through [`AdminEvent`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub max_participants: Option<u32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Comments are append-only from the client: created via submission,
/// never edited or deleted outside the admin surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub author_name: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Displayable attributes of the current user, edited via a
/// full-record replace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub cover_photo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct University {
    #[serde(rename = "university_id")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: i64,
    pub question: String,
    pub answer: String,
}

/// One day from the public holiday calendar service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    #[serde(rename = "localName")]
    pub local_name: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    #[serde(rename = "feedback_id")]
    pub id: i64,
    #[serde(default)]
    pub event_id: Option<i64>,
    #[serde(default)]
    pub event_title: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub message: String,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(rename = "contact_id")]
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default, rename = "topic_type")]
    pub topic: Option<String>,
    pub message: String,
    #[serde(default)]
    pub consent: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// -- Admin projections --

/// User row as the admin panel sees it, account flags included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(rename = "user_id")]
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

/// Event row for the admin panel: active and inactive both listed,
/// with full timestamps instead of the split date/time the public
/// listing uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminEvent {
    #[serde(rename = "event_id")]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub start_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_datetime: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Counters for the admin dashboard header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_events: u64,
    pub active_events: u64,
    pub total_messages: u64,
    pub total_feedbacks: u64,
    pub pending_feedbacks: u64,
    pub new_users_week: u64,
}
