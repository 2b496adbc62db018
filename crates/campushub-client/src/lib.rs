//! Headless client for the CampusHub backend.
//!
//! Everything a view needs goes through the same pipeline: check the
//! stored credential, load independent resources concurrently, merge
//! into local state, and reconcile optimistic mutations against the
//! server's acknowledgment. The backend itself is a plain JSON-over-HTTP
//! service; this crate owns no authoritative data.

pub mod activation;
pub mod admin;
pub mod auth;
pub mod calendar;
pub mod config;
pub mod directory;
pub mod error;
pub mod events;
pub mod favorites;
pub mod feedback;
pub mod holidays;
pub mod http;
pub mod loader;
pub mod profile;
pub mod session;
pub mod view;

pub use activation::{Liveness, ViewActivation};
pub use admin::{Confirmation, DeleteOutcome};
pub use calendar::{DayMarks, EventMark};
pub use config::ClientConfig;
pub use error::ApiError;
pub use events::EventFilter;
pub use favorites::{FavoriteSet, toggle_favorite};
pub use feedback::FeedbackFilter;
pub use holidays::HolidayClient;
pub use http::ApiClient;
pub use profile::PhotoKind;
pub use session::{Gate, MemorySessionStore, Session, SessionContext, SessionStore};
pub use view::{
    Activated, AdminUsersViewState, EventsViewState, ProfileViewState,
    activate_admin_users_view, activate_events_view, activate_profile_view,
};
