//! Session-gated view activations.
//!
//! Each activation follows the same pipeline: synchronous credential
//! check first (no protected state is produced before the redirect
//! decision), then every independent resource load runs concurrently
//! with its failures isolated, and finally the merged state is applied
//! only if the activation is still alive. Responses may resolve in any
//! order; the merge touches disjoint slices, so ordering cannot change
//! the outcome.

use campushub_types::models::{AdminUser, Event, Profile};

use crate::activation::Liveness;
use crate::error::ApiError;
use crate::events::EventFilter;
use crate::favorites::FavoriteSet;
use crate::http::ApiClient;
use crate::loader::{Slice, isolated};
use crate::session::Gate;

/// Result of activating a session-gated view.
#[derive(Debug)]
pub enum Activated<T> {
    Ready(T),
    /// No valid session, or the server rejected the credential
    /// mid-load. The session store is already cleared in the latter
    /// case; the caller navigates to the entry view.
    RedirectToEntry,
    /// The view was torn down while loads were in flight; the state
    /// was discarded, not merged.
    TornDown,
}

impl<T> Activated<T> {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Activated::RedirectToEntry)
    }
}

/// Merged state of the events view: the filtered listing plus the
/// user's favorite membership.
pub struct EventsViewState {
    pub events: Vec<Event>,
    pub favorites: FavoriteSet,
    /// Transient notices from slices that failed and fell back to
    /// their defaults.
    pub notices: Vec<String>,
}

/// Merged state of the profile view.
pub struct ProfileViewState {
    pub profile: Option<Profile>,
    /// The user's favorited events, shown as their personal calendar.
    pub calendar: Vec<Event>,
    pub notices: Vec<String>,
}

/// Merged state of the admin user-management view.
pub struct AdminUsersViewState {
    pub users: Vec<AdminUser>,
    pub notices: Vec<String>,
}

fn collect_notices(notices: &mut Vec<String>, slices: &mut [&mut Option<String>]) {
    for notice in slices.iter_mut() {
        if let Some(text) = notice.take() {
            notices.push(text);
        }
    }
}

/// Activate the events view: list events under the current filter and
/// load the favorite set, concurrently. Either load failing leaves the
/// other populated.
pub async fn activate_events_view(
    client: &ApiClient,
    filter: &EventFilter,
    live: &Liveness,
) -> Activated<EventsViewState> {
    let Gate::Proceed(_) = client.session().guard() else {
        return Activated::RedirectToEntry;
    };

    let (events, favorites) = tokio::join!(
        isolated("events", Vec::new(), client.list_events(filter)),
        isolated("favorites", Vec::new(), client.my_calendar()),
    );

    let (mut events, mut favorites) = match unauthorized_check(events, favorites) {
        Ok(slices) => slices,
        Err(()) => return Activated::RedirectToEntry,
    };

    if !live.is_live() {
        return Activated::TornDown;
    }

    let mut notices = Vec::new();
    collect_notices(&mut notices, &mut [&mut events.notice, &mut favorites.notice]);

    Activated::Ready(EventsViewState {
        events: events.value,
        favorites: FavoriteSet::from_events(&favorites.value),
        notices,
    })
}

/// Activate the profile view: the user's own record and their personal
/// calendar, loaded concurrently.
pub async fn activate_profile_view(
    client: &ApiClient,
    live: &Liveness,
) -> Activated<ProfileViewState> {
    let Gate::Proceed(_) = client.session().guard() else {
        return Activated::RedirectToEntry;
    };

    let (profile, calendar) = tokio::join!(
        isolated("profile", None, async { client.fetch_profile().await.map(Some) }),
        isolated("calendar", Vec::new(), client.my_calendar()),
    );

    let (mut profile, mut calendar) = match unauthorized_check(profile, calendar) {
        Ok(slices) => slices,
        Err(()) => return Activated::RedirectToEntry,
    };

    if !live.is_live() {
        return Activated::TornDown;
    }

    let mut notices = Vec::new();
    collect_notices(&mut notices, &mut [&mut profile.notice, &mut calendar.notice]);

    Activated::Ready(ProfileViewState {
        profile: profile.value,
        calendar: calendar.value,
        notices,
    })
}

/// Activate the admin user-management view. The guard runs before any
/// request: without a stored credential, zero network calls are issued.
pub async fn activate_admin_users_view(
    client: &ApiClient,
    live: &Liveness,
) -> Activated<AdminUsersViewState> {
    let Gate::Proceed(_) = client.session().guard() else {
        return Activated::RedirectToEntry;
    };

    let mut users = match isolated("admin users", Vec::new(), client.admin_list_users()).await {
        Ok(slice) => slice,
        Err(_) => return Activated::RedirectToEntry,
    };

    if !live.is_live() {
        return Activated::TornDown;
    }

    let mut notices = Vec::new();
    collect_notices(&mut notices, &mut [&mut users.notice]);

    Activated::Ready(AdminUsersViewState { users: users.value, notices })
}

/// Both slices made it past the HTTP layer, or one of them hit a 401
/// and the whole activation folds into a redirect.
fn unauthorized_check<A, B>(
    a: Result<Slice<A>, ApiError>,
    b: Result<Slice<B>, ApiError>,
) -> Result<(Slice<A>, Slice<B>), ()> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        _ => Err(()),
    }
}
