use std::sync::{Arc, Mutex};

use campushub_types::models::CurrentUser;
use tracing::{info, warn};

/// Proof of authentication plus the cached user identity.
///
/// A session is valid exactly when a token is present. There is no
/// local expiry check: expiry is discovered reactively when a request
/// comes back 401.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: CurrentUser,
}

/// Outcome of the session guard, decided before any rendering or
/// network traffic happens.
#[derive(Debug)]
pub enum Gate {
    Proceed(Session),
    RedirectToEntry,
}

impl Gate {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Gate::RedirectToEntry)
    }
}

/// Persistence seam for the credential token and the serialized
/// current-user record. Injected into [`SessionContext`] so views share
/// one explicit store instead of ambient global state.
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<String>;
    /// The serialized user record saved at login time.
    fn user_record(&self) -> Option<String>;
    fn save(&self, token: &str, user_record: &str);
    fn clear(&self);
}

/// In-memory store. Suitable for tests and embedders that manage their
/// own persistence; anything implementing [`SessionStore`] can replace it.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<(String, String)>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.inner.lock().unwrap().as_ref().map(|(t, _)| t.clone())
    }

    fn user_record(&self) -> Option<String> {
        self.inner.lock().unwrap().as_ref().map(|(_, u)| u.clone())
    }

    fn save(&self, token: &str, user_record: &str) {
        *self.inner.lock().unwrap() = Some((token.to_string(), user_record.to_string()));
    }

    fn clear(&self) {
        *self.inner.lock().unwrap() = None;
    }
}

/// Shared handle over the session store. Cheap to clone; every view and
/// the HTTP layer hold the same one.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }

    /// Synchronous guard for view activation. Must run before the first
    /// render pass: a `RedirectToEntry` means the protected view is
    /// never rendered, not even for a frame.
    pub fn guard(&self) -> Gate {
        match self.current() {
            Some(session) => Gate::Proceed(session),
            None => Gate::RedirectToEntry,
        }
    }

    /// The current session, if a credential is stored and the cached
    /// user record still parses.
    pub fn current(&self) -> Option<Session> {
        let token = self.store.token()?;
        let record = self.store.user_record()?;
        match serde_json::from_str::<CurrentUser>(&record) {
            Ok(user) => Some(Session { token, user }),
            Err(err) => {
                warn!("stored user record is unreadable, treating as signed out: {err}");
                self.store.clear();
                None
            }
        }
    }

    /// Persist a freshly authenticated session.
    pub fn establish(&self, token: &str, user: &CurrentUser) {
        let record = serde_json::to_string(user).expect("user record serializes");
        self.store.save(token, &record);
        info!(user_id = user.id, "session established");
    }

    /// Drop the credential and user record. Used for logout and for
    /// server-signaled expiry.
    pub fn clear(&self) {
        self.store.clear();
        info!("session cleared");
    }
}
