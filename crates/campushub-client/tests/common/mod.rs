//! In-process mock of the CampusHub backend.
//!
//! Tests drive the real client against this server over loopback, so
//! the whole pipeline (credential header, envelope decoding, error
//! mapping) is exercised end to end. Request counters let tests assert
//! not only what happened but what never hit the wire.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::Json;
use axum::routing::{delete, get, post, put};
use serde_json::{Value, json};
use url::Url;

use campushub_client::{ApiClient, ClientConfig, HolidayClient, SessionContext};
use campushub_types::models::CurrentUser;

pub const TOKEN: &str = "token-abc";

#[derive(Default)]
pub struct MockBackend {
    /// Requests that reached the server, any endpoint.
    pub total_hits: AtomicUsize,
    /// DELETE requests that reached the server.
    pub delete_hits: AtomicUsize,
    pub favorite_adds: AtomicUsize,
    pub favorite_removes: AtomicUsize,

    /// Answer the favorites listing with a failure envelope.
    pub fail_favorites: AtomicBool,
    /// Reject favorite add/remove mutations.
    pub fail_favorite_mutations: AtomicBool,
    /// Answer every authenticated request with 401.
    pub expire_sessions: AtomicBool,

    /// Server-side favorite membership (event ids).
    pub favorites: Mutex<Vec<i64>>,
    /// Server-side universities, as (id, name, logo_url).
    pub universities: Mutex<Vec<(i64, String, Option<String>)>>,
    /// Server-side copy of the profile record.
    pub profile: Mutex<Option<Value>>,
}

impl MockBackend {
    fn hit(&self) {
        self.total_hits.fetch_add(1, Ordering::Relaxed);
    }

    fn authorize(&self, headers: &HeaderMap) -> Result<(), (StatusCode, Json<Value>)> {
        if self.expire_sessions.load(Ordering::Relaxed) {
            return Err(unauthorized());
        }
        let ok = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(|v| v == format!("Bearer {TOKEN}"))
            .unwrap_or(false);
        if ok { Ok(()) } else { Err(unauthorized()) }
    }
}

type Shared = Arc<MockBackend>;

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "success": false, "message": "Session expired." })),
    )
}

fn ok(extra: Value) -> (StatusCode, Json<Value>) {
    let mut body = json!({ "success": true });
    if let (Some(map), Some(extra)) = (body.as_object_mut(), extra.as_object()) {
        for (k, v) in extra {
            map.insert(k.clone(), v.clone());
        }
    }
    (StatusCode::OK, Json(body))
}

fn rejected(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "success": false, "message": message })))
}

fn spring_fest() -> Value {
    json!({
        "id": 1,
        "title": "Spring Fest",
        "description": "Open-air concert on the main lawn",
        "location": "Main Campus",
        "university": "Ankara Üniversitesi",
        "date": "2025-05-01",
        "time": "18:00:00",
        "is_active": true
    })
}

pub struct MockApi {
    pub state: Shared,
    pub addr: SocketAddr,
}

impl MockApi {
    pub async fn spawn() -> Self {
        let _ = tracing_subscriber::fmt().with_env_filter("warn").try_init();

        let state: Shared = Arc::new(MockBackend::default());
        let router = router(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { state, addr }
    }

    pub fn config(&self) -> ClientConfig {
        let base = Url::parse(&format!("http://{}", self.addr)).unwrap();
        let mut config = ClientConfig::new(base.clone());
        // The holiday service lives on the same mock for tests.
        config.holiday_base = base;
        config
    }

    /// Client with an empty session store: signed out.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.config(), SessionContext::in_memory())
    }

    /// Client whose store already holds a valid credential.
    pub fn signed_in_client(&self) -> ApiClient {
        let session = SessionContext::in_memory();
        session.establish(TOKEN, &test_user());
        ApiClient::new(&self.config(), session)
    }

    pub fn holiday_client(&self) -> HolidayClient {
        HolidayClient::new(&self.config())
    }

    pub fn total_hits(&self) -> usize {
        self.state.total_hits.load(Ordering::Relaxed)
    }

    pub fn delete_hits(&self) -> usize {
        self.state.delete_hits.load(Ordering::Relaxed)
    }
}

pub fn test_user() -> CurrentUser {
    CurrentUser {
        id: 7,
        email: "student@uni.edu".to_string(),
        full_name: Some("Test Student".to_string()),
        is_admin: false,
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        // Auth
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/forgot-password", post(always_ok))
        .route("/api/auth/reset-password", post(always_ok))
        // Events and comments
        .route("/api/events", get(list_events))
        .route("/api/events/{id}", get(event_details))
        .route("/api/events/{id}/comments", post(post_comment))
        // Favorites
        .route("/api/favorites", get(list_favorites))
        .route("/api/favorites/{id}", post(add_favorite).delete(remove_favorite))
        // Profile
        .route("/api/profile", get(get_profile).put(put_profile))
        .route("/api/profile/photo", post(upload_photo))
        // Directory
        .route("/api/universities", get(list_universities_public))
        .route("/api/faq", get(list_faq))
        // Feedback and contact
        .route("/api/feedback", post(create_feedback).get(list_feedback))
        .route("/api/contact", post(create_contact))
        // Admin
        .route("/api/admin/dashboard", get(admin_dashboard))
        .route("/api/admin/users", get(admin_list_users))
        .route(
            "/api/admin/users/{id}",
            get(admin_get_user).delete(admin_delete).put(always_ok_authed),
        )
        .route("/api/admin/events", get(admin_list_events).post(admin_create_event))
        .route("/api/admin/events/{id}", delete(admin_delete).put(always_ok_authed))
        .route(
            "/api/admin/universities",
            get(admin_list_universities).post(admin_create_university),
        )
        .route("/api/admin/universities/{id}", delete(admin_delete_university))
        .route("/api/admin/messages", get(admin_list_messages))
        .route("/api/admin/messages/{id}", delete(admin_delete))
        .route("/api/admin/feedbacks", get(admin_list_feedbacks))
        .route("/api/admin/feedbacks/{id}", put(always_ok_authed).delete(admin_delete))
        // Holiday calendar service
        .route("/api/v3/PublicHolidays/{year}/{country}", get(public_holidays))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(State(state): State<Shared>) -> (StatusCode, Json<Value>) {
    state.hit();
    rejected(StatusCode::NOT_FOUND, "No such endpoint.")
}

async fn always_ok(State(state): State<Shared>) -> (StatusCode, Json<Value>) {
    state.hit();
    ok(json!({}))
}

async fn always_ok_authed(
    State(state): State<Shared>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    ok(json!({}))
}

// -- Auth --

async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    state.hit();
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    if password != "password123" {
        return rejected(StatusCode::BAD_REQUEST, "Incorrect password.");
    }

    ok(json!({
        "token": TOKEN,
        "user": {
            "user_id": 7,
            "email": email,
            "full_name": "Test Student",
            "is_admin": false
        }
    }))
}

async fn register(
    State(state): State<Shared>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.hit();
    let password = body["password"].as_str().unwrap_or_default();
    if password.len() < 6 {
        return rejected(StatusCode::BAD_REQUEST, "Password must be at least 6 characters.");
    }
    ok(json!({}))
}

// -- Events --

async fn list_events(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }

    let events = match params.get("university") {
        Some(name) if name != "Ankara Üniversitesi" => json!([]),
        _ => json!([spring_fest()]),
    };
    let count = events.as_array().map(|a| a.len()).unwrap_or(0);
    ok(json!({ "count": count, "events": events }))
}

async fn event_details(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    if id != 1 {
        return rejected(StatusCode::NOT_FOUND, "Event not found.");
    }
    ok(json!({
        "event": spring_fest(),
        "comments": [{
            "id": 50,
            "event_id": 1,
            "user_id": 2,
            "author_name": "Someone",
            "message": "Can't wait",
            "created_at": "2025-04-20T09:00:00Z"
        }]
    }))
}

async fn post_comment(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    ok(json!({
        "comment": {
            "id": 99,
            "event_id": id,
            "user_id": 7,
            "author_name": "Test Student",
            "message": body["message"],
            "created_at": "2025-05-01T12:00:00Z"
        }
    }))
}

// -- Favorites --

async fn list_favorites(
    State(state): State<Shared>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    if state.fail_favorites.load(Ordering::Relaxed) {
        return rejected(StatusCode::INTERNAL_SERVER_ERROR, "Favorites are unavailable.");
    }

    let events: Vec<Value> = state
        .favorites
        .lock()
        .unwrap()
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Event {id}"),
                "date": "2025-05-01",
                "is_active": true
            })
        })
        .collect();
    ok(json!({ "count": events.len(), "events": events }))
}

async fn add_favorite(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    if state.fail_favorite_mutations.load(Ordering::Relaxed) {
        return rejected(StatusCode::BAD_REQUEST, "Favorite could not be saved.");
    }
    state.favorite_adds.fetch_add(1, Ordering::Relaxed);
    let mut favorites = state.favorites.lock().unwrap();
    if !favorites.contains(&id) {
        favorites.push(id);
    }
    ok(json!({}))
}

async fn remove_favorite(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    if state.fail_favorite_mutations.load(Ordering::Relaxed) {
        return rejected(StatusCode::BAD_REQUEST, "Favorite could not be removed.");
    }
    state.favorite_removes.fetch_add(1, Ordering::Relaxed);
    state.favorites.lock().unwrap().retain(|fav| *fav != id);
    ok(json!({}))
}

// -- Profile --

async fn get_profile(
    State(state): State<Shared>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    let profile = state.profile.lock().unwrap().clone().unwrap_or_else(|| {
        json!({
            "full_name": "Test Student",
            "bio": null,
            "department": "Computer Engineering",
            "grade": "3",
            "phone_number": null,
            "profile_photo": null,
            "cover_photo": null
        })
    });
    ok(json!({ "profile": profile }))
}

async fn put_profile(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    *state.profile.lock().unwrap() = Some(body);
    ok(json!({}))
}

async fn upload_photo(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    let kind = params.get("kind").cloned().unwrap_or_default();
    if kind != "avatar" && kind != "cover" {
        return rejected(StatusCode::BAD_REQUEST, "Unknown photo kind.");
    }
    ok(json!({ "photo_url": format!("https://cdn.example/{kind}.png") }))
}

// -- Directory --

async fn list_universities_public(State(state): State<Shared>) -> (StatusCode, Json<Value>) {
    state.hit();
    ok(json!({
        "universities": [
            { "university_id": 1, "name": "Ankara Üniversitesi", "logo_url": null },
            { "university_id": 2, "name": "ODTÜ", "logo_url": "https://cdn.example/odtu.png" }
        ]
    }))
}

async fn list_faq(State(state): State<Shared>) -> (StatusCode, Json<Value>) {
    state.hit();
    ok(json!({
        "faqs": [
            { "id": 1, "question": "Is membership free?", "answer": "Yes, entirely." }
        ]
    }))
}

// -- Feedback and contact --

async fn create_feedback(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    if body["message"].as_str().unwrap_or_default().is_empty() {
        return rejected(StatusCode::BAD_REQUEST, "Message is required.");
    }
    ok(json!({ "feedback_id": 11 }))
}

async fn list_feedback(
    State(state): State<Shared>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    ok(json!({ "feedbacks": [feedback_row()] }))
}

async fn create_contact(
    State(state): State<Shared>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if body["consent"] != json!(true) {
        return rejected(StatusCode::BAD_REQUEST, "Consent is required.");
    }
    ok(json!({ "contact_id": 5 }))
}

fn feedback_row() -> Value {
    json!({
        "feedback_id": 4,
        "event_id": 1,
        "event_title": "Spring Fest",
        "user_email": "student@uni.edu",
        "type": "bug",
        "title": "Wrong date",
        "message": "The listed date is off by one day",
        "status": "pending",
        "created_at": "2025-04-22T08:30:00Z"
    })
}

// -- Admin --

async fn admin_dashboard(
    State(state): State<Shared>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    ok(json!({
        "stats": {
            "total_users": 42,
            "total_events": 10,
            "active_events": 8,
            "total_messages": 3,
            "total_feedbacks": 5,
            "pending_feedbacks": 2,
            "new_users_week": 4
        }
    }))
}

async fn admin_list_users(
    State(state): State<Shared>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    ok(json!({
        "users": [{
            "user_id": 1,
            "email": "admin@uni.edu",
            "full_name": "Admin",
            "role": "admin",
            "is_admin": true,
            "is_active": true,
            "created_at": "2025-01-01T00:00:00Z",
            "last_login": null
        }]
    }))
}

async fn admin_get_user(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    if id != 1 {
        return rejected(StatusCode::NOT_FOUND, "User not found.");
    }
    ok(json!({
        "user": {
            "user_id": 1,
            "email": "admin@uni.edu",
            "full_name": "Admin",
            "role": "admin",
            "is_admin": true,
            "is_active": true,
            "created_at": "2025-01-01T00:00:00Z",
            "last_login": null
        }
    }))
}

async fn admin_list_events(
    State(state): State<Shared>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    ok(json!({
        "events": [{
            "event_id": 1,
            "title": "Spring Fest",
            "description": "Open-air concert on the main lawn",
            "location": "Main Campus",
            "university": "Ankara Üniversitesi",
            "start_datetime": "2025-05-01T18:00:00Z",
            "end_datetime": "2025-05-01T22:00:00Z",
            "is_active": true,
            "created_at": "2025-03-01T00:00:00Z"
        }, {
            "event_id": 2,
            "title": "Retired Workshop",
            "description": null,
            "location": null,
            "university": null,
            "start_datetime": null,
            "end_datetime": null,
            "is_active": false,
            "created_at": null
        }]
    }))
}

async fn admin_create_event(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    if body["title"].as_str().unwrap_or_default().is_empty() {
        return rejected(StatusCode::BAD_REQUEST, "Title is required.");
    }
    ok(json!({ "event_id": 77 }))
}

async fn admin_delete(
    State(state): State<Shared>,
    Path(_id): Path<i64>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    state.delete_hits.fetch_add(1, Ordering::Relaxed);
    ok(json!({}))
}

async fn admin_list_universities(
    State(state): State<Shared>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    let universities: Vec<Value> = state
        .universities
        .lock()
        .unwrap()
        .iter()
        .map(|(id, name, logo_url)| {
            json!({ "university_id": id, "name": name, "logo_url": logo_url })
        })
        .collect();
    ok(json!({ "universities": universities }))
}

async fn admin_create_university(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    let name = body["name"].as_str().unwrap_or_default().to_string();
    if name.is_empty() {
        return rejected(StatusCode::BAD_REQUEST, "University name is required.");
    }
    let logo_url = body["logo_url"].as_str().map(str::to_string);

    let mut universities = state.universities.lock().unwrap();
    let id = universities.iter().map(|(id, ..)| *id).max().unwrap_or(0) + 1;
    universities.push((id, name, logo_url));
    ok(json!({ "university_id": id }))
}

async fn admin_delete_university(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    state.delete_hits.fetch_add(1, Ordering::Relaxed);
    state.universities.lock().unwrap().retain(|(uid, ..)| *uid != id);
    ok(json!({}))
}

async fn admin_list_messages(
    State(state): State<Shared>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    ok(json!({
        "messages": [{
            "contact_id": 3,
            "full_name": "Club Rep",
            "email": "club@uni.edu",
            "university": "ODTÜ",
            "user_type": "Student",
            "topic_type": "Event submission",
            "message": "Please list our spring event",
            "consent": true,
            "created_at": "2025-04-01T10:00:00Z"
        }]
    }))
}

async fn admin_list_feedbacks(
    State(state): State<Shared>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.hit();
    if let Err(resp) = state.authorize(&headers) {
        return resp;
    }
    ok(json!({ "feedbacks": [feedback_row()] }))
}

// -- Holiday calendar service --

async fn public_holidays(
    State(state): State<Shared>,
    Path((_year, _country)): Path<(i32, String)>,
) -> Json<Value> {
    state.hit();
    Json(json!([
        {
            "date": "2025-05-01",
            "localName": "Emek ve Dayanışma Günü",
            "name": "Labour Day"
        },
        {
            "date": "2025-05-19",
            "localName": "Gençlik ve Spor Bayramı",
            "name": "Youth and Sports Day"
        }
    ]))
}
