//! Administrative CRUD over users, events, universities, contact
//! messages, and feedback.
//!
//! None of these operations update local state optimistically: after a
//! successful mutation the caller re-issues the matching list request
//! and renders whatever comes back. Deletes additionally require an
//! explicit confirmation decision before any request leaves the client.

use campushub_types::api::{
    Ack, AdminEventCreate, AdminEventCreated, AdminEventUpdate, AdminEventsPayload,
    AdminUserCreate, AdminUserCreated, AdminUserPayload, AdminUserUpdate, AdminUsersPayload,
    DashboardPayload, FeedbackListPayload, FeedbackStatusUpdate, MessagesPayload,
    UniversitiesPayload, UniversityCreate, UniversityCreated, UniversityUpdate,
};
use campushub_types::models::{
    AdminEvent, AdminUser, ContactMessage, DashboardStats, FeedbackEntry, University,
};
use tracing::info;

use crate::error::ApiError;
use crate::http::ApiClient;

/// The user's answer to a delete prompt. `Cancelled` means the request
/// is never issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

impl ApiClient {
    async fn confirmed_delete(
        &self,
        path: &str,
        confirm: Confirmation,
    ) -> Result<DeleteOutcome, ApiError> {
        if confirm == Confirmation::Cancelled {
            info!(path, "delete cancelled at the prompt, no request issued");
            return Ok(DeleteOutcome::Cancelled);
        }
        let _: Ack = self.delete(path).await?;
        Ok(DeleteOutcome::Deleted)
    }

    // -- Dashboard --

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let payload: DashboardPayload = self.get("/api/admin/dashboard", &[]).await?;
        Ok(payload.stats)
    }

    // -- Users --

    pub async fn admin_list_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        let payload: AdminUsersPayload = self.get("/api/admin/users", &[]).await?;
        Ok(payload.users)
    }

    pub async fn admin_get_user(&self, user_id: i64) -> Result<AdminUser, ApiError> {
        let payload: AdminUserPayload =
            self.get(&format!("/api/admin/users/{user_id}"), &[]).await?;
        Ok(payload.user)
    }

    pub async fn admin_create_user(&self, user: &AdminUserCreate) -> Result<i64, ApiError> {
        let created: AdminUserCreated = self.post("/api/admin/users", user).await?;
        Ok(created.user_id)
    }

    /// Partial update of account flags and profile fields.
    pub async fn admin_update_user(
        &self,
        user_id: i64,
        update: &AdminUserUpdate,
    ) -> Result<(), ApiError> {
        let _: Ack = self.put(&format!("/api/admin/users/{user_id}"), update).await?;
        Ok(())
    }

    pub async fn admin_delete_user(
        &self,
        user_id: i64,
        confirm: Confirmation,
    ) -> Result<DeleteOutcome, ApiError> {
        self.confirmed_delete(&format!("/api/admin/users/{user_id}"), confirm).await
    }

    /// Deactivate an account without deleting it.
    pub async fn admin_ban_user(&self, user_id: i64) -> Result<(), ApiError> {
        let update = AdminUserUpdate { is_active: Some(false), ..Default::default() };
        self.admin_update_user(user_id, &update).await
    }

    pub async fn admin_unban_user(&self, user_id: i64) -> Result<(), ApiError> {
        let update = AdminUserUpdate { is_active: Some(true), ..Default::default() };
        self.admin_update_user(user_id, &update).await
    }

    // -- Events --

    /// Every event, active and inactive both.
    pub async fn admin_list_events(&self) -> Result<Vec<AdminEvent>, ApiError> {
        let payload: AdminEventsPayload = self.get("/api/admin/events", &[]).await?;
        Ok(payload.events)
    }

    pub async fn admin_create_event(&self, event: &AdminEventCreate) -> Result<i64, ApiError> {
        let created: AdminEventCreated = self.post("/api/admin/events", event).await?;
        Ok(created.event_id)
    }

    pub async fn admin_update_event(
        &self,
        event_id: i64,
        update: &AdminEventUpdate,
    ) -> Result<(), ApiError> {
        let _: Ack = self.put(&format!("/api/admin/events/{event_id}"), update).await?;
        Ok(())
    }

    pub async fn admin_delete_event(
        &self,
        event_id: i64,
        confirm: Confirmation,
    ) -> Result<DeleteOutcome, ApiError> {
        self.confirmed_delete(&format!("/api/admin/events/{event_id}"), confirm).await
    }

    // -- Universities --

    pub async fn admin_list_universities(&self) -> Result<Vec<University>, ApiError> {
        let payload: UniversitiesPayload = self.get("/api/admin/universities", &[]).await?;
        Ok(payload.universities)
    }

    pub async fn admin_create_university(
        &self,
        university: &UniversityCreate,
    ) -> Result<i64, ApiError> {
        let created: UniversityCreated = self.post("/api/admin/universities", university).await?;
        Ok(created.university_id)
    }

    pub async fn admin_update_university(
        &self,
        university_id: i64,
        update: &UniversityUpdate,
    ) -> Result<(), ApiError> {
        let _: Ack = self
            .put(&format!("/api/admin/universities/{university_id}"), update)
            .await?;
        Ok(())
    }

    pub async fn admin_delete_university(
        &self,
        university_id: i64,
        confirm: Confirmation,
    ) -> Result<DeleteOutcome, ApiError> {
        self.confirmed_delete(&format!("/api/admin/universities/{university_id}"), confirm)
            .await
    }

    // -- Contact messages --

    pub async fn admin_list_messages(&self) -> Result<Vec<ContactMessage>, ApiError> {
        let payload: MessagesPayload = self.get("/api/admin/messages", &[]).await?;
        Ok(payload.messages)
    }

    pub async fn admin_delete_message(
        &self,
        contact_id: i64,
        confirm: Confirmation,
    ) -> Result<DeleteOutcome, ApiError> {
        self.confirmed_delete(&format!("/api/admin/messages/{contact_id}"), confirm).await
    }

    // -- Feedback --

    pub async fn admin_list_feedbacks(&self) -> Result<Vec<FeedbackEntry>, ApiError> {
        let payload: FeedbackListPayload = self.get("/api/admin/feedbacks", &[]).await?;
        Ok(payload.feedbacks)
    }

    pub async fn admin_set_feedback_status(
        &self,
        feedback_id: i64,
        status: &str,
    ) -> Result<(), ApiError> {
        let update = FeedbackStatusUpdate { status: status.to_string() };
        let _: Ack = self
            .put(&format!("/api/admin/feedbacks/{feedback_id}"), &update)
            .await?;
        Ok(())
    }

    pub async fn admin_delete_feedback(
        &self,
        feedback_id: i64,
        confirm: Confirmation,
    ) -> Result<DeleteOutcome, ApiError> {
        self.confirmed_delete(&format!("/api/admin/feedbacks/{feedback_id}"), confirm).await
    }
}
