use campushub_types::api::{
    Ack, ForgotPasswordRequest, LoginPayload, LoginRequest, RegisterRequest,
    ResetPasswordRequest,
};
use tracing::info;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::session::Session;

impl ApiClient {
    /// Authenticate and persist the resulting session through the
    /// injected store, so every subsequent view finds it.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let req = LoginRequest {
            email: email.trim().to_lowercase(),
            password: password.to_string(),
        };
        let payload: LoginPayload = self.post_public("/api/auth/login", &req).await?;

        self.session().establish(&payload.token, &payload.user);
        info!(user_id = payload.user.id, "signed in");

        Ok(Session { token: payload.token, user: payload.user })
    }

    /// Create an account. The server answers with its own validation
    /// message on bad input (short password, taken email); that text is
    /// surfaced verbatim via [`ApiError::Rejected`].
    pub async fn register(
        &self,
        email: &str,
        full_name: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let req = RegisterRequest {
            email: email.trim().to_lowercase(),
            full_name: full_name.trim().to_string(),
            password: password.to_string(),
        };
        let _: Ack = self.post_public("/api/auth/register", &req).await?;
        Ok(())
    }

    /// Ask for a password-reset link to be mailed out.
    pub async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        let req = ForgotPasswordRequest { email: email.trim().to_lowercase() };
        let _: Ack = self.post_public("/api/auth/forgot-password", &req).await?;
        Ok(())
    }

    /// Redeem a reset token for a new password.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), ApiError> {
        let req = ResetPasswordRequest {
            token: token.to_string(),
            password: new_password.to_string(),
        };
        let _: Ack = self.post_public("/api/auth/reset-password", &req).await?;
        Ok(())
    }

    /// Drop the stored credential and user record.
    pub fn logout(&self) {
        self.session().clear();
    }
}
