use campushub_types::api::{Ack, PhotoPayload, ProfilePayload};
use campushub_types::models::Profile;

use crate::error::ApiError;
use crate::http::ApiClient;

/// Which of the two profile images an upload replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoKind {
    Avatar,
    Cover,
}

impl PhotoKind {
    fn as_str(self) -> &'static str {
        match self {
            PhotoKind::Avatar => "avatar",
            PhotoKind::Cover => "cover",
        }
    }
}

impl ApiClient {
    pub async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        let payload: ProfilePayload = self.get("/api/profile", &[]).await?;
        Ok(payload.profile)
    }

    /// Full-record replace: the server overwrites every displayable
    /// attribute with what is sent, so callers submit the whole edited
    /// record, not a diff.
    pub async fn replace_profile(&self, profile: &Profile) -> Result<(), ApiError> {
        let _: Ack = self.put("/api/profile", profile).await?;
        Ok(())
    }

    /// Upload a profile image. On success the server returns the URL of
    /// the stored image, which the caller merges into its local profile
    /// state without a refetch.
    pub async fn upload_photo(
        &self,
        kind: PhotoKind,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let payload: PhotoPayload = self
            .post_multipart(
                "/api/profile/photo",
                &[("kind", kind.as_str().to_string())],
                form,
            )
            .await?;
        Ok(payload.photo_url)
    }
}
