use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;
use url::Url;

use campushub_types::api::Ack;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::SessionContext;

/// Whether a request carries the stored credential.
#[derive(Clone, Copy)]
pub(crate) enum Auth {
    Bearer,
    Public,
}

/// Shared HTTP client for the CampusHub backend.
///
/// Owns the envelope handling: every response is expected to carry a
/// `success` flag and an optional `message`, with the payload fields in
/// the same object. A 401 on any authenticated call clears the session
/// before the error is returned, so the caller only has to redirect.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: SessionContext) -> Self {
        Self {
            http: Client::new(),
            base: config.api_base.clone(),
            session,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn endpoint(&self, path: &str) -> Url {
        self.base.join(path).expect("endpoint paths are valid URL fragments")
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let req = self.http.get(self.endpoint(path)).query(query);
        self.execute(req, Auth::Bearer).await
    }

    pub(crate) async fn get_public<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let req = self.http.get(self.endpoint(path)).query(query);
        self.execute(req, Auth::Public).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.http.post(self.endpoint(path)).json(body);
        self.execute(req, Auth::Bearer).await
    }

    pub(crate) async fn post_public<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.http.post(self.endpoint(path)).json(body);
        self.execute(req, Auth::Public).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.http.put(self.endpoint(path)).json(body);
        self.execute(req, Auth::Bearer).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.http.delete(self.endpoint(path));
        self.execute(req, Auth::Bearer).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let req = self.http.post(self.endpoint(path)).query(query).multipart(form);
        self.execute(req, Auth::Bearer).await
    }

    /// Send, then fold the status code and envelope into the error
    /// taxonomy. Payload decoding reuses the same body bytes, so no
    /// second read of the response is needed.
    async fn execute<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        auth: Auth,
    ) -> Result<T, ApiError> {
        let req = match auth {
            Auth::Bearer => match self.session.current() {
                Some(session) => req.bearer_auth(&session.token),
                None => return Err(ApiError::Unauthorized),
            },
            Auth::Public => req,
        };

        let resp = req.send().await?;
        let status = resp.status();

        // Server-signaled expiry: drop the credential so the guard
        // redirects on the next activation.
        if status == StatusCode::UNAUTHORIZED {
            warn!("credential rejected by the server, clearing session");
            self.session.clear();
            return Err(ApiError::Unauthorized);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }

        let bytes = resp.bytes().await?;

        let ack: Ack = serde_json::from_slice(&bytes)
            .map_err(|err| ApiError::Decode(format!("invalid response envelope: {err}")))?;

        if !status.is_success() || !ack.success {
            let message = ack
                .message
                .unwrap_or_else(|| format!("request failed with status {status}"));
            return Err(ApiError::Rejected(message));
        }

        serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
    }
}
