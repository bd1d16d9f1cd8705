//! HTTP implementation of [`Backend`] with `reqwest`.
//!
//! The same code runs natively and in the browser: on `wasm32` reqwest sends
//! through `fetch`.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::backend::Backend;
use crate::error::{ApiError, ErrorBody};
use crate::models::{
    AuthResponse, ComplaintForm, Credentials, Document, DocumentContent, GeneratedDocument,
    PasswordChange, ProfilePicture, ProfileUpdate, Registration, UserInfo,
};

/// Client for the LawPal REST API.
#[derive(Clone, Debug)]
pub struct LawPalClient {
    http_client: Client,
    base_url: String,
}

impl LawPalClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &store::LawPalConfig) -> Self {
        Self::new(&config.backend.url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request, turning non-2xx responses into [`ApiError::Status`].
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error);
        tracing::warn!("API request failed with {}: {:?}", status, message);
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Backend for LawPalClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let request = self
            .http_client
            .post(self.url("/api/auth/login"))
            .json(credentials);
        self.send_json(request).await
    }

    async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError> {
        let request = self
            .http_client
            .post(self.url("/api/auth/register"))
            .json(registration);
        self.send_json(request).await
    }

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<UserInfo, ApiError> {
        let request = self
            .http_client
            .put(self.url("/api/user/update"))
            .bearer_auth(token)
            .json(update);
        self.send_json(request).await
    }

    async fn change_password(&self, token: &str, change: &PasswordChange) -> Result<(), ApiError> {
        let request = self
            .http_client
            .put(self.url("/api/user/password"))
            .bearer_auth(token)
            .json(change);
        self.send(request).await.map(|_| ())
    }

    async fn upload_profile_picture(
        &self,
        token: &str,
        picture: ProfilePicture,
    ) -> Result<UserInfo, ApiError> {
        let part = Part::bytes(picture.bytes)
            .file_name(picture.file_name)
            .mime_str(&picture.mime_type)
            .map_err(|e| ApiError::Validation(format!("Unsupported file type: {e}")))?;
        let form = Form::new().part("profilePic", part);
        let request = self
            .http_client
            .post(self.url("/api/user/upload-profile-pic"))
            .bearer_auth(token)
            .multipart(form);
        self.send_json(request).await
    }

    async fn generate_document(&self, token: &str, form: &ComplaintForm) -> Result<String, ApiError> {
        let request = self
            .http_client
            .post(self.url("/api/ai/generate-document"))
            .bearer_auth(token)
            .json(form);
        let generated: GeneratedDocument = self.send_json(request).await?;
        Ok(generated.document)
    }

    async fn list_documents(&self, token: &str) -> Result<Vec<Document>, ApiError> {
        let request = self
            .http_client
            .get(self.url("/api/documents/my"))
            .bearer_auth(token);
        self.send_json(request).await
    }

    async fn save_document(&self, token: &str, content: &str) -> Result<(), ApiError> {
        let request = self
            .http_client
            .post(self.url("/api/documents/save"))
            .bearer_auth(token)
            .json(&DocumentContent {
                content: content.to_string(),
            });
        self.send(request).await.map(|_| ())
    }

    async fn update_document(&self, token: &str, id: &str, content: &str) -> Result<(), ApiError> {
        let request = self
            .http_client
            .put(self.url(&format!("/api/documents/update/{id}")))
            .bearer_auth(token)
            .json(&DocumentContent {
                content: content.to_string(),
            });
        self.send(request).await.map(|_| ())
    }

    async fn delete_document(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let request = self
            .http_client
            .delete(self.url(&format!("/api/documents/delete/{id}")))
            .bearer_auth(token);
        self.send(request).await.map(|_| ())
    }
}
