//! # The `Backend` seam
//!
//! Every remote call the client makes, as one async trait. [`crate::LawPalClient`]
//! implements it over HTTP; tests substitute a recording fake so the session
//! and dashboard logic can be exercised without a server.
//!
//! Authenticated methods take the bearer token explicitly; callers read it
//! from the session cache just before each request.

use crate::error::ApiError;
use crate::models::{
    AuthResponse, ComplaintForm, Credentials, Document, PasswordChange, ProfilePicture,
    ProfileUpdate, Registration, UserInfo,
};

/// Async trait over the LawPal HTTP API.
pub trait Backend {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<AuthResponse, ApiError>>;

    fn register(
        &self,
        registration: &Registration,
    ) -> impl std::future::Future<Output = Result<AuthResponse, ApiError>>;

    fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> impl std::future::Future<Output = Result<UserInfo, ApiError>>;

    fn change_password(
        &self,
        token: &str,
        change: &PasswordChange,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;

    fn upload_profile_picture(
        &self,
        token: &str,
        picture: ProfilePicture,
    ) -> impl std::future::Future<Output = Result<UserInfo, ApiError>>;

    /// Turn a complaint into generated document text.
    fn generate_document(
        &self,
        token: &str,
        form: &ComplaintForm,
    ) -> impl std::future::Future<Output = Result<String, ApiError>>;

    fn list_documents(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Document>, ApiError>>;

    fn save_document(
        &self,
        token: &str,
        content: &str,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;

    fn update_document(
        &self,
        token: &str,
        id: &str,
        content: &str,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;

    fn delete_document(
        &self,
        token: &str,
        id: &str,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
}
