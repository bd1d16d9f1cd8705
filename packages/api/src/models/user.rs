//! # User models
//!
//! ## [`UserInfo`]
//!
//! The user record as the LawPal API returns it from login, registration and
//! profile updates. The client keeps it in memory and caches a JSON copy in
//! local storage; the server remains the source of truth. `profile_pic` is a
//! server-relative path (`/uploads/...`) resolved against the API base URL by
//! [`UserInfo::profile_pic_url`].
//!
//! ## Request bodies
//!
//! [`Credentials`], [`Registration`], [`ProfileUpdate`] and [`PasswordChange`]
//! serialise to the camelCase field names the API expects. [`ProfilePicture`]
//! carries the raw bytes of an uploaded image.

use serde::{Deserialize, Serialize};

/// User information returned by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "profilePic", default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Absolute URL of the profile picture, if one is set.
    pub fn profile_pic_url(&self, base_url: &str) -> Option<String> {
        let pic = self.profile_pic.as_deref().filter(|p| !p.is_empty())?;
        if pic.starts_with("http://") || pic.starts_with("https://") {
            Some(pic.to_string())
        } else {
            Some(format!("{}{}", base_url.trim_end_matches('/'), pic))
        }
    }
}

/// Successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// An image selected for upload as the profile picture.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePicture {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ProfilePicture {
    /// Guess the MIME type from the file extension.
    pub fn from_file(file_name: &str, bytes: Vec<u8>) -> Self {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        let mime_type = match ext.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "svg" => "image/svg+xml",
            _ => "application/octet-stream",
        };
        Self {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            bytes,
        }
    }
}
