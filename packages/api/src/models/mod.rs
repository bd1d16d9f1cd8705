//! Data models exchanged with the LawPal API.

mod complaint;
mod document;
mod user;

pub use complaint::{ComplaintForm, ComplaintType};
pub use document::{Document, DocumentContent, GeneratedDocument, SNIPPET_CHARS};
pub use user::{
    AuthResponse, Credentials, PasswordChange, ProfilePicture, ProfileUpdate, Registration,
    UserInfo,
};
