//! # API crate: LawPal REST client, session and dashboard state
//!
//! Everything the frontends need to talk to the LawPal backend, kept free of
//! UI types so it can be tested natively against a fake.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | The [`Backend`] trait: one async method per remote endpoint |
//! | [`client`] | [`LawPalClient`], the `reqwest` implementation of [`Backend`] |
//! | [`error`] | [`ApiError`] and the user-facing message fallback |
//! | [`models`] | Wire types: users, documents, complaint form |
//! | [`session`] | [`Session`]: login, register, logout and profile edits with the cached token and user |
//! | [`workspace`] | [`DocumentService`] calls and the [`DocumentWorkspace`] state they update |
//!
//! ## Authentication
//!
//! Authenticated calls carry `Authorization: Bearer <token>`. [`Session`] and
//! [`DocumentService`] read the token from the session cache right before
//! each call, so a logout in one place is seen everywhere on the next request.

pub mod backend;
pub mod client;
pub mod error;
pub mod models;
pub mod session;
pub mod workspace;

#[cfg(test)]
mod testing;

pub use backend::Backend;
pub use client::LawPalClient;
pub use error::ApiError;
pub use models::{ComplaintForm, ComplaintType, Document, ProfilePicture, UserInfo};
pub use session::{Session, SignedIn};
pub use workspace::{DocumentService, DocumentWorkspace};
