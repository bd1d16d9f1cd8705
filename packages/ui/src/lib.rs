//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{
    app_config, platform_store, use_services, AppDocuments, AppServices, AppSession,
    PlatformStore,
};

pub mod views;
pub use views::{EditDocumentModal, ModalOverlay};

pub const COMPONENTS_CSS: Asset = asset!("/assets/styling/components.css");

mod navbar;
pub use navbar::{Avatar, Navbar};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

pub mod notifications;
pub use notifications::{notify, use_toasts, ToastKind, ToastProvider, Toasts};

mod complaint_form;
pub use complaint_form::ComplaintFormView;

mod document_preview;
pub use document_preview::DocumentPreview;

mod document_card;
pub use document_card::DocumentCard;
