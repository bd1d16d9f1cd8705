//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

use crate::client::use_services;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// True until the cached session has been read.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that restores the cached sign-in on mount.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);
    let session = use_services().session;

    let _ = use_resource(move || {
        let session = session.clone();
        async move {
            match session.restore().await {
            Some(signed_in) => {
                    tracing::debug!("Restored session for {}", signed_in.user.email);
                    auth_state.set(AuthState::signed_in(signed_in.user));
                }
                None => auth_state.set(AuthState::signed_out()),
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: Option<EventHandler<()>>,
) -> Element {
    let mut auth_state = use_auth();
    let session = use_services().session;

    let onclick = move |_| {
        let session = session.clone();
        async move {
            session.logout().await;
            auth_state.set(AuthState::signed_out());
            if let Some(handler) = on_logout {
                handler.call(());
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
