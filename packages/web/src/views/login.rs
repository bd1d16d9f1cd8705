//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::{use_auth, use_services, AuthState};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let session = use_services().session;

    // If already logged in, go to the dashboard
    if !auth().loading && auth().is_signed_in() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match session.login(&email(), &password()).await {
                Ok(signed_in) => {
                    auth.set(AuthState::signed_in(signed_in.user));
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::error!("Login failed: {}", e);
                    error.set(Some(e.user_message("Login failed")));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { "Welcome Back" }
            p { class: "auth-subtitle", "Sign in to your LawPal account" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                Input {
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
