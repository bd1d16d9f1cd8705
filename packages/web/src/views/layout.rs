//! Shared page chrome: the navbar and the auth gate for private pages.

use dioxus::prelude::*;
use ui::{use_auth, use_services, Avatar, LogoutButton, Navbar};

use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let base_url = use_services().config.backend.url;

    rsx! {
        Navbar {
            brand: rsx! {
                Link { to: Route::Home {}, "⚖ LawPal" }
            },
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::About {}, "About" }
            Link { to: Route::Contact {}, "Contact" }
            if let Some(user) = auth().user {
                Link { to: Route::Dashboard {}, "Dashboard" }
                Link {
                    to: Route::Profile {},
                    class: "navbar-profile",
                    Avatar {
                        name: user.display_name().to_string(),
                        picture_url: user.profile_pic_url(&base_url),
                        size: 28,
                    }
                }
                LogoutButton {
                    class: "navbar-logout",
                    on_logout: move |_| {
                        nav.replace(Route::Login {});
                    },
                }
            } else {
                Link { to: Route::Login {}, "Login" }
                Link { to: Route::Register {}, "Register" }
            }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}

/// Render `children` only for a signed-in user; otherwise send them to login.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if auth().loading {
        return rsx! {
            p { class: "page-loading", "Loading..." }
        };
    }
    if !auth().is_signed_in() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
