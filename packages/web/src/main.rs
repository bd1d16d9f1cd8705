use dioxus::prelude::*;

use ui::{AuthProvider, ToastProvider};
use views::{About, AppLayout, Contact, Dashboard, Home, Login, Profile, Register};

mod download;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/profile")]
        Profile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let services = use_context_provider(ui::AppServices::new);

    rsx! {
        // Global app resources
        document::Title { "LawPal" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::COMPONENTS_CSS }

        ToastProvider {
            duration_ms: services.config.notifications.duration_ms.into(),
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect unknown paths to `/`
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("Unknown route /{}, redirecting home", segments.join("/"));
    nav.replace(Route::Home {});
    rsx! {}
}
