use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Top bar with the LawPal brand; the app supplies the links as children.
#[component]
pub fn Navbar(brand: Element, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        nav {
            class: "navbar",
            div { class: "navbar-brand", {brand} }
            div { class: "navbar-links", {children} }
        }
    }
}

/// Round avatar: the profile picture when there is one, else the initial.
#[component]
pub fn Avatar(
    name: String,
    #[props(!optional)] picture_url: Option<String>,
    #[props(default = 32)] size: u32,
) -> Element {
    let initial = name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());
    let style = format!("width: {size}px; height: {size}px;");

    rsx! {
        if let Some(url) = picture_url {
            img { class: "avatar", style: "{style}", src: "{url}", alt: "{name}" }
        } else {
            span { class: "avatar avatar-initial", style: "{style}", "{initial}" }
        }
    }
}
