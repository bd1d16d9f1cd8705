use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// Dialog shell with a titled header and a close button.
///
/// Escape, the close button and a click on the backdrop all call `on_close`
/// unless `locked` is set, e.g. while the dialog's request is in flight.
#[component]
pub fn ModalOverlay(
    title: String,
    #[props(default)] locked: bool,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    let close = move || {
        if !locked {
            on_close.call(());
        }
    };

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "-1",
            onmounted: move |evt: MountedEvent| async move {
                // focus so Escape reaches the keydown handler
                let _ = evt.set_focus(true).await;
            },
            onclick: move |_| close(),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    close();
                }
            },
            div {
                class: "modal-card",
                role: "dialog",
                aria_modal: "true",
                aria_label: "{title}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                header {
                    class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        aria_label: "Close",
                        disabled: locked,
                        onclick: move |_| close(),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
                {children}
            }
        }
    }
}
