use api::Document;
use dioxus::prelude::*;

use super::ModalOverlay;
use crate::components::{Button, ButtonVariant, TextArea};

/// Modal for editing a saved document's text.
#[component]
pub fn EditDocumentModal(
    document: Document,
    saving: bool,
    on_save: EventHandler<(String, String)>,
    on_close: EventHandler<()>,
) -> Element {
    let mut content = use_signal(|| document.content.clone());
    let id = document.id.clone();
    let title = document.display_title();

    rsx! {
        ModalOverlay {
            title: format!("Edit {title}"),
            locked: saving,
            on_close: move |_| on_close.call(()),
            div {
                class: "modal-body",
                TextArea {
                    class: "edit-document-text",
                    rows: "18",
                    value: content(),
                    oninput: move |evt: FormEvent| content.set(evt.value()),
                }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: saving,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: saving,
                        onclick: move |_| on_save.call((id.clone(), content())),
                        if saving { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}
