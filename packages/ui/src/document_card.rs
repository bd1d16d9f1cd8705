use api::Document;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaDownload, FaPen, FaTrash};
use crate::Icon;

/// One saved document in the History tab.
#[component]
pub fn DocumentCard(
    document: Document,
    deleting: bool,
    on_edit: EventHandler<Document>,
    on_delete: EventHandler<String>,
    on_download: EventHandler<String>,
) -> Element {
    let title = document.display_title();
    let (snippet, _) = document.snippet();
    let created = document.created_label();
    let id = document.id.clone();
    let content = document.content.clone();

    rsx! {
        div {
            class: "document-card",
            div {
                class: "document-card-header",
                h3 { "{title}" }
                if let Some(created) = created {
                    span { class: "document-card-date", "{created}" }
                }
            }
            p { class: "document-card-snippet", "{snippet}" }
            div {
                class: "document-card-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_edit.call(document.clone()),
                    Icon { icon: FaPen, width: 12, height: 12 }
                    " Edit"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_download.call(content.clone()),
                    Icon { icon: FaDownload, width: 12, height: 12 }
                    " PDF"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: deleting,
                    onclick: move |_| on_delete.call(id.clone()),
                    Icon { icon: FaTrash, width: 12, height: 12 }
                    if deleting { " Deleting..." } else { " Delete" }
                }
            }
        }
    }
}
