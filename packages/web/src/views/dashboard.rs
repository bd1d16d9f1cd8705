//! The dashboard: generate a complaint, then keep, edit and export documents.

use api::{ComplaintForm, Document, DocumentWorkspace};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::{
    notify, use_auth, use_services, use_toasts, ComplaintFormView, DocumentCard, DocumentPreview,
    EditDocumentModal, ToastKind,
};

use super::RequireAuth;
use crate::download::download_pdf;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tab {
    Generate,
    History,
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        RequireAuth {
            DashboardPanel {}
        }
    }
}

#[component]
fn DashboardPanel() -> Element {
    let auth = use_auth();
    let mut toasts = use_toasts();
    let service = use_services().documents;
    let mut workspace = use_signal(DocumentWorkspace::new);
    let mut tab = use_signal(|| Tab::Generate);
    let mut generating = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut updating = use_signal(|| false);
    let mut deleting = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| Option::<Document>::None);

    // Handlers apply their result to the live workspace once the call returns.
    let refresh_service = service.clone();
    let _ = use_resource(move || {
        let service = refresh_service.clone();
        async move {
            match service.list().await {
                Ok(documents) => workspace.write().replace_documents(documents),
                Err(e) => {
                    tracing::error!("Failed to load documents: {}", e);
                    notify(&mut toasts, ToastKind::Error, "Failed to load documents");
                }
            }
        }
    });

    let generate_service = service.clone();
    let handle_generate = move |form: ComplaintForm| {
        let service = generate_service.clone();
        spawn(async move {
            generating.set(true);
            let previous = workspace.write().begin_generation();
            match service.generate(&form).await {
                Ok(text) => {
                    workspace.write().generated(text);
                    notify(&mut toasts, ToastKind::Success, "Document generated successfully!");
                }
                Err(e) => {
                    tracing::error!("Generation failed: {}", e);
                    workspace.write().generation_failed(previous);
                    let message = match &e {
                        api::ApiError::Validation(msg) => msg.clone(),
                        _ => "Failed to generate document".to_string(),
                    };
                    notify(&mut toasts, ToastKind::Error, &message);
                }
            }
            generating.set(false);
        });
    };

    let save_service = service.clone();
    let handle_save = move |_| {
        let Some(content) = workspace.peek().draft().map(str::to_string) else {
            return;
        };
        let service = save_service.clone();
        spawn(async move {
            saving.set(true);
            match service.save(&content).await {
                Ok(documents) => {
                    workspace.write().saved(&content, documents);
                    notify(&mut toasts, ToastKind::Success, "Document saved to history!");
                }
                Err(e) => {
                    tracing::error!("Save failed: {}", e);
                    notify(&mut toasts, ToastKind::Error, "Failed to save document");
                }
            }
            saving.set(false);
        });
    };

    let update_service = service.clone();
    let handle_update = move |(id, content): (String, String)| {
        let service = update_service.clone();
        spawn(async move {
            updating.set(true);
            match service.update(&id, &content).await {
                Ok(documents) => {
                    workspace.write().replace_documents(documents);
                    editing.set(None);
                    notify(&mut toasts, ToastKind::Success, "Document updated successfully!");
                }
                Err(e) => {
                    tracing::error!("Update of {} failed: {}", id, e);
                    notify(&mut toasts, ToastKind::Error, "Failed to update document");
                }
            }
            updating.set(false);
        });
    };

    let handle_delete = move |id: String| {
        let service = service.clone();
        spawn(async move {
            deleting.set(Some(id.clone()));
            match service.delete(&id).await {
                Ok(()) => {
                    workspace.write().removed(&id);
                    notify(&mut toasts, ToastKind::Success, "Document deleted successfully!");
                }
                Err(e) => {
                    tracing::error!("Delete of {} failed: {}", id, e);
                    notify(&mut toasts, ToastKind::Error, "Failed to delete document");
                }
            }
            deleting.set(None);
        });
    };

    let download_author = auth().user.map(|u| u.display_name().to_string());
    let mut handle_download = move |text: String| {
        if let Err(e) = download_pdf(&text, download_author.as_deref()) {
            tracing::error!("PDF export failed: {}", e);
            notify(&mut toasts, ToastKind::Error, "Failed to export PDF");
        }
    };

    let draft = workspace().draft().map(str::to_string);
    let documents = workspace().documents().to_vec();
    let deleting_id = deleting();
    let count = documents.len();

    rsx! {
        div {
            class: "dashboard",
            div {
                class: "tabs",
                button {
                    class: if tab() == Tab::Generate { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(Tab::Generate),
                    "Generate"
                }
                button {
                    class: if tab() == Tab::History { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(Tab::History),
                    "History ({count})"
                }
            }

            if tab() == Tab::Generate {
                div {
                    class: "generate-panel",
                    div {
                        class: "panel",
                        h2 { "File a Complaint" }
                        ComplaintFormView {
                            loading: generating() || saving(),
                            on_submit: handle_generate,
                        }
                    }
                    div {
                        class: "panel",
                        h2 { "Preview" }
                        if let Some(text) = draft {
                            DocumentPreview { text: text.clone() }
                            div {
                                class: "preview-actions",
                                Button {
                                    variant: ButtonVariant::Primary,
                                    disabled: saving() || generating(),
                                    onclick: handle_save,
                                    if saving() { "Saving..." } else { "Save to History" }
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| handle_download(text.clone()),
                                    "Download PDF"
                                }
                            }
                        } else {
                            p {
                                class: "empty-state",
                                "Fill in the complaint details to generate a document."
                            }
                        }
                    }
                }
            } else {
                div {
                    class: "history-panel",
                    if documents.is_empty() {
                        p { class: "empty-state", "No saved documents yet." }
                    }
                    for doc in documents {
                        DocumentCard {
                            key: "{doc.id}",
                            deleting: deleting_id.as_deref() == Some(doc.id.as_str()),
                            document: doc.clone(),
                            on_edit: move |d: Document| editing.set(Some(d)),
                            on_delete: handle_delete.clone(),
                            on_download: handle_download.clone(),
                        }
                    }
                }
            }

            if let Some(doc) = editing() {
                EditDocumentModal {
                    document: doc,
                    saving: updating(),
                    on_save: handle_update,
                    on_close: move |_| editing.set(None),
                }
            }
        }
    }
}
