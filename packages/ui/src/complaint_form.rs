use api::{ComplaintForm, ComplaintType};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label, TextArea};

/// The complaint details form on the Generate tab.
#[component]
pub fn ComplaintFormView(loading: bool, on_submit: EventHandler<ComplaintForm>) -> Element {
    let mut form = use_signal(ComplaintForm::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(form());
    };

    let selected = form().complaint_type.map(|t| t.label()).unwrap_or_default();

    rsx! {
        form {
            class: "complaint-form",
            onsubmit: handle_submit,

            div {
                class: "form-field",
                Label { html_for: "complaint-type", "Complaint Type" }
                select {
                    id: "complaint-type",
                    class: "input",
                    required: true,
                    value: "{selected}",
                    onchange: move |evt| {
                        form.write().complaint_type = ComplaintType::from_label(&evt.value());
                    },
                    option { value: "", "Select complaint type" }
                    for kind in ComplaintType::ALL {
                        option { key: "{kind.label()}", value: kind.label(), "{kind.label()}" }
                    }
                }
            }

            div {
                class: "form-field",
                Label { html_for: "complaint-datetime", "Date & Time of Incident" }
                Input {
                    id: "complaint-datetime",
                    r#type: "datetime-local",
                    required: true,
                    value: form().date_time,
                    oninput: move |evt: FormEvent| form.write().date_time = evt.value(),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "complaint-location", "Location" }
                Input {
                    id: "complaint-location",
                    r#type: "text",
                    required: true,
                    placeholder: "Where did the incident occur?",
                    value: form().location,
                    oninput: move |evt: FormEvent| form.write().location = evt.value(),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "complaint-description", "Description" }
                TextArea {
                    id: "complaint-description",
                    rows: "5",
                    required: true,
                    placeholder: "Describe what happened",
                    value: form().description,
                    oninput: move |evt: FormEvent| form.write().description = evt.value(),
                }
            }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    Label { html_for: "complaint-name", "Your Name" }
                    Input {
                        id: "complaint-name",
                        r#type: "text",
                        required: true,
                        value: form().name,
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "complaint-contact", "Contact Information" }
                    Input {
                        id: "complaint-contact",
                        r#type: "text",
                        required: true,
                        placeholder: "Phone or email",
                        value: form().contact,
                        oninput: move |evt: FormEvent| form.write().contact = evt.value(),
                    }
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                class: "w-full",
                r#type: "submit",
                disabled: loading,
                if loading { "Generating..." } else { "Generate Document" }
            }
        }
    }
}
