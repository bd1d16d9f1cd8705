use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label, TextArea};
use ui::icons::{FaClock, FaEnvelope, FaLocationDot, FaPhone};
use ui::{notify, use_toasts, Icon, ToastKind};

const MAP_URL: &str = "https://www.google.com/maps?q=San+Francisco,+CA+94103&output=embed";

#[component]
pub fn Contact() -> Element {
    let mut toasts = use_toasts();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    // There is no contact endpoint; the form is acknowledged locally.
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if name().trim().is_empty() || email().trim().is_empty() || message().trim().is_empty() {
            notify(&mut toasts, ToastKind::Error, "Please fill in all fields.");
            return;
        }
        notify(
            &mut toasts,
            ToastKind::Success,
            "Thank you for reaching out! We'll get back to you soon.",
        );
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
    };

    rsx! {
        section {
            class: "content-page",
            h1 { "Contact Us" }

            div {
                class: "contact-cards",
                div {
                    class: "contact-card",
                    Icon { icon: FaLocationDot, width: 20, height: 20 }
                    h3 { "Address" }
                    p { "123 Legal Avenue" }
                    p { "San Francisco, CA 94103" }
                }
                div {
                    class: "contact-card",
                    Icon { icon: FaPhone, width: 20, height: 20 }
                    h3 { "Phone" }
                    p { "+1 (555) 123-4567" }
                }
                div {
                    class: "contact-card",
                    Icon { icon: FaEnvelope, width: 20, height: 20 }
                    h3 { "Email" }
                    p { "support@lawpal.example" }
                }
                div {
                    class: "contact-card",
                    Icon { icon: FaClock, width: 20, height: 20 }
                    h3 { "Hours" }
                    p { "Mon-Fri 9am-6pm PST" }
                }
            }

            div {
                class: "contact-body",
                form {
                    class: "contact-form",
                    onsubmit: handle_submit,
                    div {
                        class: "form-field",
                        Label { html_for: "contact-name", "Name" }
                        Input {
                            id: "contact-name",
                            r#type: "text",
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "contact-email", "Email" }
                        Input {
                            id: "contact-email",
                            r#type: "email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "contact-message", "Message" }
                        TextArea {
                            id: "contact-message",
                            rows: "5",
                            value: message(),
                            oninput: move |evt: FormEvent| message.set(evt.value()),
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        "Send Message"
                    }
                }
                iframe {
                    class: "contact-map",
                    title: "LawPal office location",
                    src: MAP_URL,
                }
            }
        }
    }
}
