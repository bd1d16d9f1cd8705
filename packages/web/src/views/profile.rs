//! Profile page: picture upload, name/email and password forms.

use api::ProfilePicture;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{notify, use_auth, use_services, use_toasts, AuthState, Avatar, ToastKind};

use super::RequireAuth;

#[component]
pub fn Profile() -> Element {
    rsx! {
        RequireAuth {
            ProfilePanel {}
        }
    }
}

#[component]
fn ProfilePanel() -> Element {
    let mut auth = use_auth();
    let mut toasts = use_toasts();
    let services = use_services();
    let user = auth().user.unwrap_or_default();
    let base_url = services.config.backend.url.clone();

    let initial_name = user.name.clone();
    let initial_email = user.email.clone();
    let mut name = use_signal(move || initial_name);
    let mut email = use_signal(move || initial_email);
    let mut saving = use_signal(|| false);

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut changing = use_signal(|| false);

    let mut uploading = use_signal(|| false);

    let profile_session = services.session.clone();
    let handle_profile = move |evt: FormEvent| {
        evt.prevent_default();
        let session = profile_session.clone();
        spawn(async move {
            saving.set(true);
            match session.update_profile(&name(), &email()).await {
                Ok(user) => {
                    auth.set(AuthState::signed_in(user));
                    notify(&mut toasts, ToastKind::Success, "Profile updated successfully!");
                }
                Err(e) => {
                    tracing::error!("Profile update failed: {}", e);
                    notify(&mut toasts, ToastKind::Error, &e.user_message("Failed to update profile"));
                }
            }
            saving.set(false);
        });
    };

    let password_session = services.session.clone();
    let handle_password = move |evt: FormEvent| {
        evt.prevent_default();
        let session = password_session.clone();
        spawn(async move {
            changing.set(true);
            match session
                .change_password(&current_password(), &new_password())
                .await
            {
                Ok(()) => {
                    current_password.set(String::new());
                    new_password.set(String::new());
                    notify(&mut toasts, ToastKind::Success, "Password changed successfully!");
                }
                Err(e) => {
                    tracing::error!("Password change failed: {}", e);
                    notify(&mut toasts, ToastKind::Error, &e.user_message("Failed to change password"));
                }
            }
            changing.set(false);
        });
    };

    let picture_session = services.session;
    let handle_picture = move |evt: FormEvent| {
        let session = picture_session.clone();
        spawn(async move {
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };
            uploading.set(true);
            let file_name = file.name();
            match file.read_bytes().await {
                Ok(bytes) => {
                    let picture = ProfilePicture::from_file(&file_name, bytes.to_vec());
                    match session.upload_profile_picture(picture).await {
                        Ok(user) => {
                            auth.set(AuthState::signed_in(user));
                            notify(
                                &mut toasts,
                                ToastKind::Success,
                                "Profile picture updated successfully!",
                            );
                        }
                        Err(e) => {
                            tracing::error!("Picture upload failed: {}", e);
                            notify(
                                &mut toasts,
                                ToastKind::Error,
                                &e.user_message("Failed to upload profile picture"),
                            );
                        }
                    }
                }
                Err(e) => {
                    tracing::error!("Could not read {}: {}", file_name, e);
                    notify(&mut toasts, ToastKind::Error, "Failed to upload profile picture");
                }
            }
            uploading.set(false);
        });
    };

    rsx! {
        div {
            class: "profile",
            h1 { "Your Profile" }

            section {
                class: "panel profile-picture",
                Avatar {
                    name: user.display_name().to_string(),
                    picture_url: user.profile_pic_url(&base_url),
                    size: 96,
                }
                div {
                    h3 { "Profile Picture" }
                    p { class: "hint", "Recommended: square image, at least 200x200 pixels" }
                    label {
                        class: if uploading() { "button upload disabled" } else { "button upload" },
                        "data-style": "primary",
                        r#for: "profile-pic-input",
                        if uploading() { "Uploading..." } else { "Upload Photo" }
                    }
                    input {
                        id: "profile-pic-input",
                        class: "hidden",
                        r#type: "file",
                        accept: "image/*",
                        disabled: uploading(),
                        onchange: handle_picture,
                    }
                }
            }

            section {
                class: "panel",
                h3 { "Profile Information" }
                form {
                    onsubmit: handle_profile,
                    div {
                        class: "form-field",
                        Label { html_for: "profile-name", "Full Name" }
                        Input {
                            id: "profile-name",
                            r#type: "text",
                            required: true,
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "profile-email", "Email Address" }
                        Input {
                            id: "profile-email",
                            r#type: "email",
                            required: true,
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save Changes" }
                    }
                }
            }

            section {
                class: "panel",
                h3 { "Change Password" }
                form {
                    onsubmit: handle_password,
                    div {
                        class: "form-field",
                        Label { html_for: "current-password", "Current Password" }
                        Input {
                            id: "current-password",
                            r#type: "password",
                            autocomplete: "current-password",
                            required: true,
                            value: current_password(),
                            oninput: move |evt: FormEvent| current_password.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "new-password", "New Password" }
                        Input {
                            id: "new-password",
                            r#type: "password",
                            autocomplete: "new-password",
                            required: true,
                            value: new_password(),
                            oninput: move |evt: FormEvent| new_password.set(evt.value()),
                        }
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        r#type: "submit",
                        disabled: changing(),
                        if changing() { "Updating..." } else { "Update Password" }
                    }
                }
            }
        }
    }
}
