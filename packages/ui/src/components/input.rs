use dioxus::prelude::*;

#[component]
pub fn Input(
    oninput: Option<EventHandler<FormEvent>>,
    onchange: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        input {
            class: "input",
            oninput: move |event| {
                if let Some(handler) = oninput {
                    handler.call(event);
                }
            },
            onchange: move |event| {
                if let Some(handler) = onchange {
                    handler.call(event);
                }
            },
            ..attributes,
        }
    }
}

/// Multi-line variant of [`Input`].
#[component]
pub fn TextArea(
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = textarea)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        textarea {
            class: "input textarea",
            oninput: move |event| {
                if let Some(handler) = oninput {
                    handler.call(event);
                }
            },
            ..attributes,
        }
    }
}

#[component]
pub fn Label(
    html_for: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        label {
            class: "label",
            r#for: "{html_for}",
            ..attributes,
            {children}
        }
    }
}
