//! Transient toast notifications.
//!
//! Pages call [`notify`] with the provider's signal; [`ToastProvider`] renders
//! the stack and each toast removes itself after the configured duration.

use dioxus::prelude::*;

const TOASTS_CSS: Asset = asset!("/assets/styling/toasts.css");

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    pub duration_ms: u64,
    next_id: u64,
}

impl Toasts {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            entries: Vec::new(),
            duration_ms,
            next_id: 0,
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: &str) -> u64 {
        self.next_id += 1;
        self.entries.push(Toast {
            id: self.next_id,
            kind,
            message: message.to_string(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

pub fn notify(toasts: &mut Signal<Toasts>, kind: ToastKind, message: &str) {
    toasts.write().push(kind, message);
}

#[component]
pub fn ToastProvider(duration_ms: u64, children: Element) -> Element {
    let toasts = use_signal(move || Toasts::new(duration_ms));
    use_context_provider(|| toasts);

    let entries = toasts().entries;

    rsx! {
        document::Stylesheet { href: TOASTS_CSS }
        {children}
        div {
            class: "toast-stack",
            for toast in entries {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;

    use_future(move || async move {
        let duration = std::time::Duration::from_millis(toasts.peek().duration_ms);
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(duration).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;
        toasts.write().dismiss(id);
    });

    rsx! {
        div {
            class: toast.kind.class(),
            role: "status",
            span { "{toast.message}" }
            button {
                class: "toast-close",
                onclick: move |_| toasts.write().dismiss(id),
                "×"
            }
        }
    }
}
