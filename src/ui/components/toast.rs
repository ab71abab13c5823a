use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const AUTO_DISMISS: Duration = Duration::from_secs(5);
const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn theme(self) -> &'static str {
        match self {
            ToastKind::Info => "border-sky-500/40 bg-sky-500/10 text-sky-100",
            ToastKind::Success => "border-emerald-500/40 bg-emerald-500/10 text-emerald-100",
            ToastKind::Warning => "border-amber-500/40 bg-amber-500/10 text-amber-100",
            ToastKind::Error => "border-rose-500/40 bg-rose-500/10 text-rose-100",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "⛔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

/// Queues a toast, dropping the oldest entry once the stack is full.
pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let entry = ToastMessage {
        id: generate_id("toast"),
        kind,
        text: message.into(),
    };
    toasts.with_mut(|entries| {
        while entries.len() >= MAX_VISIBLE {
            entries.remove(0);
        }
        entries.push(entry);
    });
}

fn dismiss(mut toasts: Signal<Vec<ToastMessage>>, id: &str) {
    toasts.with_mut(|entries| entries.retain(|toast| toast.id != id));
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let entries = toasts();

    if entries.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 bottom-4 flex justify-center",
            ul {
                class: "space-y-3",
                for entry in entries {
                    ToastEntry { entry, toasts: toasts.clone() }
                }
            }
        }
    }
}

#[component]
fn ToastEntry(entry: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let timer_id = entry.id.clone();
    let timer_toasts = toasts.clone();
    let _auto_dismiss = use_future(move || {
        let id = timer_id.clone();
        let toasts = timer_toasts.clone();
        async move {
            tokio::time::sleep(AUTO_DISMISS).await;
            dismiss(toasts, &id);
        }
    });

    let theme = entry.kind.theme();
    let icon = entry.kind.icon();
    let dismiss_id = entry.id.clone();
    rsx! {
        li {
            class: "pointer-events-auto flex items-start gap-3 rounded-xl border px-4 py-3 shadow-lg backdrop-blur {theme}",
            span { class: "text-lg", "{icon}" }
            p { class: "text-sm font-medium", "{entry.text}" }
            button {
                class: "ml-3 text-xs uppercase tracking-wide text-slate-300 hover:text-white",
                onclick: move |_| dismiss(toasts, &dismiss_id),
                "Dismiss"
            }
        }
    }
}
