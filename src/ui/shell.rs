use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::FetchKey;
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::util::version;

#[component]
pub fn Shell(children: Element) -> Element {
    let fetch_key = use_context::<Signal<FetchKey>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let company = fetch_key.with(|key| key.company_id.clone());
    let company_display = if company.trim().is_empty() {
        "No company selected".to_string()
    } else {
        company.clone()
    };
    let version_label = version::version_label();

    let on_refresh = {
        let mut fetch_key = fetch_key.clone();
        let toasts = toasts.clone();
        move |_| {
            if fetch_key.with(|key| key.company_id.trim().is_empty()) {
                push_toast(
                    toasts.clone(),
                    ToastKind::Warning,
                    "Select a company in Settings before refreshing.",
                );
                return;
            }
            fetch_key.with_mut(FetchKey::bump);
            push_toast(toasts.clone(), ToastKind::Info, "Refreshing impact data...");
        }
    };

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
                div { class: "mx-auto grid max-w-6xl grid-cols-[1fr_auto_1fr] items-center gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "📊" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight", "{version::APP_NAME}" }
                            p { class: "text-xs text-slate-500", "{company_display} · {version_label}" }
                        }
                    }

                    div { class: "flex justify-center",
                        button {
                            class: "rounded-lg border border-indigo-500/40 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-indigo-200 hover:bg-indigo-500/10",
                            onclick: on_refresh,
                            "Refresh"
                        }
                    }

                    nav { class: "flex gap-2 text-sm justify-end",
                        NavButton {
                            active: matches!(current_route, Route::Impact {}),
                            onclick: move |_| { nav.push(Route::Impact {}); },
                            label: "📈 Impact",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Settings {}),
                            onclick: move |_| { nav.push(Route::Settings {}); },
                            label: "⚙️ Settings",
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "min-w-[5.5rem] rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 font-semibold text-indigo-300"
    } else {
        "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
