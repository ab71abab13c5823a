use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AppState, FetchKey},
    infra::impact::DEFAULT_BASE_URL,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::version,
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let fetch_key = use_context::<Signal<FetchKey>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut company_input = use_signal(|| fetch_key.with(|key| key.company_id.clone()));
    let mut base_url_input = use_signal(|| state.with(|st| st.api_base_url.clone()));

    let on_apply = {
        let mut state = state.clone();
        let mut fetch_key = fetch_key.clone();
        let toasts = toasts.clone();
        move |_| {
            let company = company_input().trim().to_string();
            let base_url = base_url_input().trim().to_string();

            if base_url.is_empty() {
                push_toast(toasts.clone(), ToastKind::Error, "API base URL cannot be empty.");
                return;
            }
            if url::Url::parse(&base_url).is_err() {
                push_toast(toasts.clone(), ToastKind::Error, "API base URL is not a valid URL.");
                return;
            }

            state.with_mut(|st| st.api_base_url = base_url);
            fetch_key.with_mut(|key| key.company_id = company.clone());
            persist_user_state(&state, &fetch_key);

            if company.is_empty() {
                push_toast(
                    toasts.clone(),
                    ToastKind::Warning,
                    "Saved. No company selected, so nothing will be fetched.",
                );
            } else {
                push_toast(
                    toasts.clone(),
                    ToastKind::Success,
                    format!("Saved. Loading impact data for {company}."),
                );
            }
        }
    };

    let on_reset_url = {
        let mut state = state.clone();
        let fetch_key = fetch_key.clone();
        let toasts = toasts.clone();
        move |_| {
            base_url_input.set(DEFAULT_BASE_URL.to_string());
            state.with_mut(|st| st.api_base_url = DEFAULT_BASE_URL.to_string());
            persist_user_state(&state, &fetch_key);
            push_toast(toasts.clone(), ToastKind::Info, "Restored the default API endpoint.");
        }
    };

    let on_check_update = {
        let toasts = toasts.clone();
        move |_| {
            let toasts = toasts.clone();
            spawn(async move {
                match version::check_for_update().await {
                    Ok(info) => {
                        let kind = if info.update_available() {
                            ToastKind::Warning
                        } else {
                            ToastKind::Success
                        };
                        push_toast(toasts.clone(), kind, info.to_string());
                    }
                    Err(err) => {
                        push_toast(
                            toasts.clone(),
                            ToastKind::Error,
                            format!("Update check failed: {err}"),
                        );
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::panel_border()} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Data Source" }
                div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                    div {
                        label { class: "{theme::label_class()}", "Company ID" }
                        input {
                            class: "{theme::input_class()}",
                            placeholder: "e.g. acme-prod",
                            value: company_input(),
                            oninput: move |evt| company_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::label_class()}", "API base URL" }
                        input {
                            class: "{theme::input_class()}",
                            value: base_url_input(),
                            oninput: move |evt| base_url_input.set(evt.value()),
                        }
                    }
                }
                div { class: "mt-4 flex gap-3",
                    button { class: "{theme::btn_primary()}", onclick: on_apply, "Apply" }
                    button { class: "{theme::btn_secondary()}", onclick: on_reset_url, "Reset Endpoint" }
                }
                p {
                    class: "mt-3 text-xs text-slate-500",
                    "Impact figures are precomputed by the backend; this app only reads them."
                }
            }

            section {
                class: "{theme::panel_border()} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Updates" }
                p { class: "mt-2 text-sm text-slate-400", "Installed version: {version::version_label()}" }
                button {
                    class: "mt-3 {theme::btn_secondary()}",
                    onclick: on_check_update,
                    "Check for Updates"
                }
            }
        }
    }
}
