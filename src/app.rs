use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{AppState, FetchKey},
    infra::impact::ImpactClient,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{ImpactPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Impact {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    let fetch_key = use_signal(FetchKey::default);
    use_hook({
        let mut state = state.clone();
        let mut fetch_key = fetch_key.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(&saved));
                fetch_key.with_mut(|key| key.company_id = saved.company_id);
            }
        }
    });
    use_context_provider(|| state.clone());
    use_context_provider(|| fetch_key.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    // Re-runs whenever the company id or the refresh tick changes.
    let _impact = use_resource({
        let state = state.clone();
        let fetch_key = fetch_key.clone();
        move || async move { fetch_impact(state.clone(), fetch_key.clone()).await }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>, fetch_key: &Signal<FetchKey>) {
    let company = fetch_key.with(|key| key.company_id.clone());
    let snapshot = state.with(|st| st.to_persisted(&company));
    if let Err(err) = save_persisted_state(&snapshot) {
        println!("Failed to persist user state: {err}");
    }
}

/// One read-only request per trigger. Failures of any kind are logged and the
/// view is left on the loading placeholder; stale completions are dropped by
/// the generation check in `AppState::finish_fetch`.
async fn fetch_impact(mut state: Signal<AppState>, fetch_key: Signal<FetchKey>) -> Option<u64> {
    let key = fetch_key();
    if key.company_id.trim().is_empty() {
        return None;
    }

    let base_url = state.peek().api_base_url.clone();
    let generation = state.with_mut(|st| st.begin_fetch());

    let client = match ImpactClient::with_base_url(&base_url) {
        Ok(client) => client,
        Err(err) => {
            println!("Failed to initialise impact client: {err}");
            state.with_mut(|st| st.finish_fetch(generation, None));
            return None;
        }
    };

    match client.get_impact(&key.company_id).await {
        Ok(payload) => {
            state.with_mut(|st| st.finish_fetch(generation, Some(payload)));
            Some(generation)
        }
        Err(err) => {
            println!("Impact fetch failed for company {}: {err}", key.company_id);
            state.with_mut(|st| st.finish_fetch(generation, None));
            None
        }
    }
}

#[component]
pub fn Impact() -> Element {
    rsx! { Shell { ImpactPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
