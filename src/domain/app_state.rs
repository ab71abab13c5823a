use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::entities::{CompanyId, ImpactPayload};
use crate::infra::impact::DEFAULT_BASE_URL;

/// Trigger tuple for the impact loader. The loader re-runs whenever the
/// company id or the refresh tick changes; the tick value itself is unused.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchKey {
    pub company_id: CompanyId,
    pub tick: u64,
}

impl FetchKey {
    pub fn bump(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub api_base_url: String,
    pub loading: bool,
    pub payload: Option<ImpactPayload>,
    pub last_fetched: Option<SystemTime>,
    latest_generation: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            loading: false,
            payload: None,
            last_fetched: None,
            latest_generation: 0,
        }
    }
}

impl AppState {
    /// Starts a new fetch: supersedes the prior snapshot and returns the
    /// generation number the completion must present.
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_generation += 1;
        self.loading = true;
        self.payload = None;
        self.latest_generation
    }

    /// Applies a fetch outcome. Completions carrying a stale generation are
    /// dropped so a slow response can never overwrite a newer request.
    /// A `None` outcome (fetch failed) clears the loading flag without
    /// storing a payload, leaving the view on the loading placeholder.
    pub fn finish_fetch(&mut self, generation: u64, outcome: Option<ImpactPayload>) {
        if generation != self.latest_generation {
            return;
        }
        self.loading = false;
        if outcome.is_some() {
            self.payload = outcome;
            self.last_fetched = Some(SystemTime::now());
        }
    }

    /// The dashboard renders only once a payload is present and no fetch is
    /// in flight; everything else shows the loading placeholder.
    pub fn show_placeholder(&self) -> bool {
        self.loading || self.payload.is_none()
    }

    pub fn apply_persisted(&mut self, persisted: &PersistedState) {
        if !persisted.api_base_url.trim().is_empty() {
            self.api_base_url = persisted.api_base_url.clone();
        }
    }

    pub fn to_persisted(&self, company_id: &str) -> PersistedState {
        PersistedState {
            company_id: company_id.to_string(),
            api_base_url: self.api_base_url.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub company_id: CompanyId,
    #[serde(default)]
    pub api_base_url: String,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::entities::{ImpactSummary, MetricValue};

    fn sample_payload(marker: i64) -> ImpactPayload {
        ImpactPayload {
            summary: ImpactSummary {
                noise_reduced: MetricValue::Number(72.0),
                incidents_prevented: marker,
                time_saved_per_incident: "23min".to_string(),
                auto_resolved_count: 140,
            },
            improvements: HashMap::new(),
            generated_at: None,
        }
    }

    #[test]
    fn successful_fetch_stores_payload_and_clears_loading() {
        let mut state = AppState::default();
        let generation = state.begin_fetch();
        assert!(state.loading);
        assert!(state.show_placeholder());

        state.finish_fetch(generation, Some(sample_payload(1)));
        assert!(!state.loading);
        assert!(!state.show_placeholder());
        assert_eq!(state.payload.as_ref().map(|p| p.summary.incidents_prevented), Some(1));
    }

    #[test]
    fn failed_fetch_leaves_placeholder_without_payload() {
        let mut state = AppState::default();
        let generation = state.begin_fetch();
        state.finish_fetch(generation, None);

        assert!(!state.loading);
        assert!(state.payload.is_none());
        assert!(state.show_placeholder());
    }

    #[test]
    fn new_fetch_supersedes_prior_snapshot() {
        let mut state = AppState::default();
        let first = state.begin_fetch();
        state.finish_fetch(first, Some(sample_payload(1)));

        state.begin_fetch();
        assert!(state.payload.is_none());
        assert!(state.show_placeholder());
    }

    #[test]
    fn stale_generation_is_dropped() {
        let mut state = AppState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        state.finish_fetch(first, Some(sample_payload(1)));
        assert!(state.loading, "stale completion must not clear loading");
        assert!(state.payload.is_none());

        state.finish_fetch(second, Some(sample_payload(2)));
        assert_eq!(state.payload.as_ref().map(|p| p.summary.incidents_prevented), Some(2));
    }

    #[test]
    fn persisted_base_url_overrides_default_when_present() {
        let mut state = AppState::default();
        state.apply_persisted(&PersistedState {
            company_id: "acme".to_string(),
            api_base_url: "https://impact.internal/api/".to_string(),
        });
        assert_eq!(state.api_base_url, "https://impact.internal/api/");

        let mut untouched = AppState::default();
        untouched.apply_persisted(&PersistedState::default());
        assert_eq!(untouched.api_base_url, DEFAULT_BASE_URL);
    }
}
