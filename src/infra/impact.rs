//! Thin asynchronous client for the impact API.
//!
//! One typed accessor: the precomputed KPI-improvement snapshot for a
//! company. Read-only, single best-effort request per call.

use std::{
    collections::HashMap,
    time::{Duration, SystemTime},
};

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::domain::{ImpactPayload, ImpactSummary, Improvement, MetricStatus, MetricValue};

pub const DEFAULT_BASE_URL: &str = "https://api.opsboard.dev/v1/";
const USER_AGENT: &str = "impact-board/1.0.0";

#[derive(Debug, Error)]
pub enum ImpactClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct ImpactClient {
    http: Client,
    base_url: Url,
}

impl ImpactClient {
    pub fn with_base_url(base: &str) -> Result<Self, ImpactClientError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, base_url })
    }

    /// `GET /companies/{company_id}/kpis/impact`. Network failures, non-2xx
    /// responses, and malformed bodies all surface as one error kind; the
    /// caller logs and falls back to the loading state.
    pub async fn get_impact(&self, company_id: &str) -> Result<ImpactPayload, ImpactClientError> {
        let url = self.url(&format!("companies/{company_id}/kpis/impact"))?;
        let response = self.http.get(url).send().await?.error_for_status()?;
        let dto: ImpactPayloadDto = response.json().await?;
        Ok(dto.into())
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ValueDto {
    Number(f64),
    Text(String),
}

impl From<ValueDto> for MetricValue {
    fn from(value: ValueDto) -> Self {
        match value {
            ValueDto::Number(number) => MetricValue::Number(number),
            ValueDto::Text(text) => MetricValue::Text(text),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ImprovementDto {
    #[serde(default)]
    before: Option<ValueDto>,
    #[serde(default)]
    after: Option<ValueDto>,
    #[serde(default)]
    improvement: f64,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    target: f64,
}

impl From<ImprovementDto> for Improvement {
    fn from(dto: ImprovementDto) -> Self {
        Self {
            before: dto.before.map(MetricValue::from).unwrap_or(MetricValue::Number(0.0)),
            after: dto.after.map(MetricValue::from).unwrap_or(MetricValue::Number(0.0)),
            improvement: dto.improvement,
            status: dto.status.map(MetricStatus::from).unwrap_or_default(),
            target: dto.target,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ImpactSummaryDto {
    #[serde(default)]
    noise_reduced: Option<ValueDto>,
    #[serde(default)]
    incidents_prevented: i64,
    #[serde(default)]
    time_saved_per_incident: Option<String>,
    #[serde(default)]
    auto_resolved_count: i64,
}

impl From<ImpactSummaryDto> for ImpactSummary {
    fn from(dto: ImpactSummaryDto) -> Self {
        Self {
            noise_reduced: dto
                .noise_reduced
                .map(MetricValue::from)
                .unwrap_or(MetricValue::Number(0.0)),
            incidents_prevented: dto.incidents_prevented,
            time_saved_per_incident: dto.time_saved_per_incident.unwrap_or_default(),
            auto_resolved_count: dto.auto_resolved_count,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ImpactPayloadDto {
    summary: ImpactSummaryDto,
    #[serde(default)]
    improvements: HashMap<String, ImprovementDto>,
    #[serde(default, alias = "generatedAt")]
    generated_at: Option<String>,
}

impl From<ImpactPayloadDto> for ImpactPayload {
    fn from(dto: ImpactPayloadDto) -> Self {
        Self {
            summary: dto.summary.into(),
            improvements: dto
                .improvements
                .into_iter()
                .map(|(key, improvement)| (key, improvement.into()))
                .collect(),
            generated_at: dto.generated_at.as_deref().and_then(parse_timestamp_str),
        }
    }
}

fn parse_timestamp_str(raw: &str) -> Option<SystemTime> {
    OffsetDateTime::parse(raw, &Rfc3339).ok().and_then(|dt| {
        if dt.unix_timestamp() >= 0 {
            let secs = dt.unix_timestamp() as u64;
            let nanos = dt.nanosecond() as u64;
            SystemTime::UNIX_EPOCH
                .checked_add(Duration::from_secs(secs))
                .and_then(|time| time.checked_add(Duration::from_nanos(nanos)))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ImpactPayload {
        serde_json::from_value::<ImpactPayloadDto>(value)
            .map(ImpactPayload::from)
            .unwrap()
    }

    #[test]
    fn full_payload_maps_onto_domain_types() {
        let payload = parse(json!({
            "summary": {
                "noise_reduced": 72.4,
                "incidents_prevented": 18,
                "time_saved_per_incident": "23min",
                "auto_resolved_count": 140
            },
            "improvements": {
                "mttr": {
                    "before": 48.0,
                    "after": 32.6,
                    "improvement": -15.333,
                    "status": "good",
                    "target": 30.0
                },
                "noise_reduction": {
                    "before": 0,
                    "after": 72.4,
                    "improvement": 72.4,
                    "status": "excellent",
                    "target": 70.0
                }
            },
            "generated_at": "2026-08-20T09:30:00Z"
        }));

        assert_eq!(payload.summary.incidents_prevented, 18);
        assert_eq!(payload.summary.time_saved_per_incident, "23min");
        assert_eq!(payload.summary.noise_reduced, MetricValue::Number(72.4));
        assert!(payload.generated_at.is_some());

        let mttr = payload.improvements.get("mttr").unwrap();
        assert_eq!(mttr.status, MetricStatus::Good);
        assert_eq!(mttr.target, 30.0);
        assert_eq!(mttr.improvement, -15.333);

        let noise = payload.improvements.get("noise_reduction").unwrap();
        assert!(noise.status.is_excellent());
        assert_eq!(noise.before, MetricValue::Number(0.0));
    }

    #[test]
    fn preformatted_string_values_survive_untagged_parsing() {
        let payload = parse(json!({
            "summary": { "noise_reduced": "4.2k alerts" },
            "improvements": {
                "self_healed": { "before": "n/a", "after": 34.0, "improvement": 34.0 }
            }
        }));

        assert_eq!(
            payload.summary.noise_reduced,
            MetricValue::Text("4.2k alerts".to_string())
        );
        let healed = payload.improvements.get("self_healed").unwrap();
        assert_eq!(healed.before, MetricValue::Text("n/a".to_string()));
    }

    #[test]
    fn unknown_and_missing_statuses_fold_into_other() {
        let payload = parse(json!({
            "summary": {},
            "improvements": {
                "mttr": { "before": 1.0, "after": 2.0, "improvement": 1.0, "status": "on_fire" },
                "patch_compliance": { "before": 1.0, "after": 2.0, "improvement": 1.0 }
            }
        }));

        assert_eq!(
            payload.improvements.get("mttr").unwrap().status,
            MetricStatus::Other("on_fire".to_string())
        );
        assert_eq!(
            payload.improvements.get("patch_compliance").unwrap().status,
            MetricStatus::Other(String::new())
        );
    }

    #[test]
    fn missing_improvements_map_yields_empty_snapshot() {
        let payload = parse(json!({ "summary": {} }));
        assert!(payload.improvements.is_empty());
        assert_eq!(payload.summary.incidents_prevented, 0);
        assert!(payload.generated_at.is_none());
    }

    #[test]
    fn bad_timestamp_is_dropped_not_fatal() {
        let payload = parse(json!({ "summary": {}, "generated_at": "yesterday-ish" }));
        assert!(payload.generated_at.is_none());
    }
}
