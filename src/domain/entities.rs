use std::{collections::HashMap, fmt, time::SystemTime};

/// Identifier for companies tracked by the impact API.
pub type CompanyId = String;

/// A metric reading as delivered by the API: either a plain number or a
/// preformatted display string (e.g. "2.3min").
#[derive(Clone, Debug, PartialEq)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(value) => write!(f, "{value:.1}"),
            MetricValue::Text(text) => f.write_str(text),
        }
    }
}

/// Wire-level status of a tracked metric relative to its target. Unknown or
/// missing values fold into `Other` so the raw string survives for display.
#[derive(Clone, Debug, PartialEq)]
pub enum MetricStatus {
    Excellent,
    Good,
    NeedsImprovement,
    Other(String),
}

impl MetricStatus {
    /// Raw status string with underscores replaced by spaces.
    pub fn label(&self) -> String {
        match self {
            MetricStatus::Excellent => "excellent".to_string(),
            MetricStatus::Good => "good".to_string(),
            MetricStatus::NeedsImprovement => "needs improvement".to_string(),
            MetricStatus::Other(raw) => raw.replace('_', " "),
        }
    }

    pub fn is_excellent(&self) -> bool {
        matches!(self, MetricStatus::Excellent)
    }
}

impl Default for MetricStatus {
    fn default() -> Self {
        MetricStatus::Other(String::new())
    }
}

impl From<String> for MetricStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "excellent" => MetricStatus::Excellent,
            "good" => MetricStatus::Good,
            "needs_improvement" => MetricStatus::NeedsImprovement,
            _ => MetricStatus::Other(raw),
        }
    }
}

/// One metric's before/after pair with its signed delta and goal threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct Improvement {
    pub before: MetricValue,
    pub after: MetricValue,
    pub improvement: f64,
    pub status: MetricStatus,
    pub target: f64,
}

/// Aggregate counters shown in the summary banner. Direct pass-through
/// display, no computation here.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactSummary {
    pub noise_reduced: MetricValue,
    pub incidents_prevented: i64,
    pub time_saved_per_incident: String,
    pub auto_resolved_count: i64,
}

/// Full impact snapshot for one company. Treated as wholly present or wholly
/// absent; each successful fetch replaces the prior snapshot entirely.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactPayload {
    pub summary: ImpactSummary,
    pub improvements: HashMap<String, Improvement>,
    pub generated_at: Option<SystemTime>,
}

/// The four tracked metrics, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricKind {
    NoiseReduction,
    SelfHealed,
    Mttr,
    PatchCompliance,
}

/// Unit suffixes for one metric. The delta and target suffixes intentionally
/// differ from the value suffix for MTTR: before/after/delta are tracked in
/// minutes while the target is tracked as a percentage reduction. Do not
/// unify these fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricUnits {
    pub value_suffix: &'static str,
    pub delta_suffix: &'static str,
    pub target_suffix: &'static str,
}

const PERCENT_UNITS: MetricUnits = MetricUnits {
    value_suffix: "%",
    delta_suffix: "%",
    target_suffix: "%",
};

const MTTR_UNITS: MetricUnits = MetricUnits {
    value_suffix: "m",
    delta_suffix: "m",
    target_suffix: "% reduction",
};

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::NoiseReduction,
        MetricKind::SelfHealed,
        MetricKind::Mttr,
        MetricKind::PatchCompliance,
    ];

    /// Lookup key in the payload's improvements map.
    pub fn key(self) -> &'static str {
        match self {
            MetricKind::NoiseReduction => "noise_reduction",
            MetricKind::SelfHealed => "self_healed",
            MetricKind::Mttr => "mttr",
            MetricKind::PatchCompliance => "patch_compliance",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            MetricKind::NoiseReduction => "Noise Reduction %",
            MetricKind::SelfHealed => "Self-Healed %",
            MetricKind::Mttr => "MTTR (Minutes)",
            MetricKind::PatchCompliance => "Patch Compliance %",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MetricKind::NoiseReduction => "🔕",
            MetricKind::SelfHealed => "🤖",
            MetricKind::Mttr => "⏱️",
            MetricKind::PatchCompliance => "🛡️",
        }
    }

    pub fn units(self) -> MetricUnits {
        match self {
            MetricKind::Mttr => MTTR_UNITS,
            _ => PERCENT_UNITS,
        }
    }
}
