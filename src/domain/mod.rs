//! Domain model for the impact dashboard lives here.

pub mod app_state;
pub mod entities;
pub mod formatting;

#[allow(unused_imports)]
pub use app_state::{AppState, FetchKey, PersistedState};
#[allow(unused_imports)]
pub use entities::{
    CompanyId, ImpactPayload, ImpactSummary, Improvement, MetricKind, MetricStatus, MetricUnits,
    MetricValue,
};
#[allow(unused_imports)]
pub use formatting::{
    format_delta, format_target, format_value, status_glyph, trend_for, Trend,
};
