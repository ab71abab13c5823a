//! Shared styling helpers so status and trend colors stay consistent
//! across components.

use crate::domain::{MetricStatus, Trend};

pub fn panel_border() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40"
}

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

pub fn input_class() -> &'static str {
    "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none"
}

pub fn btn_primary() -> &'static str {
    "rounded-lg bg-indigo-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-indigo-400"
}

pub fn btn_secondary() -> &'static str {
    "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800"
}

/// Fixed status → color lookup. Anything outside the three known statuses
/// (unrecognized, empty, missing) falls back to the slate default.
pub fn status_badge_class(status: &MetricStatus) -> &'static str {
    match status {
        MetricStatus::Excellent => "bg-emerald-500/10 text-emerald-300 border-emerald-500/40",
        MetricStatus::Good => "bg-sky-500/10 text-sky-300 border-sky-500/40",
        MetricStatus::NeedsImprovement => "bg-amber-500/10 text-amber-300 border-amber-500/40",
        MetricStatus::Other(_) => "bg-slate-700/40 text-slate-300 border-slate-600/60",
    }
}

pub fn card_border_class(status: &MetricStatus) -> &'static str {
    match status {
        MetricStatus::Excellent => "border-emerald-500/40",
        MetricStatus::Good => "border-sky-500/40",
        MetricStatus::NeedsImprovement => "border-amber-500/40",
        MetricStatus::Other(_) => "border-slate-800",
    }
}

pub fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Positive => "text-emerald-400",
        Trend::Negative => "text-rose-400",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trend_for;

    #[test]
    fn known_statuses_map_to_their_fixed_colors() {
        assert!(status_badge_class(&MetricStatus::Excellent).contains("emerald"));
        assert!(status_badge_class(&MetricStatus::Good).contains("sky"));
        assert!(status_badge_class(&MetricStatus::NeedsImprovement).contains("amber"));
    }

    #[test]
    fn unknown_statuses_fall_back_to_slate() {
        for raw in ["", "unknown", "EXCELLENT", "excellent "] {
            let status = MetricStatus::from(raw.to_string());
            assert!(
                status_badge_class(&status).contains("slate"),
                "{raw:?} should map to the slate default"
            );
        }
    }

    #[test]
    fn trend_colors_follow_delta_sign() {
        assert_eq!(trend_class(trend_for(5.0)), "text-emerald-400");
        assert_eq!(trend_class(trend_for(0.0)), "text-rose-400");
        assert_eq!(trend_class(trend_for(-5.0)), "text-rose-400");
    }
}
