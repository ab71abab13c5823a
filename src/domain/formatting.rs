//! Display formatting for improvement cards. Pure functions of the metric
//! value and its unit configuration.

use super::entities::{MetricStatus, MetricUnits, MetricValue};

/// Direction of an improvement delta. Exactly zero counts as negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
}

impl Trend {
    pub fn glyph(self) -> &'static str {
        match self {
            Trend::Positive => "▲",
            Trend::Negative => "▼",
        }
    }
}

pub fn trend_for(delta: f64) -> Trend {
    if delta > 0.0 {
        Trend::Positive
    } else {
        Trend::Negative
    }
}

/// Numbers render with exactly one decimal place, preformatted strings
/// verbatim; the metric's value suffix is appended either way.
pub fn format_value(value: &MetricValue, units: &MetricUnits) -> String {
    match value {
        MetricValue::Number(number) => format!("{number:.1}{}", units.value_suffix),
        MetricValue::Text(text) => format!("{text}{}", units.value_suffix),
    }
}

pub fn format_delta(delta: f64, units: &MetricUnits) -> String {
    format!("{delta:.1}{}", units.delta_suffix)
}

pub fn format_target(target: f64, units: &MetricUnits) -> String {
    format!("{target:.0}{}", units.target_suffix)
}

/// Checkmark only for an exactly-excellent status; every other status gets
/// the target glyph.
pub fn status_glyph(status: &MetricStatus) -> &'static str {
    if status.is_excellent() {
        "✓"
    } else {
        "🎯"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MetricKind;

    #[test]
    fn zero_before_value_renders_one_decimal_with_percent() {
        let units = MetricKind::NoiseReduction.units();
        assert_eq!(format_value(&MetricValue::Number(0.0), &units), "0.0%");
    }

    #[test]
    fn preformatted_text_renders_verbatim_plus_suffix() {
        let units = MetricKind::Mttr.units();
        assert_eq!(format_value(&MetricValue::Text("48".to_string()), &units), "48m");
    }

    #[test]
    fn mttr_delta_rounds_to_one_decimal_in_minutes() {
        let units = MetricKind::Mttr.units();
        assert_eq!(format_delta(-15.333, &units), "-15.3m");
    }

    #[test]
    fn mttr_target_uses_percent_reduction_suffix() {
        // Deliberate asymmetry with the value/delta suffix; see MetricUnits.
        let units = MetricKind::Mttr.units();
        assert_eq!(format_target(30.0, &units), "30% reduction");
    }

    #[test]
    fn percent_metrics_share_the_percent_suffix_across_fields() {
        for kind in [
            MetricKind::NoiseReduction,
            MetricKind::SelfHealed,
            MetricKind::PatchCompliance,
        ] {
            let units = kind.units();
            assert_eq!(format_value(&MetricValue::Number(87.5), &units), "87.5%");
            assert_eq!(format_delta(12.34, &units), "12.3%");
            assert_eq!(format_target(95.0, &units), "95%");
        }
    }

    #[test]
    fn positive_delta_trends_upward() {
        assert_eq!(trend_for(0.1), Trend::Positive);
        assert_eq!(trend_for(0.1).glyph(), "▲");
    }

    #[test]
    fn zero_delta_trends_downward() {
        assert_eq!(trend_for(0.0), Trend::Negative);
        assert_eq!(trend_for(-3.0), Trend::Negative);
        assert_eq!(trend_for(0.0).glyph(), "▼");
    }

    #[test]
    fn status_labels_replace_underscores() {
        assert_eq!(MetricStatus::NeedsImprovement.label(), "needs improvement");
        assert_eq!(
            MetricStatus::Other("way_off_track".to_string()).label(),
            "way off track"
        );
    }

    #[test]
    fn only_excellent_gets_the_checkmark() {
        assert_eq!(status_glyph(&MetricStatus::Excellent), "✓");
        assert_eq!(status_glyph(&MetricStatus::Good), "🎯");
        assert_eq!(status_glyph(&MetricStatus::NeedsImprovement), "🎯");
        assert_eq!(status_glyph(&MetricStatus::Other(String::new())), "🎯");
    }
}
