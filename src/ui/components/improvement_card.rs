use dioxus::prelude::*;

use crate::domain::{
    format_delta, format_target, format_value, status_glyph, trend_for, Improvement, MetricKind,
};
use crate::ui::theme;

/// Before/after card for one tracked metric. Pure function of its props.
#[component]
pub fn ImprovementCard(kind: MetricKind, improvement: Improvement) -> Element {
    let units = kind.units();
    let before = format_value(&improvement.before, &units);
    let after = format_value(&improvement.after, &units);
    let delta = format_delta(improvement.improvement, &units);
    let target = format_target(improvement.target, &units);

    let trend = trend_for(improvement.improvement);
    let trend_glyph = trend.glyph();
    let trend_class = theme::trend_class(trend);

    let badge_class = theme::status_badge_class(&improvement.status);
    let border_class = theme::card_border_class(&improvement.status);
    let glyph = status_glyph(&improvement.status);
    let label = improvement.status.label();

    rsx! {
        div {
            class: "rounded-xl border {border_class} bg-slate-900/40 p-4 shadow-sm",
            div { class: "flex items-center justify-between",
                div { class: "flex items-center gap-2",
                    span { class: "text-lg", "{kind.icon()}" }
                    h3 { class: "text-sm font-semibold text-slate-100", "{kind.title()}" }
                }
                span {
                    class: "inline-flex items-center gap-1 rounded-full border px-2 py-0.5 text-xs font-medium {badge_class}",
                    "{glyph} {label}"
                }
            }
            div { class: "mt-4 flex items-end gap-3",
                div {
                    p { class: "text-xs uppercase tracking-wide text-slate-500", "Before" }
                    p { class: "text-lg font-semibold text-slate-400", "{before}" }
                }
                span { class: "pb-1 text-slate-600", "→" }
                div {
                    p { class: "text-xs uppercase tracking-wide text-slate-500", "After" }
                    p { class: "text-2xl font-semibold text-slate-100", "{after}" }
                }
            }
            div { class: "mt-3 flex items-center justify-between text-sm",
                span { class: "font-semibold {trend_class}", "{trend_glyph} {delta}" }
                span { class: "text-xs text-slate-500", "Target: {target}" }
            }
        }
    }
}
