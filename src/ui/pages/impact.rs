use std::time::SystemTime;

use dioxus::prelude::*;

use crate::{
    domain::{AppState, Improvement, MetricKind},
    ui::components::{improvement_card::ImprovementCard, summary_banner::SummaryBanner},
};

#[component]
pub fn ImpactPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let placeholder = state.with(|st| st.show_placeholder());
    if placeholder {
        // Still loading and failed-to-load look identical by design.
        return rsx! {
            div {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-10 text-center text-sm text-slate-400",
                "Loading impact analysis..."
            }
        };
    }

    let payload = state.with(|st| st.payload.clone());
    let Some(payload) = payload else {
        return rsx! { Fragment {} };
    };

    let generated_display = payload.generated_at.map(humanize_age);

    // Guarded lookups: only metrics present in the snapshot get a card.
    let cards: Vec<(MetricKind, Improvement)> = MetricKind::ALL
        .iter()
        .filter_map(|kind| {
            payload
                .improvements
                .get(kind.key())
                .map(|improvement| (*kind, improvement.clone()))
        })
        .collect();

    rsx! {
        div { class: "space-y-8",
            header {
                h1 { class: "text-2xl font-semibold text-slate-100", "KPI Impact Analysis" }
                p {
                    class: "text-sm text-slate-400",
                    "Before/after comparison of operational metrics since onboarding."
                }
            }

            SummaryBanner { summary: payload.summary.clone() }

            div {
                class: "grid gap-4 sm:grid-cols-2",
                for (kind, improvement) in cards {
                    ImprovementCard { kind, improvement }
                }
            }

            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Methodology" }
                p {
                    class: "mt-2 text-sm text-slate-400",
                    "Baselines are captured over the 30 days preceding onboarding. "
                    "Noise reduction counts alerts suppressed by correlation and dedup. "
                    "MTTR is measured from first alert to resolution and assumes 23 minutes "
                    "of manual triage saved per suppressed alert. Self-healed and patch "
                    "compliance percentages are computed server-side from the same incident "
                    "stream; figures shown here are precomputed and refreshed on demand."
                }
                if let Some(generated) = generated_display {
                    p { class: "mt-3 text-xs text-slate-500", "Data generated {generated}" }
                }
            }
        }
    }
}

fn humanize_age(time: SystemTime) -> String {
    let Ok(elapsed) = time.elapsed() else {
        return "just now".to_string();
    };
    let secs = elapsed.as_secs();
    if secs < 60 {
        "just now".to_string()
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86_400)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn ages_render_in_coarse_buckets() {
        let now = SystemTime::now();
        assert_eq!(humanize_age(now), "just now");
        assert_eq!(humanize_age(now - Duration::from_secs(5 * 60)), "5m ago");
        assert_eq!(humanize_age(now - Duration::from_secs(3 * 3600)), "3h ago");
        assert_eq!(humanize_age(now - Duration::from_secs(2 * 86_400)), "2d ago");
    }

    #[test]
    fn future_timestamps_do_not_panic() {
        let ahead = SystemTime::now() + Duration::from_secs(120);
        assert_eq!(humanize_age(ahead), "just now");
    }
}
