use dioxus::prelude::*;

use crate::domain::ImpactSummary;
use crate::ui::components::stat_counter::StatCounter;

/// Four aggregate counters bound straight off the summary object.
#[component]
pub fn SummaryBanner(summary: ImpactSummary) -> Element {
    let noise_reduced = summary.noise_reduced.to_string();
    let incidents_prevented = summary.incidents_prevented.to_string();
    let time_saved = summary.time_saved_per_incident.clone();
    let auto_resolved = summary.auto_resolved_count.to_string();

    rsx! {
        div {
            class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
            StatCounter {
                label: "Noise Reduced",
                value: noise_reduced,
                description: "Alert volume suppressed since onboarding",
            }
            StatCounter {
                label: "Incidents Prevented",
                value: incidents_prevented,
                description: "Caught before customer impact",
            }
            StatCounter {
                label: "Time Saved / Incident",
                value: time_saved,
                description: "Average triage time recovered",
            }
            StatCounter {
                label: "Auto-Resolved",
                value: auto_resolved,
                description: "Closed without human intervention",
            }
        }
    }
}
