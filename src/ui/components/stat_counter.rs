use dioxus::prelude::*;

use crate::ui::theme;

/// One labeled counter in the summary banner. Pure pass-through display.
#[component]
pub fn StatCounter(label: String, value: String, description: String) -> Element {
    rsx! {
        div {
            class: "{theme::panel_border()} p-4 shadow-sm",
            h3 { class: "{theme::label_class()}", "{label}" }
            p { class: "mt-2 text-2xl font-semibold text-slate-100", "{value}" }
            p { class: "mt-1 text-xs text-slate-500", "{description}" }
        }
    }
}
