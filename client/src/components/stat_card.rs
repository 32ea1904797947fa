//! Small numeric summary card used by dashboard and reports.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    label: &'static str,
    value: Signal<String>,
    #[prop(optional)] accent: &'static str,
) -> impl IntoView {
    let class = if accent.is_empty() {
        "stat-card".to_owned()
    } else {
        format!("stat-card stat-card--{accent}")
    };

    view! {
        <div class=class>
            <span class="stat-card__value">{move || value.get()}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
