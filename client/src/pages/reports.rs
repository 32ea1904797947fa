//! Reports: summary metrics and numeric breakdowns (sources, loan types,
//! monthly trends, top products).

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use api::types::{ChartSlice, ReportMetrics, TopProduct};

use crate::components::sidebar::Sidebar;
use crate::components::stat_card::StatCard;
use crate::components::toast::{ToastHost, notify_failure};
use crate::net::api::DateRange;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::format::{format_currency, format_percent};

const TREND_MONTHS: u32 = 6;
const TOP_PRODUCT_LIMIT: u32 = 5;

/// Label/value rows for the metric cards.
pub(crate) fn metric_rows(metrics: &ReportMetrics) -> Vec<(&'static str, String)> {
    vec![
        ("Total Leads", metrics.total_leads.to_string()),
        ("New Leads", metrics.new_leads.to_string()),
        ("Conversion Rate", format_percent(metrics.conversion_rate)),
        ("Total Loan Value", format_currency(metrics.total_loan_value)),
    ]
}

/// A slice's share of its breakdown, as a 0-100 percentage.
pub(crate) fn slice_share(slice: &ChartSlice, slices: &[ChartSlice]) -> f64 {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    if total <= 0.0 { 0.0 } else { slice.value / total * 100.0 }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    crate::util::auth::install_guard(auth, "/reports", navigate);

    let metrics = RwSignal::new(None::<ReportMetrics>);
    let lead_sources = RwSignal::new(Vec::<ChartSlice>::new());
    let loan_types = RwSignal::new(Vec::<ChartSlice>::new());
    let trends = RwSignal::new(Vec::<ChartSlice>::new());
    let top_products = RwSignal::new(Vec::<TopProduct>::new());
    let loading = RwSignal::new(true);
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());

    let scope = crate::util::cancel::CancelScope::new();
    {
        let scope = scope.clone();
        on_cleanup(move || scope.cancel());
    }

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            let range = DateRange { start: start_date.get_untracked(), end: end_date.get_untracked() };
            let load_scope = scope.clone();
            leptos::task::spawn_local(async move {
                let (metrics_result, sources_result, types_result, trends_result, products_result) = futures::join!(
                    crate::net::api::fetch_report_metrics(&range),
                    crate::net::api::fetch_lead_sources(&range),
                    crate::net::api::fetch_loan_types(&range),
                    crate::net::api::fetch_monthly_trends(TREND_MONTHS),
                    crate::net::api::fetch_top_products(TOP_PRODUCT_LIMIT),
                );
                if load_scope.is_cancelled() {
                    return;
                }
                // Each section lands independently; one failing breakdown
                // leaves the others on screen.
                match metrics_result {
                    Ok(m) => metrics.set(Some(m)),
                    Err(e) => notify_failure(ui, &e),
                }
                match sources_result {
                    Ok(s) => lead_sources.set(s),
                    Err(e) => notify_failure(ui, &e),
                }
                match types_result {
                    Ok(t) => loan_types.set(t),
                    Err(e) => notify_failure(ui, &e),
                }
                match trends_result {
                    Ok(t) => trends.set(t),
                    Err(e) => notify_failure(ui, &e),
                }
                match products_result {
                    Ok(p) => top_products.set(p),
                    Err(e) => notify_failure(ui, &e),
                }
                loading.set(false);
            });
        }
    };

    #[cfg(feature = "hydrate")]
    {
        let load = load.clone();
        load();
    }

    let breakdown_table = move |title: &'static str, data: RwSignal<Vec<ChartSlice>>| {
        view! {
            <section class="panel">
                <h2>{title}</h2>
                <table class="data-table">
                    <tbody>
                        {move || {
                            let slices = data.get();
                            slices
                                .clone()
                                .into_iter()
                                .map(|slice| {
                                    let share = slice_share(&slice, &slices);
                                    view! {
                                        <tr>
                                            <td>{slice.label.clone()}</td>
                                            <td class="cell-number">{slice.value}</td>
                                            <td class="cell-number">{format_percent(share)}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </section>
        }
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=|| view! { <div class="admin-shell"><p>"Loading..."</p></div> }
        >
            <div class="admin-shell">
                <Sidebar/>
                <main class="admin-main">
                    <header class="admin-main__header">
                        <h1>"Reports"</h1>
                        <div class="date-range">
                            <input
                                class="form-input"
                                type="date"
                                prop:value=move || start_date.get()
                                on:input=move |ev| start_date.set(event_target_value(&ev))
                            />
                            <input
                                class="form-input"
                                type="date"
                                prop:value=move || end_date.get()
                                on:input=move |ev| end_date.set(event_target_value(&ev))
                            />
                            <button class="btn" on:click=move |_| load()>
                                "Apply"
                            </button>
                        </div>
                    </header>

                    <Show when=move || !loading.get() fallback=|| view! { <p>"Loading reports..."</p> }>
                        <div class="stat-grid">
                            {move || {
                                metrics
                                    .get()
                                    .map(|m| {
                                        metric_rows(&m)
                                            .into_iter()
                                            .map(|(label, value)| {
                                                view! {
                                                    <StatCard
                                                        label=label
                                                        value={Signal::derive(move || value.clone())}
                                                    />
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    })
                                    .unwrap_or_default()
                            }}
                        </div>

                        {breakdown_table("Lead Sources", lead_sources)}
                        {breakdown_table("Loan Types", loan_types)}
                        {breakdown_table("Monthly Trends", trends)}

                        <section class="panel">
                            <h2>"Top Products"</h2>
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Product"</th>
                                        <th>"Leads"</th>
                                        <th>"Conversion"</th>
                                        <th>"Revenue"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        top_products
                                            .get()
                                            .into_iter()
                                            .map(|product| {
                                                view! {
                                                    <tr>
                                                        <td>{product.name}</td>
                                                        <td class="cell-number">{product.leads}</td>
                                                        <td class="cell-number">{product.conversion}</td>
                                                        <td class="cell-number">{product.revenue}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </tbody>
                            </table>
                        </section>
                    </Show>
                </main>
                <ToastHost/>
            </div>
        </Show>
    }
}
