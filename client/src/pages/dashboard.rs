//! Dashboard: lead-funnel and testimonial summaries plus recent leads.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The two stat fetches run
//! concurrently and land independently: one failing must not disturb the
//! other's applied state, so the merge is kept in a pure helper.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use api::error::ApiFailure;
use api::types::{Lead, LeadStats, TestimonialStats};

use crate::components::sidebar::Sidebar;
use crate::components::stat_card::StatCard;
use crate::components::toast::ToastHost;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::format::format_currency;

/// How many recent leads the dashboard lists.
const RECENT_LEADS: usize = 5;

/// Independent landing of the concurrent stat fan-out: each side applies
/// on success; failures are collected for notification without touching
/// the other side.
#[derive(Debug, Default)]
pub(crate) struct StatsOutcome {
    pub lead_stats: Option<LeadStats>,
    pub testimonial_stats: Option<TestimonialStats>,
    pub failures: Vec<ApiFailure>,
}

pub(crate) fn merge_stats(
    leads: Result<LeadStats, ApiFailure>,
    testimonials: Result<TestimonialStats, ApiFailure>,
) -> StatsOutcome {
    let mut outcome = StatsOutcome::default();
    match leads {
        Ok(stats) => outcome.lead_stats = Some(stats),
        Err(e) => outcome.failures.push(e),
    }
    match testimonials {
        Ok(stats) => outcome.testimonial_stats = Some(stats),
        Err(e) => outcome.failures.push(e),
    }
    outcome
}

/// First `n` leads for the recent list; the backend returns newest first.
pub(crate) fn recent_leads(mut leads: Vec<Lead>, n: usize) -> Vec<Lead> {
    leads.truncate(n);
    leads
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    crate::util::auth::install_guard(auth, "/dashboard", navigate);

    let lead_stats = RwSignal::new(None::<LeadStats>);
    let testimonial_stats = RwSignal::new(None::<TestimonialStats>);
    let recent = RwSignal::new(Vec::<Lead>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let scope = crate::util::cancel::CancelScope::new();
        let load_scope = scope.clone();
        leptos::task::spawn_local(async move {
            let (lead_result, testimonial_result, leads_result) = futures::join!(
                crate::net::api::fetch_lead_stats(),
                crate::net::api::fetch_testimonial_stats(),
                crate::net::api::fetch_leads(),
            );
            if load_scope.is_cancelled() {
                return;
            }
            let outcome = merge_stats(lead_result, testimonial_result);
            if let Some(stats) = outcome.lead_stats {
                lead_stats.set(Some(stats));
            }
            if let Some(stats) = outcome.testimonial_stats {
                testimonial_stats.set(Some(stats));
            }
            for failure in &outcome.failures {
                crate::components::toast::notify_failure(ui, failure);
            }
            match leads_result {
                Ok(list) => recent.set(recent_leads(list, RECENT_LEADS)),
                Err(e) => crate::components::toast::notify_failure(ui, &e),
            }
            loading.set(false);
        });
        on_cleanup(move || scope.cancel());
    }

    let stat = move |pick: fn(&LeadStats) -> u64| {
        Signal::derive(move || {
            lead_stats.get().map_or_else(|| "–".to_owned(), |s| pick(&s).to_string())
        })
    };
    let pending_testimonials = Signal::derive(move || {
        testimonial_stats.get().map_or_else(|| "–".to_owned(), |s| s.pending.to_string())
    });

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="admin-shell">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="admin-shell">
                <Sidebar/>
                <main class="admin-main">
                    <header class="admin-main__header">
                        <h1>"Dashboard"</h1>
                    </header>

                    <div class="stat-grid">
                        <StatCard label="Total Leads" value={stat(|s| s.total)}/>
                        <StatCard label="New" value={stat(|s| s.new)} accent="info"/>
                        <StatCard label="Qualified" value={stat(|s| s.qualified)}/>
                        <StatCard label="Converted" value={stat(|s| s.converted)} accent="success"/>
                        <StatCard label="Pending Testimonials" value=pending_testimonials accent="warn"/>
                    </div>

                    <section class="panel">
                        <h2>"Recent Leads"</h2>
                        <Show when=move || !loading.get() fallback=|| view! { <p>"Loading leads..."</p> }>
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Amount"</th>
                                        <th>"Purpose"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        recent
                                            .get()
                                            .into_iter()
                                            .map(|lead| {
                                                view! {
                                                    <tr>
                                                        <td>{lead.name}</td>
                                                        <td>{format_currency(lead.loan_amount)}</td>
                                                        <td>{lead.loan_purpose}</td>
                                                        <td>{lead.status.as_str()}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </tbody>
                            </table>
                        </Show>
                    </section>
                </main>
                <ToastHost/>
            </div>
        </Show>
    }
}
