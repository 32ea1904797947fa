//! Leads management: list, status transitions, delete.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use api::types::{Lead, LeadStatus};

use crate::components::dialog::ConfirmDialog;
use crate::components::sidebar::Sidebar;
use crate::components::toast::{ToastHost, notify_failure, notify_success};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::format::format_currency;

/// Leads visible under the current status filter.
pub(crate) fn filter_by_status(leads: &[Lead], filter: Option<LeadStatus>) -> Vec<Lead> {
    leads
        .iter()
        .filter(|lead| filter.is_none_or(|status| lead.status == status))
        .cloned()
        .collect()
}

/// Badge style per funnel stage.
pub(crate) fn status_badge_class(status: LeadStatus) -> &'static str {
    match status {
        LeadStatus::New => "badge badge--info",
        LeadStatus::Contacted => "badge badge--neutral",
        LeadStatus::Qualified => "badge badge--accent",
        LeadStatus::Converted => "badge badge--success",
        LeadStatus::Rejected => "badge badge--danger",
    }
}

/// Replace a lead in place after a status update lands.
pub(crate) fn replace_lead(leads: &mut Vec<Lead>, updated: Lead) {
    if let Some(slot) = leads.iter_mut().find(|l| l.id == updated.id) {
        *slot = updated;
    }
}

#[component]
pub fn LeadsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    crate::util::auth::install_guard(auth, "/leads", navigate);

    let leads = RwSignal::new(Vec::<Lead>::new());
    let loading = RwSignal::new(true);
    let filter = RwSignal::new(None::<LeadStatus>);
    let delete_target = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let scope = crate::util::cancel::CancelScope::new();
        let load_scope = scope.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_leads().await;
            if load_scope.is_cancelled() {
                return;
            }
            match result {
                Ok(list) => leads.set(list),
                Err(e) => notify_failure(ui, &e),
            }
            loading.set(false);
        });
        on_cleanup(move || scope.cancel());
    }

    let on_status_change = move |id: String, status: LeadStatus| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_lead_status(&id, status).await {
                Ok(updated) => leads.update(|list| replace_lead(list, updated)),
                Err(e) => notify_failure(ui, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, status);
        }
    };

    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_lead(&id).await {
                Ok(()) => {
                    leads.update(|list| list.retain(|l| l.id != id));
                    notify_success(ui, "Lead deleted");
                }
                Err(e) => notify_failure(ui, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let visible = move || filter_by_status(&leads.get(), filter.get());

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=|| view! { <div class="admin-shell"><p>"Loading..."</p></div> }
        >
            <div class="admin-shell">
                <Sidebar/>
                <main class="admin-main">
                    <header class="admin-main__header">
                        <h1>"Leads"</h1>
                        <select
                            class="filter-select"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                filter.set(LeadStatus::ALL.iter().copied().find(|s| s.as_str() == value));
                            }
                        >
                            <option value="">"All statuses"</option>
                            {LeadStatus::ALL
                                .iter()
                                .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </header>

                    <Show when=move || !loading.get() fallback=|| view! { <p>"Loading leads..."</p> }>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Contact"</th>
                                    <th>"Amount"</th>
                                    <th>"Purpose"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    visible()
                                        .into_iter()
                                        .map(|lead| {
                                            let id = lead.id.clone();
                                            let delete_id = lead.id.clone();
                                            let current = lead.status;
                                            view! {
                                                <tr>
                                                    <td>
                                                        <div class="cell-primary">{lead.name}</div>
                                                        <div class="cell-secondary">{lead.email}</div>
                                                    </td>
                                                    <td>{lead.phone}</td>
                                                    <td>{format_currency(lead.loan_amount)}</td>
                                                    <td>{lead.loan_purpose}</td>
                                                    <td>
                                                        <span class=status_badge_class(current)>{current.as_str()}</span>
                                                        <select
                                                            class="status-select"
                                                            on:change=move |ev| {
                                                                let value = event_target_value(&ev);
                                                                if let Some(status) = LeadStatus::ALL.iter().copied().find(|s| s.as_str() == value) {
                                                                    on_status_change(id.clone(), status);
                                                                }
                                                            }
                                                        >
                                                            {LeadStatus::ALL
                                                                .iter()
                                                                .map(|s| {
                                                                    view! {
                                                                        <option value=s.as_str() selected={*s == current}>
                                                                            {s.as_str()}
                                                                        </option>
                                                                    }
                                                                })
                                                                .collect::<Vec<_>>()}
                                                        </select>
                                                    </td>
                                                    <td>
                                                        <button
                                                            class="btn btn--danger"
                                                            on:click=move |_| delete_target.set(Some(delete_id.clone()))
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </Show>

                    <Show when=move || delete_target.get().is_some()>
                        <ConfirmDialog
                            title="Delete Lead"
                            message="This will permanently remove the lead and its notes.".to_owned()
                            confirm_label="Delete"
                            on_confirm=on_delete_confirm
                            on_cancel=on_delete_cancel
                        />
                    </Show>
                </main>
                <ToastHost/>
            </div>
        </Show>
    }
}
