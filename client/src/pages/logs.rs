//! Audit log viewer (admin-only surface): filterable, paginated table.

#[cfg(test)]
#[path = "logs_test.rs"]
mod logs_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use api::types::{AuditLogEntry, AuditLogStatus};

use crate::components::sidebar::Sidebar;
use crate::components::toast::{ToastHost, notify_failure};
use crate::net::api::AuditLogQuery;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

const PAGE_SIZE: usize = 15;

pub(crate) fn status_label(status: AuditLogStatus) -> &'static str {
    match status {
        AuditLogStatus::Success => "Success",
        AuditLogStatus::Failed => "Failed",
        AuditLogStatus::Warning => "Warning",
    }
}

/// Free-text search over user, action, resource, and IP, combined with the
/// exact action/status filters.
pub(crate) fn matches_filters(
    entry: &AuditLogEntry,
    search: &str,
    action: Option<&str>,
    status: Option<AuditLogStatus>,
) -> bool {
    let needle = search.trim().to_lowercase();
    let matches_search = needle.is_empty()
        || entry.user.to_lowercase().contains(&needle)
        || entry.action.to_lowercase().contains(&needle)
        || entry.resource.to_lowercase().contains(&needle)
        || entry.ip_address.contains(needle.as_str());
    let matches_action = action.is_none_or(|a| entry.action == a);
    let matches_status = status.is_none_or(|s| entry.status == s);
    matches_search && matches_action && matches_status
}

/// Distinct actions present in the loaded window, for the filter menu.
pub(crate) fn unique_actions(entries: &[AuditLogEntry]) -> Vec<String> {
    let mut actions: Vec<String> = Vec::new();
    for entry in entries {
        if !actions.contains(&entry.action) {
            actions.push(entry.action.clone());
        }
    }
    actions
}

/// The slice of entries for a 1-based page.
pub(crate) fn page_slice(entries: &[AuditLogEntry], page: usize, per_page: usize) -> Vec<AuditLogEntry> {
    let start = page.saturating_sub(1) * per_page;
    entries.iter().skip(start).take(per_page).cloned().collect()
}

#[component]
pub fn LogsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    crate::util::auth::install_guard(auth, "/logs", navigate);

    let entries = RwSignal::new(Vec::<AuditLogEntry>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let action_filter = RwSignal::new(None::<String>);
    let status_filter = RwSignal::new(None::<AuditLogStatus>);
    let page = RwSignal::new(1_usize);

    #[cfg(feature = "hydrate")]
    {
        let scope = crate::util::cancel::CancelScope::new();
        let load_scope = scope.clone();
        leptos::task::spawn_local(async move {
            let query = AuditLogQuery { page: 1, limit: 200, ..AuditLogQuery::default() };
            let result = crate::net::api::fetch_audit_logs(&query).await;
            if load_scope.is_cancelled() {
                return;
            }
            match result {
                Ok(page_data) => entries.set(page_data.data),
                Err(e) => notify_failure(ui, &e),
            }
            loading.set(false);
        });
        on_cleanup(move || scope.cancel());
    }

    let filtered = move || {
        let list = entries.get();
        let needle = search.get();
        let action = action_filter.get();
        let status = status_filter.get();
        list.iter()
            .filter(|e| matches_filters(e, &needle, action.as_deref(), status))
            .cloned()
            .collect::<Vec<_>>()
    };

    let visible = move || page_slice(&filtered(), page.get(), PAGE_SIZE);
    let total_pages = move || filtered().len().div_ceil(PAGE_SIZE).max(1);

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=|| view! { <div class="admin-shell"><p>"Loading..."</p></div> }
        >
            <div class="admin-shell">
                <Sidebar/>
                <main class="admin-main">
                    <header class="admin-main__header">
                        <h1>"Audit Logs"</h1>
                        <input
                            class="search-input"
                            type="text"
                            placeholder="Search user, action, resource, IP"
                            prop:value=move || search.get()
                            on:input=move |ev| {
                                search.set(event_target_value(&ev));
                                page.set(1);
                            }
                        />
                        <select
                            class="filter-select"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                action_filter.set(if value.is_empty() { None } else { Some(value) });
                                page.set(1);
                            }
                        >
                            <option value="">"All actions"</option>
                            {move || {
                                unique_actions(&entries.get())
                                    .into_iter()
                                    .map(|a| view! { <option value=a.clone()>{a.clone()}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                        <select
                            class="filter-select"
                            on:change=move |ev| {
                                status_filter.set(match event_target_value(&ev).as_str() {
                                    "Success" => Some(AuditLogStatus::Success),
                                    "Failed" => Some(AuditLogStatus::Failed),
                                    "Warning" => Some(AuditLogStatus::Warning),
                                    _ => None,
                                });
                                page.set(1);
                            }
                        >
                            <option value="">"All statuses"</option>
                            <option value="Success">"Success"</option>
                            <option value="Failed">"Failed"</option>
                            <option value="Warning">"Warning"</option>
                        </select>
                    </header>

                    <Show when=move || !loading.get() fallback=|| view! { <p>"Loading logs..."</p> }>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Time"</th>
                                    <th>"User"</th>
                                    <th>"Action"</th>
                                    <th>"Resource"</th>
                                    <th>"IP"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    visible()
                                        .into_iter()
                                        .map(|entry| {
                                            view! {
                                                <tr>
                                                    <td class="cell-secondary">{entry.timestamp}</td>
                                                    <td>{entry.user}</td>
                                                    <td>{entry.action}</td>
                                                    <td>
                                                        <div class="cell-primary">{entry.resource}</div>
                                                        <div class="cell-secondary">
                                                            {entry.resource_id.unwrap_or_default()}
                                                        </div>
                                                    </td>
                                                    <td class="cell-mono">{entry.ip_address}</td>
                                                    <td>{status_label(entry.status)}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>

                        <div class="pager">
                            <button
                                class="btn"
                                disabled=move || page.get() <= 1
                                on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                            >
                                "Previous"
                            </button>
                            <span class="pager__status">
                                {move || format!("Page {} of {}", page.get(), total_pages())}
                            </span>
                            <button
                                class="btn"
                                disabled=move || page.get() >= total_pages()
                                on:click=move |_| page.update(|p| *p += 1)
                            >
                                "Next"
                            </button>
                        </div>
                    </Show>
                </main>
                <ToastHost/>
            </div>
        </Show>
    }
}
