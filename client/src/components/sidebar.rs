//! Admin sidebar: role-filtered navigation, identity, logout.
//!
//! The entry list comes from `api::access::nav_items`, the same capability
//! source the page guards consult, so the menu can never show a surface
//! the guard would bounce.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/");
                }
            });
        }
    };

    view! {
        <aside class=move || {
            if ui.get().sidebar_collapsed { "sidebar sidebar--collapsed" } else { "sidebar" }
        }>
            <div class="sidebar__brand">
                <span class="sidebar__brand-name">"Amanah Admin"</span>
                <button
                    class="btn sidebar__collapse"
                    title="Toggle sidebar"
                    on:click=move |_| ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed)
                >
                    {move || if ui.get().sidebar_collapsed { "»" } else { "«" }}
                </button>
            </div>

            <nav class="sidebar__nav">
                {move || {
                    let current = location.pathname.get();
                    api::access::nav_items(auth.get().role())
                        .into_iter()
                        .map(|item| {
                            let active = current.starts_with(item.path);
                            view! {
                                <a
                                    href=item.path
                                    class=if active { "sidebar__link sidebar__link--active" } else { "sidebar__link" }
                                >
                                    {item.title}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </nav>

            <div class="sidebar__footer">
                <span class="sidebar__self">{move || auth.get().display_name()}</span>
                <span class="sidebar__role">
                    {move || auth.get().role().map(api::profile::Role::label).unwrap_or_default()}
                </span>
                <button class="btn sidebar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
