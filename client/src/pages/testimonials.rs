//! Testimonial review: pending/approved tabs, approve/reject, featuring.

#[cfg(test)]
#[path = "testimonials_test.rs"]
mod testimonials_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use api::types::Testimonial;

use crate::components::dialog::ConfirmDialog;
use crate::components::sidebar::Sidebar;
use crate::components::toast::{ToastHost, notify_failure, notify_success};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Which list is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Tab {
    #[default]
    Pending,
    Approved,
}

/// Star strip for a 0-5 rating; out-of-range ratings clamp.
pub(crate) fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Drop a testimonial after review moves it out of the visible list.
pub(crate) fn remove_testimonial(list: &mut Vec<Testimonial>, id: &str) {
    list.retain(|t| t.id != id);
}

#[component]
pub fn TestimonialsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    crate::util::auth::install_guard(auth, "/testimonials", navigate);

    let tab = RwSignal::new(Tab::Pending);
    let pending = RwSignal::new(Vec::<Testimonial>::new());
    let approved = RwSignal::new(Vec::<Testimonial>::new());
    let loading = RwSignal::new(true);
    let delete_target = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let scope = crate::util::cancel::CancelScope::new();
        let load_scope = scope.clone();
        leptos::task::spawn_local(async move {
            let (pending_result, approved_result) = futures::join!(
                crate::net::api::fetch_pending_testimonials(),
                crate::net::api::fetch_approved_testimonials(),
            );
            if load_scope.is_cancelled() {
                return;
            }
            match pending_result {
                Ok(list) => pending.set(list),
                Err(e) => notify_failure(ui, &e),
            }
            match approved_result {
                Ok(list) => approved.set(list),
                Err(e) => notify_failure(ui, &e),
            }
            loading.set(false);
        });
        on_cleanup(move || scope.cancel());
    }

    let reviewer = move || auth.get_untracked().display_name();

    let on_approve = move |id: String| {
        let reviewed_by = reviewer();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::approve_testimonial(&id, &reviewed_by).await {
                Ok(updated) => {
                    pending.update(|list| remove_testimonial(list, &id));
                    approved.update(|list| list.insert(0, updated));
                    notify_success(ui, "Testimonial approved");
                }
                Err(e) => notify_failure(ui, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, reviewed_by);
        }
    };

    let on_reject = move |id: String| {
        let reviewed_by = reviewer();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::reject_testimonial(&id, &reviewed_by).await {
                Ok(_) => {
                    pending.update(|list| remove_testimonial(list, &id));
                    notify_success(ui, "Testimonial rejected");
                }
                Err(e) => notify_failure(ui, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, reviewed_by);
        }
    };

    let on_toggle_featured = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::toggle_testimonial_featured(&id).await {
                Ok(updated) => approved.update(|list| {
                    if let Some(slot) = list.iter_mut().find(|t| t.id == updated.id) {
                        *slot = updated;
                    }
                }),
                Err(e) => notify_failure(ui, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
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
            match crate::net::api::delete_testimonial(&id).await {
                Ok(()) => {
                    pending.update(|list| remove_testimonial(list, &id));
                    approved.update(|list| remove_testimonial(list, &id));
                    notify_success(ui, "Testimonial deleted");
                }
                Err(e) => notify_failure(ui, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let visible = move || match tab.get() {
        Tab::Pending => pending.get(),
        Tab::Approved => approved.get(),
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
                        <h1>"Testimonials"</h1>
                        <div class="tab-bar">
                            <button
                                class=move || if tab.get() == Tab::Pending { "tab tab--active" } else { "tab" }
                                on:click=move |_| tab.set(Tab::Pending)
                            >
                                "Pending"
                            </button>
                            <button
                                class=move || if tab.get() == Tab::Approved { "tab tab--active" } else { "tab" }
                                on:click=move |_| tab.set(Tab::Approved)
                            >
                                "Approved"
                            </button>
                        </div>
                    </header>

                    <Show when=move || !loading.get() fallback=|| view! { <p>"Loading testimonials..."</p> }>
                        <div class="testimonial-list">
                            {move || {
                                let current_tab = tab.get();
                                visible()
                                    .into_iter()
                                    .map(|t| {
                                        let approve_id = t.id.clone();
                                        let reject_id = t.id.clone();
                                        let feature_id = t.id.clone();
                                        let delete_id = t.id.clone();
                                        view! {
                                            <article class="testimonial-card">
                                                <header class="testimonial-card__header">
                                                    <span class="testimonial-card__name">{t.name}</span>
                                                    <span class="testimonial-card__stars">{stars(t.rating)}</span>
                                                </header>
                                                <p class="testimonial-card__comment">{t.comment}</p>
                                                <footer class="testimonial-card__actions">
                                                    <Show when=move || current_tab == Tab::Pending>
                                                        <button class="btn btn--primary" on:click={
                                                            let id = approve_id.clone();
                                                            move |_| on_approve(id.clone())
                                                        }>
                                                            "Approve"
                                                        </button>
                                                        <button class="btn" on:click={
                                                            let id = reject_id.clone();
                                                            move |_| on_reject(id.clone())
                                                        }>
                                                            "Reject"
                                                        </button>
                                                    </Show>
                                                    <Show when=move || current_tab == Tab::Approved>
                                                        <button class="btn" on:click={
                                                            let id = feature_id.clone();
                                                            move |_| on_toggle_featured(id.clone())
                                                        }>
                                                            {if t.is_featured { "Unfeature" } else { "Feature" }}
                                                        </button>
                                                    </Show>
                                                    <button class="btn btn--danger" on:click={
                                                        let id = delete_id.clone();
                                                        move |_| delete_target.set(Some(id.clone()))
                                                    }>
                                                        "Delete"
                                                    </button>
                                                </footer>
                                            </article>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>

                    <Show when=move || delete_target.get().is_some()>
                        <ConfirmDialog
                            title="Delete Testimonial"
                            message="This will permanently remove the testimonial.".to_owned()
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
