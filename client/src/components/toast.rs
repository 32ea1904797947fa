//! Toast notifications for page-level error and success surfacing.

use leptos::prelude::*;

use api::error::ApiFailure;

use crate::state::ui::{ToastKind, UiState};

/// How long a toast lingers before auto-dismissal.
#[cfg(feature = "hydrate")]
const TOAST_DISMISS_MS: u32 = 4000;

/// Renders the toast stack; click dismisses.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-host">
            {move || {
                ui.get()
                    .toasts()
                    .iter()
                    .cloned()
                    .map(|toast| {
                        let id = toast.id;
                        let class = match toast.kind {
                            ToastKind::Info => "toast toast--info",
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        view! {
                            <div class=class on:click=move |_| ui.update(|u| u.dismiss_toast(id))>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Surface an API failure with its fixed class message.
pub fn notify_failure(ui: RwSignal<UiState>, failure: &ApiFailure) {
    let id = ui.try_update(|u| u.push_failure(failure)).unwrap_or_default();
    schedule_dismiss(ui, id);
}

/// Surface a success confirmation.
pub fn notify_success(ui: RwSignal<UiState>, message: impl Into<String>) {
    let id = ui.try_update(|u| u.push_toast(ToastKind::Success, message)).unwrap_or_default();
    schedule_dismiss(ui, id);
}

/// Surface a page-local error message (form validation and the like).
pub fn notify_error(ui: RwSignal<UiState>, message: impl Into<String>) {
    let id = ui.try_update(|u| u.push_toast(ToastKind::Error, message)).unwrap_or_default();
    schedule_dismiss(ui, id);
}

#[allow(unused_variables)]
fn schedule_dismiss(ui: RwSignal<UiState>, id: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
        let _ = ui.try_update(|u| u.dismiss_toast(id));
    });
}
