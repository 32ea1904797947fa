//! Site settings (admin-only surface): company details, loan bounds,
//! test-email dispatch.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use api::types::SiteSettings;

use crate::components::sidebar::Sidebar;
use crate::components::toast::{ToastHost, notify_error, notify_failure, notify_success};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// String-valued form state mirroring the settings inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct SettingsForm {
    pub site_name: String,
    pub support_email: String,
    pub company_name: String,
    pub company_address: String,
    pub company_phone: String,
    pub min_loan_amount: String,
    pub max_loan_amount: String,
    pub interest_rate_min: String,
    pub interest_rate_max: String,
}

impl SettingsForm {
    pub(crate) fn from_settings(s: &SiteSettings) -> Self {
        Self {
            site_name: s.site_name.clone(),
            support_email: s.support_email.clone(),
            company_name: s.company_name.clone(),
            company_address: s.company_address.clone(),
            company_phone: s.company_phone.clone(),
            min_loan_amount: s.min_loan_amount.to_string(),
            max_loan_amount: s.max_loan_amount.to_string(),
            interest_rate_min: s.interest_rate_min.to_string(),
            interest_rate_max: s.interest_rate_max.to_string(),
        }
    }
}

/// Parse and validate the form back into settings.
pub(crate) fn parse_settings_form(form: &SettingsForm) -> Result<SiteSettings, &'static str> {
    if form.site_name.trim().is_empty() || form.support_email.trim().is_empty() {
        return Err("Site name and support email are required.");
    }
    if !form.support_email.contains('@') {
        return Err("Enter a valid support email.");
    }
    let parse = |raw: &str, message| raw.trim().parse::<f64>().map_err(|_| message);
    let min_loan_amount = parse(&form.min_loan_amount, "Loan amounts must be numbers.")?;
    let max_loan_amount = parse(&form.max_loan_amount, "Loan amounts must be numbers.")?;
    let interest_rate_min = parse(&form.interest_rate_min, "Interest rates must be numbers.")?;
    let interest_rate_max = parse(&form.interest_rate_max, "Interest rates must be numbers.")?;
    if min_loan_amount > max_loan_amount {
        return Err("Minimum loan amount exceeds the maximum.");
    }
    if interest_rate_min > interest_rate_max {
        return Err("Minimum interest rate exceeds the maximum.");
    }
    Ok(SiteSettings {
        site_name: form.site_name.trim().to_owned(),
        support_email: form.support_email.trim().to_owned(),
        company_name: form.company_name.trim().to_owned(),
        company_address: form.company_address.trim().to_owned(),
        company_phone: form.company_phone.trim().to_owned(),
        min_loan_amount,
        max_loan_amount,
        interest_rate_min,
        interest_rate_max,
    })
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    crate::util::auth::install_guard(auth, "/settings", navigate);

    let form = RwSignal::new(SettingsForm::default());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let test_email = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let scope = crate::util::cancel::CancelScope::new();
        let load_scope = scope.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_settings().await;
            if load_scope.is_cancelled() {
                return;
            }
            match result {
                Ok(settings) => form.set(SettingsForm::from_settings(&settings)),
                Err(e) => notify_failure(ui, &e),
            }
            loading.set(false);
        });
        on_cleanup(move || scope.cancel());
    }

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let settings = match parse_settings_form(&form.get()) {
            Ok(settings) => settings,
            Err(message) => {
                notify_error(ui, message);
                return;
            }
        };
        saving.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_settings(&settings).await {
                Ok(saved) => {
                    form.set(SettingsForm::from_settings(&saved));
                    notify_success(ui, "Settings saved");
                }
                Err(e) => notify_failure(ui, &e),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = settings;
        }
    };

    let on_test_email = move |_| {
        let email = test_email.get().trim().to_owned();
        if email.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_test_email(&email).await {
                Ok(()) => notify_success(ui, "Test email sent"),
                Err(e) => notify_failure(ui, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email;
        }
    };

    let text_field = move |label: &'static str, get: fn(&SettingsForm) -> String, set: fn(&mut SettingsForm, String)| {
        view! {
            <label class="form-field">
                {label}
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || get(&form.get())
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
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
                        <h1>"Settings"</h1>
                    </header>

                    <Show when=move || !loading.get() fallback=|| view! { <p>"Loading settings..."</p> }>
                        <form class="settings-form" on:submit=on_save>
                            <section class="panel">
                                <h2>"Site"</h2>
                                {text_field("Site Name", |f| f.site_name.clone(), |f, v| f.site_name = v)}
                                {text_field("Support Email", |f| f.support_email.clone(), |f, v| f.support_email = v)}
                            </section>

                            <section class="panel">
                                <h2>"Company"</h2>
                                {text_field("Company Name", |f| f.company_name.clone(), |f, v| f.company_name = v)}
                                {text_field("Address", |f| f.company_address.clone(), |f, v| f.company_address = v)}
                                {text_field("Phone", |f| f.company_phone.clone(), |f, v| f.company_phone = v)}
                            </section>

                            <section class="panel">
                                <h2>"Loan Products"</h2>
                                {text_field("Minimum Loan (RM)", |f| f.min_loan_amount.clone(), |f, v| f.min_loan_amount = v)}
                                {text_field("Maximum Loan (RM)", |f| f.max_loan_amount.clone(), |f, v| f.max_loan_amount = v)}
                                {text_field("Min Interest Rate (%)", |f| f.interest_rate_min.clone(), |f, v| f.interest_rate_min = v)}
                                {text_field("Max Interest Rate (%)", |f| f.interest_rate_max.clone(), |f, v| f.interest_rate_max = v)}
                            </section>

                            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save Settings" }}
                            </button>
                        </form>

                        <section class="panel">
                            <h2>"Email Delivery"</h2>
                            <div class="test-email-row">
                                <input
                                    class="form-input"
                                    type="email"
                                    placeholder="you@example.com"
                                    prop:value=move || test_email.get()
                                    on:input=move |ev| test_email.set(event_target_value(&ev))
                                />
                                <button class="btn" on:click=on_test_email>
                                    "Send Test Email"
                                </button>
                            </div>
                        </section>
                    </Show>
                </main>
                <ToastHost/>
            </div>
        </Show>
    }
}
