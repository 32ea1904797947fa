//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::dashboard::DashboardPage;
use crate::pages::leads::LeadsPage;
use crate::pages::login::LoginPage;
use crate::pages::logs::LogsPage;
use crate::pages::reports::ReportsPage;
use crate::pages::settings::SettingsPage;
use crate::pages::testimonials::TestimonialsPage;
use crate::pages::users::UsersPage;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, bootstraps the auth session from the
/// display cookie, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);

    // Bootstrap: the userData cookie gives an instant (non-authoritative)
    // profile for chrome rendering; the backend refresh through the
    // pipeline settles the real state. Without a credential cookie there is
    // nothing to refresh.
    #[cfg(feature = "hydrate")]
    {
        use api::store::SessionStore;

        let store = crate::util::cookies::BrowserStore;
        if store.is_established() {
            auth.update(|a| a.user = store.profile());
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_profile().await {
                    Ok(profile) => auth.update(|a| {
                        a.user = Some(profile);
                        a.loading = false;
                    }),
                    Err(e) if e.is_unauthorized() => auth.update(|a| {
                        a.user = None;
                        a.loading = false;
                    }),
                    // Transient failure: keep the cookie profile rather than
                    // bouncing a working session to login.
                    Err(_) => auth.update(|a| a.loading = false),
                }
            });
        } else {
            auth.update(|a| a.loading = false);
        }
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/panel.css"/>
        <Title text="Amanah Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("leads") view=LeadsPage/>
                <Route path=StaticSegment("testimonials") view=TestimonialsPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
                <Route path=StaticSegment("logs") view=LogsPage/>
                <Route path=StaticSegment("reports") view=ReportsPage/>
            </Routes>
        </Router>
    }
}
