//! Admin user management (admin-only surface).

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use api::profile::Role;
use api::types::{AdminUser, AdminUserPatch, AdminUserStatus, NewAdminUser};

use crate::components::dialog::ConfirmDialog;
use crate::components::sidebar::Sidebar;
use crate::components::toast::{ToastHost, notify_failure, notify_success};
use crate::net::api::AdminUserQuery;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

const PAGE_SIZE: u32 = 15;

/// Validate the create-user form before it leaves the page.
pub(crate) fn validate_new_user(
    name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<NewAdminUser, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Name, email, and password are required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    let Some(role) = Role::parse(role) else {
        return Err("Choose a role.");
    };
    Ok(NewAdminUser {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        role,
        status: AdminUserStatus::Active,
    })
}

/// Activate/deactivate flip.
pub(crate) fn toggled(status: AdminUserStatus) -> AdminUserStatus {
    match status {
        AdminUserStatus::Active => AdminUserStatus::Inactive,
        AdminUserStatus::Inactive => AdminUserStatus::Active,
    }
}

/// Replace a user row after an update lands.
pub(crate) fn replace_user(users: &mut Vec<AdminUser>, updated: AdminUser) {
    if let Some(slot) = users.iter_mut().find(|u| u.id == updated.id) {
        *slot = updated;
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    crate::util::auth::install_guard(auth, "/users", navigate);

    let users = RwSignal::new(Vec::<AdminUser>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<String>);

    let scope = crate::util::cancel::CancelScope::new();
    {
        let scope = scope.clone();
        on_cleanup(move || scope.cancel());
    }

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            let query = AdminUserQuery {
                page: 1,
                limit: PAGE_SIZE,
                search: search.get_untracked(),
                ..AdminUserQuery::default()
            };
            let load_scope = scope.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_admin_users(&query).await;
                if load_scope.is_cancelled() {
                    return;
                }
                match result {
                    Ok(page) => users.set(page.data),
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

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        load();
    };

    let on_role_change = move |id: String, role: Role| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let patch = AdminUserPatch { role: Some(role), ..AdminUserPatch::default() };
            match crate::net::api::update_admin_user(&id, &patch).await {
                Ok(updated) => users.update(|list| replace_user(list, updated)),
                Err(e) => notify_failure(ui, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, role);
        }
    };

    let on_toggle_status = move |id: String, current: AdminUserStatus| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_admin_user_status(&id, toggled(current)).await {
                Ok(updated) => users.update(|list| replace_user(list, updated)),
                Err(e) => notify_failure(ui, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, current);
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
            match crate::net::api::delete_admin_user(&id).await {
                Ok(()) => {
                    users.update(|list| list.retain(|u| u.id != id));
                    notify_success(ui, "User deleted");
                }
                Err(e) => notify_failure(ui, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=|| view! { <div class="admin-shell"><p>"Loading..."</p></div> }
        >
            <div class="admin-shell">
                <Sidebar/>
                <main class="admin-main">
                    <header class="admin-main__header">
                        <h1>"Admin Users"</h1>
                        <form class="search-form" on:submit=on_search>
                            <input
                                class="search-input"
                                type="text"
                                placeholder="Search name or email"
                                prop:value=move || search.get()
                                on:input=move |ev| search.set(event_target_value(&ev))
                            />
                            <button class="btn" type="submit">"Search"</button>
                        </form>
                        <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                            "+ New User"
                        </button>
                    </header>

                    <Show when=move || !loading.get() fallback=|| view! { <p>"Loading users..."</p> }>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Role"</th>
                                    <th>"Status"</th>
                                    <th>"Last Login"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    users
                                        .get()
                                        .into_iter()
                                        .map(|user| {
                                            let role_id = user.id.clone();
                                            let status_id = user.id.clone();
                                            let delete_id = user.id.clone();
                                            let current_status = user.status;
                                            view! {
                                                <tr>
                                                    <td>
                                                        <div class="cell-primary">{user.name}</div>
                                                        <div class="cell-secondary">{user.email}</div>
                                                    </td>
                                                    <td>
                                                        <select
                                                            class="status-select"
                                                            on:change=move |ev| {
                                                                if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                                                    on_role_change(role_id.clone(), role);
                                                                }
                                                            }
                                                        >
                                                            {[Role::SuperAdmin, Role::Admin, Role::Viewer]
                                                                .iter()
                                                                .map(|r| {
                                                                    view! {
                                                                        <option value=r.as_str() selected={*r == user.role}>
                                                                            {r.label()}
                                                                        </option>
                                                                    }
                                                                })
                                                                .collect::<Vec<_>>()}
                                                        </select>
                                                    </td>
                                                    <td>
                                                        <button
                                                            class="btn"
                                                            on:click=move |_| on_toggle_status(status_id.clone(), current_status)
                                                        >
                                                            {match current_status {
                                                                AdminUserStatus::Active => "Deactivate",
                                                                AdminUserStatus::Inactive => "Activate",
                                                            }}
                                                        </button>
                                                    </td>
                                                    <td>{user.last_login_at.unwrap_or_else(|| "–".to_owned())}</td>
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

                    <Show when=move || show_create.get()>
                        <CreateUserDialog
                            on_close=Callback::new(move |()| show_create.set(false))
                            on_created=Callback::new(move |user: AdminUser| {
                                users.update(|list| list.insert(0, user));
                            })
                        />
                    </Show>

                    <Show when=move || delete_target.get().is_some()>
                        <ConfirmDialog
                            title="Delete User"
                            message="This will permanently remove the admin account.".to_owned()
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

/// Modal form for creating an admin account.
#[component]
fn CreateUserDialog(on_close: Callback<()>, on_created: Callback<AdminUser>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Viewer.as_str().to_owned());
    let error = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let new_user = match validate_new_user(&name.get(), &email.get(), &password.get(), &role.get()) {
            Ok(user) => user,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_admin_user(&new_user).await {
                Ok(created) => {
                    on_created.run(created);
                    notify_success(ui, "User created");
                    on_close.run(());
                }
                Err(e) => notify_failure(ui, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = new_user;
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create User"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Password"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Role"
                    <select
                        class="dialog__input"
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        {[Role::Viewer, Role::Admin, Role::SuperAdmin]
                            .iter()
                            .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
