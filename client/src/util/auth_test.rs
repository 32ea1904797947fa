use super::*;
use api::profile::{Role, UserProfile};

fn user_with_role(role: Option<Role>) -> UserProfile {
    UserProfile { id: "u1".to_owned(), email: "a@b.com".to_owned(), name: None, role }
}

#[test]
fn redirects_unauth_when_loaded_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn holds_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_forbidden(&state, "/users"));
}

#[test]
fn no_unauth_redirect_when_user_exists() {
    let state = AuthState { user: Some(user_with_role(Some(Role::Viewer))), loading: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn viewer_is_bounced_from_admin_surfaces() {
    let state = AuthState { user: Some(user_with_role(Some(Role::Viewer))), loading: false };
    assert!(should_redirect_forbidden(&state, "/users"));
    assert!(should_redirect_forbidden(&state, "/settings"));
    assert!(should_redirect_forbidden(&state, "/logs"));
    assert!(!should_redirect_forbidden(&state, "/leads"));
}

#[test]
fn admins_pass_role_gates() {
    for role in [Role::Admin, Role::SuperAdmin] {
        let state = AuthState { user: Some(user_with_role(Some(role))), loading: false };
        assert!(!should_redirect_forbidden(&state, "/users"), "{role:?}");
    }
}

#[test]
fn missing_user_is_not_a_forbidden_case() {
    // The unauth redirect owns that path; forbidden only applies to a
    // present user with an insufficient role.
    let state = AuthState { user: None, loading: false };
    assert!(!should_redirect_forbidden(&state, "/users"));
}
