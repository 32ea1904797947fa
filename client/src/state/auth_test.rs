use super::*;

#[test]
fn default_state_is_loading_and_anonymous() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert_eq!(state.role(), None);
}

#[test]
fn role_comes_from_the_profile() {
    let state = AuthState {
        user: Some(UserProfile {
            id: "u1".to_owned(),
            email: "ops@example.com".to_owned(),
            name: None,
            role: Some(Role::SuperAdmin),
        }),
        loading: false,
    };
    assert_eq!(state.role(), Some(Role::SuperAdmin));
}

#[test]
fn display_name_falls_back_to_email() {
    let state = AuthState {
        user: Some(UserProfile {
            id: "u1".to_owned(),
            email: "ops@example.com".to_owned(),
            name: None,
            role: None,
        }),
        loading: false,
    };
    assert_eq!(state.display_name(), "ops@example.com");
    assert_eq!(AuthState::default().display_name(), "");
}
