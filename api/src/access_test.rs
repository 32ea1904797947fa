use super::*;

#[test]
fn admin_and_super_admin_carry_admin_capability() {
    assert!(is_admin(Some(Role::SuperAdmin)));
    assert!(is_admin(Some(Role::Admin)));
}

#[test]
fn viewer_and_missing_role_do_not() {
    assert!(!is_admin(Some(Role::Viewer)));
    assert!(!is_admin(None));
}

#[test]
fn admin_sees_full_catalog() {
    let items = nav_items(Some(Role::Admin));
    assert_eq!(items.len(), NAV_ITEMS.len());
}

#[test]
fn viewer_sees_only_unrestricted_entries() {
    let items = nav_items(Some(Role::Viewer));
    let titles: Vec<_> = items.iter().map(|i| i.title).collect();
    assert_eq!(titles, ["Dashboard", "Leads", "Testimonials", "Reports"]);
}

#[test]
fn missing_role_matches_viewer_visibility() {
    assert_eq!(nav_items(None), nav_items(Some(Role::Viewer)));
}

#[test]
fn can_view_gates_admin_surfaces() {
    assert!(can_view(Some(Role::Admin), "/users"));
    assert!(can_view(Some(Role::SuperAdmin), "/logs"));
    assert!(!can_view(Some(Role::Viewer), "/users"));
    assert!(!can_view(None, "/settings"));
}

#[test]
fn can_view_gates_nested_admin_paths() {
    assert!(!can_view(Some(Role::Viewer), "/users/42/edit"));
    assert!(can_view(Some(Role::Admin), "/users/42/edit"));
}

#[test]
fn can_view_allows_unrestricted_and_uncataloged_paths() {
    assert!(can_view(Some(Role::Viewer), "/leads"));
    assert!(can_view(None, "/dashboard"));
    assert!(can_view(None, "/somewhere-else"));
}

#[test]
fn sidebar_and_guard_agree_on_every_catalog_entry() {
    // Single capability source: an entry is rendered iff its page is viewable.
    for role in [None, Some(Role::Viewer), Some(Role::Admin), Some(Role::SuperAdmin)] {
        for item in NAV_ITEMS {
            let rendered = nav_items(role).contains(&item);
            assert_eq!(rendered, can_view(role, item.path), "role {role:?} item {}", item.title);
        }
    }
}
