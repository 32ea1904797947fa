use super::*;

fn admin_user(id: &str, status: AdminUserStatus) -> AdminUser {
    AdminUser {
        id: id.to_owned(),
        name: "Aina".to_owned(),
        email: "aina@example.com".to_owned(),
        role: Role::Admin,
        status,
        last_login_at: None,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn validate_new_user_accepts_complete_form() {
    let user = validate_new_user("  Aina ", " aina@example.com ", "s3cretpass", "ADMIN").unwrap();
    assert_eq!(user.name, "Aina");
    assert_eq!(user.email, "aina@example.com");
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.status, AdminUserStatus::Active);
}

#[test]
fn validate_new_user_requires_all_fields() {
    assert_eq!(
        validate_new_user("", "a@b.com", "s3cretpass", "ADMIN"),
        Err("Name, email, and password are required.")
    );
    assert_eq!(
        validate_new_user("Aina", "a@b.com", "", "ADMIN"),
        Err("Name, email, and password are required.")
    );
}

#[test]
fn validate_new_user_rejects_weak_password_and_bad_email() {
    assert_eq!(validate_new_user("Aina", "a@b.com", "short", "ADMIN"), Err("Password must be at least 8 characters."));
    assert_eq!(validate_new_user("Aina", "not-an-email", "s3cretpass", "ADMIN"), Err("Enter a valid email address."));
}

#[test]
fn validate_new_user_rejects_unknown_role() {
    assert_eq!(validate_new_user("Aina", "a@b.com", "s3cretpass", "WIZARD"), Err("Choose a role."));
}

#[test]
fn toggled_flips_status_both_ways() {
    assert_eq!(toggled(AdminUserStatus::Active), AdminUserStatus::Inactive);
    assert_eq!(toggled(AdminUserStatus::Inactive), AdminUserStatus::Active);
}

#[test]
fn replace_user_swaps_matching_row() {
    let mut users = vec![admin_user("a", AdminUserStatus::Active), admin_user("b", AdminUserStatus::Active)];
    replace_user(&mut users, admin_user("b", AdminUserStatus::Inactive));
    assert_eq!(users[1].status, AdminUserStatus::Inactive);
    assert_eq!(users[0].status, AdminUserStatus::Active);
}
