use super::*;

#[test]
fn login_response_user_is_optional() {
    let resp: LoginResponse = serde_json::from_str(r#"{"access_token":"tok"}"#).unwrap();
    assert_eq!(resp.access_token, "tok");
    assert!(resp.user.is_none());

    let resp: LoginResponse =
        serde_json::from_str(r#"{"access_token":"tok","user":{"id":"u1","email":"a@b.com"}}"#).unwrap();
    assert_eq!(resp.user.unwrap().id, "u1");
}

#[test]
fn lead_uses_backend_casing() {
    let raw = r#"{
        "id":"l1","name":"Tan","email":"tan@example.com","phone":"60123456789",
        "loanAmount":50000.0,"loanPurpose":"Renovation","employmentStatus":"Employed",
        "status":"NEW","createdAt":"2025-01-01T00:00:00Z","updatedAt":"2025-01-01T00:00:00Z"
    }"#;
    let lead: Lead = serde_json::from_str(raw).unwrap();
    assert_eq!(lead.status, LeadStatus::New);
    assert!((lead.loan_amount - 50000.0).abs() < f64::EPSILON);
    assert_eq!(lead.monthly_income, None);

    let out = serde_json::to_string(&lead).unwrap();
    assert!(out.contains("loanAmount"));
    assert!(out.contains("\"NEW\""));
    assert!(!out.contains("monthlyIncome"));
}

#[test]
fn lead_status_order_matches_funnel() {
    let names: Vec<_> = LeadStatus::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(names, ["NEW", "CONTACTED", "QUALIFIED", "CONVERTED", "REJECTED"]);
}

#[test]
fn testimonial_status_and_featured_flag_parse() {
    let raw = r#"{
        "id":"t1","name":"Lim","rating":5,"comment":"Fast approval",
        "status":"PENDING","isFeatured":false,
        "createdAt":"2025-01-01T00:00:00Z","updatedAt":"2025-01-01T00:00:00Z"
    }"#;
    let t: Testimonial = serde_json::from_str(raw).unwrap();
    assert_eq!(t.status, TestimonialStatus::Pending);
    assert!(!t.is_featured);
    assert_eq!(t.reviewed_by, None);
}

#[test]
fn audit_log_status_uses_pascal_case_wire_values() {
    let entry: AuditLogEntry = serde_json::from_str(
        r#"{
            "id":"a1","timestamp":"2025-01-01T00:00:00Z","user":"Aina","userId":"u1",
            "action":"LOGIN","resource":"session","ipAddress":"10.0.0.1","status":"Warning"
        }"#,
    )
    .unwrap();
    assert_eq!(entry.status, AuditLogStatus::Warning);
}

#[test]
fn admin_user_patch_serializes_only_set_fields() {
    let patch = AdminUserPatch { status: Some(AdminUserStatus::Inactive), ..AdminUserPatch::default() };
    assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"status":"INACTIVE"}"#);
}

#[test]
fn page_count_rounds_up() {
    let page = Page::<Lead> { data: vec![], total: 31, page: 1, limit: 15 };
    assert_eq!(page.page_count(), 3);
}

#[test]
fn page_count_is_at_least_one() {
    let empty = Page::<Lead> { data: vec![], total: 0, page: 1, limit: 15 };
    assert_eq!(empty.page_count(), 1);
    let degenerate = Page::<Lead> { data: vec![], total: 10, page: 1, limit: 0 };
    assert_eq!(degenerate.page_count(), 1);
}
