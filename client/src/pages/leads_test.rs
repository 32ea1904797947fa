use super::*;

fn lead(id: &str, status: LeadStatus) -> Lead {
    Lead {
        id: id.to_owned(),
        name: "Tan".to_owned(),
        email: "tan@example.com".to_owned(),
        phone: "60123456789".to_owned(),
        loan_amount: 50000.0,
        loan_purpose: "Renovation".to_owned(),
        employment_status: "Employed".to_owned(),
        monthly_income: None,
        status,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
        updated_at: "2025-01-01T00:00:00Z".to_owned(),
        notes: None,
    }
}

#[test]
fn no_filter_shows_every_lead() {
    let leads = vec![lead("a", LeadStatus::New), lead("b", LeadStatus::Converted)];
    assert_eq!(filter_by_status(&leads, None).len(), 2);
}

#[test]
fn filter_keeps_only_matching_status() {
    let leads = vec![
        lead("a", LeadStatus::New),
        lead("b", LeadStatus::Converted),
        lead("c", LeadStatus::New),
    ];
    let visible = filter_by_status(&leads, Some(LeadStatus::New));
    let ids: Vec<_> = visible.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["a", "c"]);
}

#[test]
fn every_status_has_a_badge_class() {
    for status in LeadStatus::ALL {
        assert!(status_badge_class(*status).starts_with("badge "), "{status:?}");
    }
}

#[test]
fn replace_lead_swaps_matching_id_in_place() {
    let mut leads = vec![lead("a", LeadStatus::New), lead("b", LeadStatus::New)];
    replace_lead(&mut leads, lead("b", LeadStatus::Qualified));
    assert_eq!(leads[1].status, LeadStatus::Qualified);
    assert_eq!(leads[0].status, LeadStatus::New);
}

#[test]
fn replace_lead_ignores_unknown_id() {
    let mut leads = vec![lead("a", LeadStatus::New)];
    replace_lead(&mut leads, lead("zzz", LeadStatus::Rejected));
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].status, LeadStatus::New);
}
