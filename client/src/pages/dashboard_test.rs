use super::*;

fn lead(id: &str) -> Lead {
    Lead {
        id: id.to_owned(),
        name: "Tan".to_owned(),
        email: "tan@example.com".to_owned(),
        phone: "60123456789".to_owned(),
        loan_amount: 50000.0,
        loan_purpose: "Renovation".to_owned(),
        employment_status: "Employed".to_owned(),
        monthly_income: None,
        status: api::types::LeadStatus::New,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
        updated_at: "2025-01-01T00:00:00Z".to_owned(),
        notes: None,
    }
}

#[test]
fn merge_applies_both_sides_on_success() {
    let outcome = merge_stats(
        Ok(LeadStats { total: 10, ..LeadStats::default() }),
        Ok(TestimonialStats { pending: 3, ..TestimonialStats::default() }),
    );
    assert_eq!(outcome.lead_stats.unwrap().total, 10);
    assert_eq!(outcome.testimonial_stats.unwrap().pending, 3);
    assert!(outcome.failures.is_empty());
}

#[test]
fn one_failing_fetch_does_not_disturb_the_other() {
    // Partial completion: the resolving side lands, the rejecting side
    // surfaces its error, no cross-contamination.
    let outcome = merge_stats(
        Err(ApiFailure::Server),
        Ok(TestimonialStats { pending: 3, ..TestimonialStats::default() }),
    );
    assert!(outcome.lead_stats.is_none());
    assert_eq!(outcome.testimonial_stats.unwrap().pending, 3);
    assert_eq!(outcome.failures, vec![ApiFailure::Server]);
}

#[test]
fn both_failing_fetches_surface_both_errors() {
    let outcome = merge_stats(Err(ApiFailure::Server), Err(ApiFailure::NotFound));
    assert!(outcome.lead_stats.is_none());
    assert!(outcome.testimonial_stats.is_none());
    assert_eq!(outcome.failures, vec![ApiFailure::Server, ApiFailure::NotFound]);
}

#[test]
fn recent_leads_truncates_to_requested_count() {
    let leads: Vec<Lead> = (0..8).map(|i| lead(&format!("l{i}"))).collect();
    let recent = recent_leads(leads, 5);
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0].id, "l0");
}

#[test]
fn recent_leads_keeps_short_lists_intact() {
    let leads = vec![lead("l1"), lead("l2")];
    assert_eq!(recent_leads(leads, 5).len(), 2);
}
