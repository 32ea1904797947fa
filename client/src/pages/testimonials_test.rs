use super::*;
use api::types::TestimonialStatus;

fn testimonial(id: &str) -> Testimonial {
    Testimonial {
        id: id.to_owned(),
        name: "Lim".to_owned(),
        location: None,
        rating: 5,
        comment: "Fast approval".to_owned(),
        loan_type: None,
        loan_amount: None,
        status: TestimonialStatus::Pending,
        is_featured: false,
        reviewed_by: None,
        reviewed_at: None,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
        updated_at: "2025-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn stars_render_filled_and_empty() {
    assert_eq!(stars(0), "☆☆☆☆☆");
    assert_eq!(stars(3), "★★★☆☆");
    assert_eq!(stars(5), "★★★★★");
}

#[test]
fn stars_clamp_out_of_range_ratings() {
    assert_eq!(stars(9), "★★★★★");
}

#[test]
fn remove_testimonial_drops_only_the_named_id() {
    let mut list = vec![testimonial("a"), testimonial("b"), testimonial("c")];
    remove_testimonial(&mut list, "b");
    let ids: Vec<_> = list.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["a", "c"]);
}

#[test]
fn remove_testimonial_ignores_unknown_id() {
    let mut list = vec![testimonial("a")];
    remove_testimonial(&mut list, "zzz");
    assert_eq!(list.len(), 1);
}

#[test]
fn default_tab_is_pending() {
    assert_eq!(Tab::default(), Tab::Pending);
}
