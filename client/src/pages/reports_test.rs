use super::*;

fn slice(label: &str, value: f64) -> ChartSlice {
    ChartSlice { label: label.to_owned(), value, color: None }
}

#[test]
fn metric_rows_format_each_metric() {
    let metrics = ReportMetrics {
        total_leads: 120,
        new_leads: 30,
        conversion_rate: 12.5,
        total_loan_value: 1_250_000.0,
    };
    let rows = metric_rows(&metrics);
    assert_eq!(rows[0], ("Total Leads", "120".to_owned()));
    assert_eq!(rows[1], ("New Leads", "30".to_owned()));
    assert_eq!(rows[2], ("Conversion Rate", "12.5%".to_owned()));
    assert_eq!(rows[3], ("Total Loan Value", "RM 1,250,000".to_owned()));
}

#[test]
fn slice_share_is_a_percentage_of_the_total() {
    let slices = vec![slice("Web", 30.0), slice("Referral", 10.0)];
    assert!((slice_share(&slices[0], &slices) - 75.0).abs() < f64::EPSILON);
    assert!((slice_share(&slices[1], &slices) - 25.0).abs() < f64::EPSILON);
}

#[test]
fn slice_share_of_empty_breakdown_is_zero() {
    let lone = slice("Web", 5.0);
    assert!((slice_share(&lone, &[]) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn slice_share_handles_zero_total() {
    let slices = vec![slice("Web", 0.0), slice("Referral", 0.0)];
    assert!((slice_share(&slices[0], &slices) - 0.0).abs() < f64::EPSILON);
}
