//! Fallback plan synthesis.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tripparse::{
    Category, FallbackMode, FallbackReason, FallbackSynthesizer, PlanOutcome, Preference,
};

fn trip(start: &str, end: Option<&str>) -> Preference {
    let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
    Preference {
        destination: "厦门".into(),
        start_date: Some(parse(start)),
        end_date: end.map(parse),
        budget: 2500.0,
        ..Preference::default()
    }
}

#[test]
fn test_three_days_in_order() {
    let plan = FallbackSynthesizer::default().synthesize(&trip("2024-05-01", Some("2024-05-03")));
    let dates: Vec<&str> = plan.days.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-05-01", "2024-05-02", "2024-05-03"]);
}

#[test]
fn test_span_crosses_month_and_leap_day() {
    let plan = FallbackSynthesizer::default().synthesize(&trip("2024-02-28", Some("2024-03-01")));
    let dates: Vec<&str> = plan.days.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-02-28", "2024-02-29", "2024-03-01"]);
}

#[test]
fn test_end_before_start_is_single_day() {
    let plan = FallbackSynthesizer::default().synthesize(&trip("2024-05-03", Some("2024-05-01")));
    assert_eq!(plan.days.len(), 1);
    assert_eq!(plan.days[0].date, "2024-05-03");
}

#[test]
fn test_missing_end_is_single_day() {
    let plan = FallbackSynthesizer::default().synthesize(&trip("2024-05-03", None));
    assert_eq!(plan.days.len(), 1);
}

#[test]
fn test_no_start_date_gives_empty_plan() {
    let plan = FallbackSynthesizer::default().synthesize(&Preference::default());
    assert!(plan.days.is_empty());
    assert!(!plan.has_content());
    assert_eq!(plan.outcome, PlanOutcome::Fallback(FallbackReason::NoInput));
}

#[test]
fn test_span_is_capped() {
    let synthesizer = FallbackSynthesizer::default().with_max_days(10);
    let plan = synthesizer.synthesize(&trip("2024-01-01", Some("2124-01-01")));
    assert_eq!(plan.days.len(), 10);
    assert_eq!(plan.days[9].date, "2024-01-10");
}

#[test]
fn test_default_spans_every_requested_day() {
    let plan = tripparse::synthesize_fallback(&trip("2024-01-01", Some("2025-12-31")));
    assert_eq!(plan.days.len(), 731);
    assert_eq!(plan.days[0].date, "2024-01-01");
    assert_eq!(plan.days[730].date, "2025-12-31");
}

#[test]
fn test_templated_days() {
    let plan = FallbackSynthesizer::new(FallbackMode::Templated)
        .synthesize(&trip("2024-05-01", Some("2024-05-02")));

    for day in &plan.days {
        let slots: Vec<(&str, Category)> = day
            .items
            .iter()
            .map(|item| (item.time.as_str(), item.category))
            .collect();
        assert_eq!(
            slots,
            vec![
                ("09:00", Category::Sight),
                ("12:00", Category::Food),
                ("14:00", Category::Other),
            ]
        );
    }
    assert!(plan.days[0].items[0].description.contains("厦门"));
    assert!(plan.budget_lines.is_empty());
    assert_eq!(plan.estimated_budget, 2500.0);
}

#[test]
fn test_mode_is_serde_configurable() {
    let mode: FallbackMode = serde_json::from_str("\"templated\"").unwrap();
    assert_eq!(mode, FallbackMode::Templated);
    assert_eq!(serde_json::to_string(&FallbackMode::Empty).unwrap(), "\"empty\"");
}

#[test]
fn test_plan_wire_shape() {
    let plan = FallbackSynthesizer::default().synthesize(&trip("2024-05-01", None));
    let value = serde_json::to_value(&plan).unwrap();
    assert_eq!(value["estimatedBudget"], serde_json::json!(2500.0));
    assert_eq!(value["budgetBreakdown"], serde_json::json!([]));
    assert_eq!(value["days"][0]["date"], serde_json::json!("2024-05-01"));
}
