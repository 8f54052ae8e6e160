//! Transcript extraction through the public API, including merging the
//! resulting patch into a preference and feeding it to the planner.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tripparse::{
    build_prompt, extract_preferences, FallbackSynthesizer, Lexicon, Preference, PreferencePatch,
    TranscriptExtractor,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_family_trip_to_beijing() {
    let transcript = "想去北京玩，预算2万，和家人一起，喜欢美食和历史";
    let patch = extract_preferences(transcript, &Preference::default());

    assert_eq!(patch.destination.as_deref(), Some("北京"));
    assert_eq!(patch.budget, Some(20_000.0));
    assert_eq!(patch.companions.as_deref(), Some("家庭出行"));
    let themes = patch.themes.clone().unwrap();
    assert!(themes.contains(&"美食".to_string()));
    assert!(themes.contains(&"历史".to_string()));
    assert_eq!(patch.notes.as_deref(), Some(transcript));
}

#[test]
fn test_duration_extends_existing_start() {
    let current = Preference {
        start_date: Some(date(2024, 6, 1)),
        ..Preference::default()
    };
    let patch = extract_preferences("玩5天", &current);
    assert_eq!(patch.end_date, Some(date(2024, 6, 5)));
}

#[test]
fn test_one_day_trip_ends_on_start() {
    let patch = extract_preferences("2024年7月20日去苏州玩一天", &Preference::default());
    assert_eq!(patch.start_date, Some(date(2024, 7, 20)));
    assert_eq!(patch.end_date, Some(date(2024, 7, 20)));
}

#[test]
fn test_slash_dates() {
    let patch = extract_preferences("2024/8/1 到 2024/8/4 去青岛", &Preference::default());
    assert_eq!(patch.start_date, Some(date(2024, 8, 1)));
    assert_eq!(patch.end_date, Some(date(2024, 8, 4)));
    assert_eq!(patch.destination.as_deref(), Some("青岛"));
}

#[test]
fn test_nothing_recognized() {
    let patch = extract_preferences("嗯……让我想想", &Preference::default());
    assert_eq!(
        patch,
        PreferencePatch {
            notes: Some("嗯……让我想想".into()),
            ..PreferencePatch::default()
        }
    );
}

#[test]
fn test_patch_applied_to_form_state() {
    let mut pref = Preference {
        destination: "上海".into(),
        budget: 3000.0,
        themes: vec!["购物".into()],
        ..Preference::default()
    };

    let patch = extract_preferences("和朋友一起，预算5000元", &pref);
    pref.apply(patch);

    assert_eq!(pref.destination, "上海");
    assert_eq!(pref.budget, 5000.0);
    assert_eq!(pref.companions, "朋友同行");
    assert_eq!(pref.themes, vec!["购物".to_string()]);
    assert_eq!(pref.notes.as_deref(), Some("和朋友一起，预算5000元"));
}

#[test]
fn test_transcript_to_fallback_plan() {
    let mut pref = Preference::default();
    pref.apply(extract_preferences(
        "2024年10月1日去成都玩4天，预算8000，带孩子",
        &pref,
    ));

    let plan = FallbackSynthesizer::default().synthesize(&pref);
    let dates: Vec<&str> = plan.days.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(
        dates,
        vec!["2024-10-01", "2024-10-02", "2024-10-03", "2024-10-04"]
    );
    assert_eq!(plan.estimated_budget, 8000.0);

    let prompt = build_prompt(&pref);
    assert!(prompt.contains("目的地：成都"));
    assert!(prompt.contains("同行人：带孩子"));
}

#[test]
fn test_english_lexicon_swaps_without_logic_changes() {
    let extractor = TranscriptExtractor::with_lexicon(Lexicon::en());
    assert_eq!(extractor.lexicon().locale(), "en");

    let patch = extractor.extract(
        "Planning a trip to Lisbon from 2025-09-01 to 2025-09-05 with friends. Budget: $2,500",
        &Preference::default(),
    );
    assert_eq!(patch.destination.as_deref(), Some("Lisbon"));
    assert_eq!(patch.start_date, Some(date(2025, 9, 1)));
    assert_eq!(patch.end_date, Some(date(2025, 9, 5)));
    assert_eq!(patch.companions.as_deref(), Some("friends"));
    assert_eq!(patch.budget, Some(2_500.0));
}

#[test]
fn test_extractor_is_reusable() {
    let extractor = TranscriptExtractor::new();
    let first = extractor.extract("去厦门", &Preference::default());
    let second = extractor.extract("去厦门", &Preference::default());
    assert_eq!(first, second);
}

#[test]
fn test_clauses_after_budget_and_destination() {
    let patch = extract_preferences("2024年5月1日去上海5天，预算3000，第一天去外滩", &Preference::default());
    assert_eq!(patch.destination.as_deref(), Some("上海"));
    assert_eq!(patch.budget, Some(3000.0));
    assert_eq!(patch.start_date, Some(date(2024, 5, 1)));
    assert_eq!(patch.end_date, Some(date(2024, 5, 5)));
}
