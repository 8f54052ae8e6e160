//! Deterministic placeholder plans.
//!
//! Used when no model output is available and whenever the normalizer cannot
//! decode a response. The synthesizer never invents budget lines: the
//! breakdown is model-sourced only.

use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    category::Category,
    types::{FallbackReason, ItineraryDay, ItineraryItem, NormalizedPlan, PlanOutcome, Preference},
};

/// What a synthesized day contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackMode {
    /// Days carry no items; the user fills them in manually.
    #[default]
    Empty,
    /// Days carry a morning / midday / afternoon placeholder schedule.
    Templated,
}

/// Builds plans from a [`Preference`] alone.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tripparse::{FallbackSynthesizer, Preference};
///
/// let pref = Preference {
///     start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
///     end_date: NaiveDate::from_ymd_opt(2024, 5, 3),
///     ..Preference::default()
/// };
/// let plan = FallbackSynthesizer::default().synthesize(&pref);
/// assert_eq!(plan.days.len(), 3);
/// assert!(plan.budget_lines.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackSynthesizer {
    mode: FallbackMode,
    max_days: Option<usize>,
}

impl Default for FallbackSynthesizer {
    fn default() -> Self {
        Self::new(FallbackMode::default())
    }
}

impl FallbackSynthesizer {
    pub const fn new(mode: FallbackMode) -> Self {
        Self {
            mode,
            max_days: None,
        }
    }

    /// Caps the number of days a single plan may span. Uncapped by default.
    pub const fn with_max_days(mut self, max_days: usize) -> Self {
        self.max_days = Some(max_days);
        self
    }

    pub const fn mode(&self) -> FallbackMode {
        self.mode
    }

    /// Synthesizes a plan because no generation input exists.
    pub fn synthesize(&self, preference: &Preference) -> NormalizedPlan {
        self.synthesize_for(preference, FallbackReason::NoInput)
    }

    /// Synthesizes a plan, recording why the fallback was taken.
    pub fn synthesize_for(&self, preference: &Preference, reason: FallbackReason) -> NormalizedPlan {
        let days: Vec<ItineraryDay> = self
            .dates(preference)
            .into_iter()
            .map(|date| ItineraryDay {
                date: date.format("%Y-%m-%d").to_string(),
                items: self.items_for(preference),
            })
            .collect();

        debug!(
            "synthesized {:?} fallback plan with {} day(s) ({:?})",
            self.mode,
            days.len(),
            reason
        );

        NormalizedPlan {
            days,
            estimated_budget: preference.budget,
            budget_lines: Vec::new(),
            raw_text: String::new(),
            outcome: PlanOutcome::Fallback(reason),
        }
    }

    /// Calendar dates from start through `max(end, start)`.
    fn dates(&self, preference: &Preference) -> Vec<NaiveDate> {
        let Some(start) = preference.start_date else {
            return Vec::new();
        };
        let end = preference.end_date.filter(|end| *end > start).unwrap_or(start);

        let mut dates = Vec::new();
        let mut current = Some(start);
        while let Some(date) = current.filter(|d| *d <= end) {
            if let Some(max_days) = self.max_days.filter(|max| dates.len() == *max) {
                warn!(
                    "fallback span {} to {} exceeds {} days, truncating",
                    start, end, max_days
                );
                break;
            }
            dates.push(date);
            current = date.succ_opt();
        }
        dates
    }

    fn items_for(&self, preference: &Preference) -> Vec<ItineraryItem> {
        match self.mode {
            FallbackMode::Empty => Vec::new(),
            FallbackMode::Templated => templated_items(preference.destination.trim()),
        }
    }
}

fn templated_items(destination: &str) -> Vec<ItineraryItem> {
    let place = if destination.is_empty() {
        "当地"
    } else {
        destination
    };
    vec![
        ItineraryItem::placeholder(
            "09:00",
            "上午游览",
            format!("游览{place}代表性景点"),
            Category::Sight,
        ),
        ItineraryItem::placeholder(
            "12:00",
            "午餐",
            format!("品尝{place}特色美食"),
            Category::Food,
        ),
        ItineraryItem::placeholder(
            "14:00",
            "下午自由活动",
            "自由安排休息或购物",
            Category::Other,
        ),
    ]
}
