//! Shared record shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Sentinel used when a time or date is not known.
pub const UNSPECIFIED: &str = "待定";

/// Title given to items that arrive without one.
pub const UNTITLED: &str = "未命名活动";

/// Currency assumed when a preference does not name one.
pub const DEFAULT_CURRENCY: &str = "CNY";

/// A user's trip request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preference {
    pub destination: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget: f64,
    pub currency: String,
    pub companions: String,
    pub themes: Vec<String>,
    pub notes: Option<String>,
}

impl Default for Preference {
    fn default() -> Self {
        Self {
            destination: String::new(),
            start_date: None,
            end_date: None,
            budget: 0.0,
            currency: DEFAULT_CURRENCY.to_string(),
            companions: String::new(),
            themes: Vec::new(),
            notes: None,
        }
    }
}

impl Preference {
    /// Merges a transcript patch into this preference.
    ///
    /// Present fields overwrite, absent fields are kept. Themes are only
    /// replaced by a non-empty list.
    pub fn apply(&mut self, patch: PreferencePatch) {
        if let Some(destination) = patch.destination {
            self.destination = destination;
        }
        if let Some(start) = patch.start_date {
            self.start_date = Some(start);
        }
        if let Some(end) = patch.end_date {
            self.end_date = Some(end);
        }
        if let Some(budget) = patch.budget {
            self.budget = budget;
        }
        if let Some(companions) = patch.companions {
            self.companions = companions;
        }
        if let Some(themes) = patch.themes.filter(|t| !t.is_empty()) {
            self.themes = themes;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
    }

    /// Start date formatted as `YYYY-MM-DD`, if known.
    pub fn start_date_iso(&self) -> Option<String> {
        self.start_date.map(|d| d.format("%Y-%m-%d").to_string())
    }
}

/// Fields inferred from a single transcript. `None` means "not mentioned".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub themes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One scheduled activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    pub time: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// Normalized `lon,lat` string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ItineraryItem {
    /// An item with the given schedule slot and title and no cost or location.
    pub fn placeholder(
        time: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            time: time.into(),
            title: title.into(),
            description: description.into(),
            category,
            cost: None,
            location: None,
        }
    }
}

/// A calendar day and its activities in schedule order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub date: String,
    pub items: Vec<ItineraryItem>,
}

/// A single categorized expense estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub category: String,
    pub amount: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Why a plan was synthesized instead of parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No generation input was available.
    NoInput,
    /// The response text held no usable JSON object.
    ParseFailure,
}

/// Where a plan's content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "reason")]
pub enum PlanOutcome {
    Parsed,
    Fallback(FallbackReason),
}

/// Result of normalizing (or synthesizing) an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPlan {
    pub days: Vec<ItineraryDay>,
    pub estimated_budget: f64,
    #[serde(rename = "budgetBreakdown")]
    pub budget_lines: Vec<BudgetLine>,
    /// Source text kept verbatim for audit logging.
    pub raw_text: String,
    pub outcome: PlanOutcome,
}

impl NormalizedPlan {
    /// Whether any day holds at least one item.
    ///
    /// A plan without content should be presented to the user as a retry
    /// prompt rather than as a finished itinerary.
    pub fn has_content(&self) -> bool {
        self.days.iter().any(|day| !day.items.is_empty())
    }

    /// Total number of items across all days.
    pub fn item_count(&self) -> usize {
        self.days.iter().map(|day| day.items.len()).sum()
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.outcome, PlanOutcome::Fallback(_))
    }
}
