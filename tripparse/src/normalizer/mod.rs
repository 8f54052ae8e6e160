//! Model response normalization.
//!
//! Turns the raw text of an itinerary-generation response into a
//! [`NormalizedPlan`]. The pipeline never fails: anything that cannot be
//! decoded becomes the fallback plan for the same preference.

mod aliases;
mod budget;
mod items;

use log::{debug, warn};
use serde_json::{Map, Value};

use crate::{
    coordinate::Coordinate,
    error::Result,
    fallback::FallbackSynthesizer,
    parser::{strategies::ParsingStrategy, PayloadParser},
    types::{FallbackReason, NormalizedPlan, PlanOutcome, Preference},
};

/// Normalizes model responses into itineraries.
///
/// Holds configuration only; a single instance can be shared across threads
/// and reused for any number of calls.
///
/// # Examples
///
/// ```
/// use tripparse::{Category, ItineraryNormalizer, Preference};
///
/// let response = r#"Here is your plan:
/// {"days": [{"date": "2024-05-01", "items": [
///     {"time": "09:00", "title": "故宫", "category": "景点", "cost": 60}
/// ]}], "estimatedBudget": 3000}"#;
///
/// let plan = ItineraryNormalizer::new().normalize(response, &Preference::default());
/// assert_eq!(plan.days[0].items[0].category, Category::Sight);
/// assert_eq!(plan.estimated_budget, 3000.0);
/// ```
#[derive(Debug, Default)]
pub struct ItineraryNormalizer {
    parser: PayloadParser,
    fallback: FallbackSynthesizer,
}

impl ItineraryNormalizer {
    /// Strict brace-slice parsing and the empty fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also attempts light JSON repair before falling back.
    pub fn with_repair(mut self) -> Self {
        self.parser = PayloadParser::with_repair();
        self
    }

    /// Replaces the payload strategies.
    pub fn with_strategies(mut self, strategies: Vec<Box<dyn ParsingStrategy>>) -> Self {
        self.parser = PayloadParser::with_strategies(strategies);
        self
    }

    /// Sets the synthesizer used when parsing fails.
    pub fn with_fallback(mut self, fallback: FallbackSynthesizer) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn fallback(&self) -> &FallbackSynthesizer {
        &self.fallback
    }

    /// Normalizes `text` for `preference`.
    pub fn normalize(&self, text: &str, preference: &Preference) -> NormalizedPlan {
        self.normalize_with_seed(text, preference, None)
    }

    /// Normalizes `text`, starting every day's location carry-over at `seed`.
    pub fn normalize_with_seed(
        &self,
        text: &str,
        preference: &Preference,
        seed: Option<Coordinate>,
    ) -> NormalizedPlan {
        if text.trim().is_empty() {
            return self.fallback_plan(text, preference, FallbackReason::NoInput);
        }

        match self.parser.parse(text) {
            Ok(payload) => normalize_payload(&payload, text, preference, seed),
            Err(error) => {
                warn!("falling back due to parse failure: {}", error);
                self.fallback_plan(text, preference, FallbackReason::ParseFailure)
            }
        }
    }

    /// Decodes the payload without normalizing it, for diagnostics.
    pub fn try_parse(&self, text: &str) -> Result<Map<String, Value>> {
        self.parser.parse(text)
    }

    fn fallback_plan(
        &self,
        text: &str,
        preference: &Preference,
        reason: FallbackReason,
    ) -> NormalizedPlan {
        NormalizedPlan {
            raw_text: text.to_string(),
            ..self.fallback.synthesize_for(preference, reason)
        }
    }
}

fn normalize_payload(
    payload: &Map<String, Value>,
    text: &str,
    preference: &Preference,
    seed: Option<Coordinate>,
) -> NormalizedPlan {
    let days = items::normalize_days(payload, preference, seed);
    let budget_lines = budget::budget_lines(payload, preference);
    let estimated_budget = budget::estimated_budget(payload, preference);

    debug!(
        "normalized {} day(s), {} item(s), {} budget line(s)",
        days.len(),
        days.iter().map(|d| d.items.len()).sum::<usize>(),
        budget_lines.len()
    );

    NormalizedPlan {
        days,
        estimated_budget,
        budget_lines,
        raw_text: text.to_string(),
        outcome: PlanOutcome::Parsed,
    }
}
