//! # tripparse
//!
//! Turns model-generated travel itineraries and spoken trip requests into
//! strongly-typed plans.
//!
//! The crate handles the parts of a travel planner that sit between the user
//! and the language model:
//! - Extracting the JSON payload from chatty model output
//! - Fuzzy field lookup (`activities` vs `items`, `price` vs `cost`, ...)
//! - Category coercion onto a closed set of labels
//! - Coordinate parsing with lat/lon order detection
//! - Deterministic fallback plans when the model output is unusable
//! - Keyword extraction of form fields from a voice transcript
//!
//! ## Quick Start
//!
//! ```rust
//! use tripparse::{normalize_response, Preference};
//!
//! let response = r#"Sure! Here is the plan:
//! {"days": [{"date": "2024-05-01", "activities": [
//!     {"time": "12:00", "name": "烤鸭", "type": "meal", "price": "¥200",
//!      "location": "39.9087,116.3975"}
//! ]}]}
//! Enjoy your trip."#;
//!
//! let plan = normalize_response(response, &Preference::default());
//! let item = &plan.days[0].items[0];
//! assert_eq!(item.category.label(), "餐饮");
//! assert_eq!(item.cost, Some(200.0));
//! assert_eq!(item.location.as_deref(), Some("116.3975,39.9087"));
//! ```
//!
//! ## From transcript to plan
//!
//! ```rust
//! use tripparse::{extract_preferences, synthesize_fallback, Preference};
//!
//! let mut pref = Preference::default();
//! let patch = extract_preferences("2024年5月1日去西安玩三天，预算5000", &pref);
//! pref.apply(patch);
//!
//! assert_eq!(pref.destination, "西安");
//! let plan = synthesize_fallback(&pref);
//! assert_eq!(plan.days.len(), 3);
//! assert_eq!(plan.estimated_budget, 5000.0);
//! ```

pub mod category;
pub mod coordinate;
pub mod error;
pub mod fallback;
pub mod fields;
pub mod normalizer;
pub mod parser;
pub mod prompt;
pub mod transcript;
pub mod types;

pub use category::Category;
pub use coordinate::{format_coordinate, parse_coordinate, Coordinate};
pub use error::{CoordinateError, ParseError, Result};
pub use fallback::{FallbackMode, FallbackSynthesizer};
pub use normalizer::ItineraryNormalizer;
pub use prompt::{build_prompt, chat_messages, completion_content, ChatMessage, ChatRole};
pub use transcript::{Lexicon, TranscriptExtractor};
pub use types::{
    BudgetLine, FallbackReason, ItineraryDay, ItineraryItem, NormalizedPlan, PlanOutcome,
    Preference, PreferencePatch,
};

/// Normalizes a model response with the default configuration.
///
/// Never fails: text that cannot be decoded yields the fallback plan for
/// `preference`.
pub fn normalize_response(text: &str, preference: &Preference) -> NormalizedPlan {
    ItineraryNormalizer::new().normalize(text, preference)
}

/// Builds the default (empty-day) fallback plan for `preference`.
pub fn synthesize_fallback(preference: &Preference) -> NormalizedPlan {
    FallbackSynthesizer::default().synthesize(preference)
}

/// Extracts form fields from a simplified Chinese transcript.
pub fn extract_preferences(transcript: &str, current: &Preference) -> PreferencePatch {
    TranscriptExtractor::new().extract(transcript, current)
}
