//! Closed itinerary category set with total, lenient coercion.
//!
//! Models emit categories in whatever language or casing they like
//! ("景点", "Sightseeing", "FOOD"). [`Category::coerce`] maps any input onto
//! the five canonical variants and never fails: unknown input becomes
//! [`Category::Other`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use unicode_normalization::UnicodeNormalization;

/// Category of an itinerary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Flights, trains, transfers.
    Transport,
    /// Attractions and sightseeing.
    Sight,
    /// Meals and snacks.
    Food,
    /// Hotels and other accommodation.
    Lodging,
    /// Anything else.
    #[default]
    Other,
}

/// Match strings per variant, compared after normalization.
///
/// Order matters for the substring pass: the first variant whose label is
/// contained in the input wins.
const ALIASES: &[(Category, &[&str])] = &[
    (
        Category::Transport,
        &["交通", "transport", "transportation", "transit", "traffic", "出行"],
    ),
    (
        Category::Sight,
        &["景点", "sight", "sightseeing", "attraction", "activity", "游览"],
    ),
    (
        Category::Food,
        &["餐饮", "food", "dining", "meal", "restaurant", "美食"],
    ),
    (
        Category::Lodging,
        &["住宿", "lodging", "accommodation", "hotel", "stay", "酒店"],
    ),
    (Category::Other, &["其他", "other", "misc", "others"]),
];

impl Category {
    /// All variants in canonical order.
    pub const ALL: [Category; 5] = [
        Category::Transport,
        Category::Sight,
        Category::Food,
        Category::Lodging,
        Category::Other,
    ];

    /// Canonical label used on the wire and in storage.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Transport => "交通",
            Category::Sight => "景点",
            Category::Food => "餐饮",
            Category::Lodging => "住宿",
            Category::Other => "其他",
        }
    }

    /// Maps arbitrary text onto a category.
    ///
    /// Strategies, in order:
    /// 1. Exact match against a label or alias (after NFKC + lowercase)
    /// 2. Canonical Chinese label contained in the input ("景点游览" → Sight)
    /// 3. [`Category::Other`]
    ///
    /// # Examples
    ///
    /// ```
    /// use tripparse::Category;
    ///
    /// assert_eq!(Category::coerce("景点"), Category::Sight);
    /// assert_eq!(Category::coerce(" Hotel "), Category::Lodging);
    /// assert_eq!(Category::coerce("spaceflight"), Category::Other);
    /// ```
    pub fn coerce(input: &str) -> Category {
        let normalized = normalize(input);
        if normalized.is_empty() {
            return Category::Other;
        }

        if let Some(category) = ALIASES
            .iter()
            .find(|(_, aliases)| aliases.iter().any(|alias| *alias == normalized))
            .map(|(category, _)| *category)
        {
            return category;
        }

        Category::ALL
            .into_iter()
            .find(|category| normalized.contains(category.label()))
            .unwrap_or(Category::Other)
    }

    /// Coerces an optional JSON string; anything that is not a string is `Other`.
    pub fn coerce_value(value: Option<&serde_json::Value>) -> Category {
        value
            .and_then(serde_json::Value::as_str)
            .map(Category::coerce)
            .unwrap_or_default()
    }
}

fn normalize(input: &str) -> String {
    input.trim().nfkc().collect::<String>().to_lowercase()
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Category::coerce(&raw))
    }
}
