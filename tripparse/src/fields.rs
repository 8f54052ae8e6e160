//! Alias-tolerant field lookup and scalar coercion over `serde_json` values.
//!
//! The upstream generator does not reliably honor the requested schema, so
//! every concept is looked up through an ordered list of candidate keys.
//! Adding an alias means adding a string to a table, never a new branch.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use unicode_normalization::UnicodeNormalization;

/// Ordered candidate keys for one concept.
///
/// Lookup tries every alias with an exact key match first, then repeats the
/// pass with a relaxed comparison (NFKC, case-insensitive, `_`, `-` and
/// spaces ignored), so `estimated_budget` still finds `estimatedBudget`.
/// `null` values are treated as absent.
///
/// # Examples
///
/// ```
/// use tripparse::fields::FieldAliases;
/// use serde_json::json;
///
/// const COST: FieldAliases = FieldAliases::new(&["cost", "price"]);
///
/// let value = json!({"Price": 120});
/// let obj = value.as_object().unwrap();
/// assert_eq!(COST.find(obj), Some(&json!(120)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldAliases {
    keys: &'static [&'static str],
}

impl FieldAliases {
    pub const fn new(keys: &'static [&'static str]) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &'static [&'static str] {
        self.keys
    }

    /// Finds the first non-null value under any alias.
    pub fn find<'a>(&self, obj: &'a Map<String, Value>) -> Option<&'a Value> {
        self.find_where(obj, |_| true)
    }

    /// Finds the first alias whose value satisfies `accept`.
    ///
    /// Used where a present-but-wrong-typed field must not shadow a later
    /// alias, e.g. `"items": "none"` followed by a real `activities` array.
    pub fn find_where<'a, F>(&self, obj: &'a Map<String, Value>, accept: F) -> Option<&'a Value>
    where
        F: Fn(&Value) -> bool,
    {
        let usable = |v: &Value| !v.is_null() && accept(v);

        // Pass 1: exact keys in priority order
        if let Some(value) = self
            .keys
            .iter()
            .filter_map(|key| obj.get(*key))
            .find(|v| usable(v))
        {
            return Some(value);
        }

        // Pass 2: relaxed keys in priority order
        self.keys.iter().find_map(|key| {
            let wanted = relax_key(key);
            obj.iter()
                .find(|(k, v)| relax_key(k) == wanted && usable(v))
                .map(|(_, v)| v)
        })
    }

    /// First array value under any alias.
    pub fn find_array<'a>(&self, obj: &'a Map<String, Value>) -> Option<&'a Vec<Value>> {
        self.find_where(obj, Value::is_array)
            .and_then(Value::as_array)
    }

    /// First value under any alias that coerces to a trimmed, non-empty string.
    pub fn find_text(&self, obj: &Map<String, Value>) -> Option<String> {
        self.find_where(obj, |v| coerce_text(v).is_some())
            .and_then(coerce_text)
    }

    /// First value under any alias that coerces to a finite number.
    pub fn find_number(&self, obj: &Map<String, Value>) -> Option<f64> {
        self.find_where(obj, |v| coerce_number(v).is_some())
            .and_then(coerce_number)
    }
}

/// Lowercased NFKC form with `_`, `-` and whitespace removed.
pub(crate) fn relax_key(key: &str) -> String {
    key.nfkc()
        .filter(|c| !matches!(c, '_' | '-') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Strings are trimmed, numbers are rendered; empty strings and other types
/// are absent.
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numbers and numeric strings become finite `f64`s; everything else is absent.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_loose_number(s),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Like [`coerce_number`] but negative values are absent as well.
pub fn coerce_non_negative(value: &Value) -> Option<f64> {
    coerce_number(value).filter(|n| *n >= 0.0)
}

/// Number with optional sign, thousands separators and decimal part.
static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[-+]?(?:\d+(?:,\d{3})*(?:\.\d+)?|\.\d+)").expect("Invalid number regex pattern")
});

/// Unicode currency symbols.
static CURRENCY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Sc}").expect("Invalid currency regex pattern"));

/// Parses strings such as `"1,200"`, `"¥300"` or `"80 元"`.
///
/// Exactly one number must be present: `"100-200"` is a range, not a cost.
pub(crate) fn parse_loose_number(s: &str) -> Option<f64> {
    let normalized: String = s.nfkc().collect();
    let without_currency = CURRENCY_REGEX.replace_all(&normalized, "");
    let mut matches = NUMBER_REGEX.find_iter(&without_currency);
    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    first.as_str().replace(',', "").parse::<f64>().ok()
}

/// Name of a JSON value's type, for diagnostics.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
