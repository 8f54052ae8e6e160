//! Day and item normalization.
//!
//! Location resolution is a left-to-right fold over a day's items with the
//! last resolved coordinate as the accumulator. Each day starts again from
//! the caller's seed, so nothing leaks between days or between calls.

use serde_json::{Map, Value};

use super::aliases::{
    CATEGORY, COST, DAYS, DAY_DATE, DAY_LABEL, DESCRIPTION, ITEMS, LATITUDE, LOCATION, LONGITUDE,
    TIME, TITLE,
};
use crate::{
    category::Category,
    coordinate::{format_coordinate, parse_coordinate, Coordinate},
    fields::{coerce_non_negative, coerce_number},
    types::{ItineraryDay, ItineraryItem, Preference, UNSPECIFIED, UNTITLED},
};

/// One entry of an item array.
#[derive(Debug, Clone, Copy)]
enum RawItem<'a> {
    Object(&'a Map<String, Value>),
    /// A bare string; used as the item's title.
    Title(&'a str),
}

impl<'a> RawItem<'a> {
    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(RawItem::Object(map)),
            Value::String(s) if !s.trim().is_empty() => Some(RawItem::Title(s.trim())),
            _ => None,
        }
    }
}

/// Normalizes the payload's day list. Non-object entries are skipped.
pub(crate) fn normalize_days(
    payload: &Map<String, Value>,
    preference: &Preference,
    seed: Option<Coordinate>,
) -> Vec<ItineraryDay> {
    DAYS.find_array(payload)
        .map(|days| {
            days.iter()
                .filter_map(Value::as_object)
                .map(|day| normalize_day(day, preference, seed))
                .collect()
        })
        .unwrap_or_default()
}

fn normalize_day(
    day: &Map<String, Value>,
    preference: &Preference,
    seed: Option<Coordinate>,
) -> ItineraryDay {
    let date = DAY_DATE
        .find_text(day)
        .or_else(|| DAY_LABEL.find_text(day))
        .or_else(|| preference.start_date_iso())
        .unwrap_or_else(|| UNSPECIFIED.to_string());

    let items = match ITEMS.find_array(day) {
        Some(raw) => fold_items(raw.iter().filter_map(RawItem::from_value), seed),
        // The day object itself is the only activity.
        None => fold_items(std::iter::once(RawItem::Object(day)), seed),
    };

    ItineraryDay { date, items }
}

fn fold_items<'a>(
    raw: impl Iterator<Item = RawItem<'a>>,
    seed: Option<Coordinate>,
) -> Vec<ItineraryItem> {
    let (items, _carry) = raw.fold((Vec::new(), seed), |(mut items, carry), entry| {
        let (item, carry) = normalize_item(entry, carry);
        items.push(item);
        (items, carry)
    });
    items
}

/// Returns the normalized item and the carry-over coordinate for the next one.
fn normalize_item(
    entry: RawItem<'_>,
    carry: Option<Coordinate>,
) -> (ItineraryItem, Option<Coordinate>) {
    let obj = match entry {
        RawItem::Object(obj) => obj,
        RawItem::Title(title) => {
            let item = ItineraryItem {
                time: UNSPECIFIED.to_string(),
                title: title.to_string(),
                description: String::new(),
                category: Category::Other,
                cost: None,
                location: carry.map(format_coordinate),
            };
            return (item, carry);
        }
    };

    let location = resolve_location(obj).or(carry);
    let item = ItineraryItem {
        time: TIME.find_text(obj).unwrap_or_else(|| UNSPECIFIED.to_string()),
        title: TITLE.find_text(obj).unwrap_or_else(|| UNTITLED.to_string()),
        description: DESCRIPTION.find_text(obj).unwrap_or_default(),
        category: CATEGORY
            .find_text(obj)
            .map(|raw| Category::coerce(&raw))
            .unwrap_or_default(),
        cost: COST
            .find_where(obj, |v| coerce_non_negative(v).is_some())
            .and_then(coerce_non_negative),
        location: location.map(format_coordinate),
    };
    (item, location)
}

/// Coordinate string (or nested object / pair) first, then separate
/// latitude and longitude fields. Out-of-range coordinates are ignored.
fn resolve_location(obj: &Map<String, Value>) -> Option<Coordinate> {
    LOCATION
        .find_where(obj, |v| coordinate_from_value(v).is_some())
        .and_then(coordinate_from_value)
        .or_else(|| coordinate_from_fields(obj))
}

fn coordinate_from_value(value: &Value) -> Option<Coordinate> {
    let parsed = match value {
        Value::String(s) => parse_coordinate(s),
        Value::Object(nested) => return coordinate_from_fields(nested),
        Value::Array(pair) => match pair.as_slice() {
            [a, b] => {
                let (a, b) = (coerce_number(a)?, coerce_number(b)?);
                parse_coordinate(&format!("{a},{b}"))
            }
            _ => None,
        },
        _ => None,
    }?;
    Coordinate::from_parts(parsed.lon, parsed.lat)
}

fn coordinate_from_fields(obj: &Map<String, Value>) -> Option<Coordinate> {
    let lat = LATITUDE.find_number(obj)?;
    let lon = LONGITUDE.find_number(obj)?;
    Coordinate::from_parts(lon, lat)
}
