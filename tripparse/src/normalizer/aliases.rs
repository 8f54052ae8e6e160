//! Candidate keys for every field the normalizer reads, in priority order.

use crate::fields::FieldAliases;

pub(crate) const DAYS: FieldAliases = FieldAliases::new(&["days", "itinerary", "plan"]);
pub(crate) const DAY_DATE: FieldAliases = FieldAliases::new(&["date"]);
/// Generic fields repurposed as a day's date when `date` is missing.
pub(crate) const DAY_LABEL: FieldAliases = FieldAliases::new(&["time", "title"]);
pub(crate) const ITEMS: FieldAliases = FieldAliases::new(&["items", "activities", "schedule"]);

pub(crate) const TIME: FieldAliases = FieldAliases::new(&["time"]);
pub(crate) const TITLE: FieldAliases = FieldAliases::new(&["title", "name"]);
pub(crate) const DESCRIPTION: FieldAliases =
    FieldAliases::new(&["description", "desc", "details"]);
pub(crate) const CATEGORY: FieldAliases = FieldAliases::new(&["category", "type"]);
pub(crate) const COST: FieldAliases = FieldAliases::new(&["cost", "price"]);
pub(crate) const LOCATION: FieldAliases =
    FieldAliases::new(&["location", "coordinate", "coordinates"]);
pub(crate) const LATITUDE: FieldAliases = FieldAliases::new(&["latitude", "lat"]);
pub(crate) const LONGITUDE: FieldAliases = FieldAliases::new(&["longitude", "lng", "lon"]);

pub(crate) const ESTIMATED_BUDGET: FieldAliases =
    FieldAliases::new(&["estimatedBudget", "totalBudget", "budget"]);
pub(crate) const BUDGET_LINES: FieldAliases = FieldAliases::new(&["budgetBreakdown", "budgets"]);
pub(crate) const LINE_CATEGORY: FieldAliases =
    FieldAliases::new(&["category", "type", "item", "name"]);
pub(crate) const LINE_AMOUNT: FieldAliases = FieldAliases::new(&["amount", "cost"]);
pub(crate) const LINE_CURRENCY: FieldAliases = FieldAliases::new(&["currency"]);
pub(crate) const LINE_NOTE: FieldAliases = FieldAliases::new(&["note", "notes", "description"]);
