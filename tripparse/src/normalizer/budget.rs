//! Budget breakdown rows.
//!
//! Each row is validated on its own. Rows without a positive amount, or with
//! a category that is present but blank, are dropped silently: partial budget
//! data is normal model output, not an error.

use log::debug;
use serde_json::{Map, Value};

use super::aliases::{
    BUDGET_LINES, ESTIMATED_BUDGET, LINE_AMOUNT, LINE_CATEGORY, LINE_CURRENCY, LINE_NOTE,
};
use crate::{
    category::Category,
    fields::{coerce_non_negative, coerce_number, coerce_text},
    types::{BudgetLine, Preference},
};

/// Payload total if it is a finite non-negative number, else the preference budget.
pub(crate) fn estimated_budget(payload: &Map<String, Value>, preference: &Preference) -> f64 {
    ESTIMATED_BUDGET
        .find_where(payload, |v| coerce_non_negative(v).is_some())
        .and_then(coerce_non_negative)
        .unwrap_or(preference.budget)
}

/// Reads the breakdown as an array of rows or as a `category: amount` object.
pub(crate) fn budget_lines(payload: &Map<String, Value>, preference: &Preference) -> Vec<BudgetLine> {
    let currency = preference.currency.as_str();
    match BUDGET_LINES.find_where(payload, |v| v.is_array() || v.is_object()) {
        Some(Value::Array(rows)) => rows
            .iter()
            .filter_map(|row| match row.as_object() {
                Some(row) => line_from_row(row, currency),
                None => {
                    debug!("dropping non-object budget row: {}", row);
                    None
                }
            })
            .collect(),
        Some(Value::Object(pairs)) => pairs
            .iter()
            .filter_map(|(category, amount)| line_from_pair(category, amount, currency))
            .collect(),
        _ => Vec::new(),
    }
}

fn line_from_row(row: &Map<String, Value>, currency: &str) -> Option<BudgetLine> {
    let category = match LINE_CATEGORY.find(row) {
        None => Category::Other.label().to_string(),
        Some(raw) => match coerce_text(raw) {
            Some(text) => text,
            None => {
                debug!("dropping budget row with blank category: {:?}", row);
                return None;
            }
        },
    };

    let amount = positive_amount(LINE_AMOUNT.find_number(row), &category)?;

    Some(BudgetLine {
        category,
        amount,
        currency: LINE_CURRENCY
            .find_text(row)
            .unwrap_or_else(|| currency.to_string()),
        note: LINE_NOTE.find_text(row),
    })
}

fn line_from_pair(category: &str, amount: &Value, currency: &str) -> Option<BudgetLine> {
    let category = category.trim();
    if category.is_empty() {
        return None;
    }
    let amount = positive_amount(coerce_number(amount), category)?;
    Some(BudgetLine {
        category: category.to_string(),
        amount,
        currency: currency.to_string(),
        note: None,
    })
}

fn positive_amount(amount: Option<f64>, category: &str) -> Option<f64> {
    match amount {
        Some(amount) if amount > 0.0 => Some(amount),
        other => {
            debug!("dropping budget row '{}' with amount {:?}", category, other);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn pref() -> Preference {
        Preference {
            budget: 8000.0,
            currency: "CNY".into(),
            ..Preference::default()
        }
    }

    #[test]
    fn test_non_positive_amounts_dropped() {
        let p = payload(json!({"budgetBreakdown": [
            {"category": "交通", "amount": 0},
            {"category": "餐饮", "amount": -5},
            {"category": "住宿", "amount": 300}
        ]}));
        let lines = budget_lines(&p, &pref());
        assert_eq!(
            lines,
            vec![BudgetLine {
                category: "住宿".into(),
                amount: 300.0,
                currency: "CNY".into(),
                note: None,
            }]
        );
    }

    #[test]
    fn test_category_default_and_blank() {
        let p = payload(json!({"budgets": [
            {"amount": 100, "note": "杂费"},
            {"category": "  ", "amount": 200},
            {"category": "门票", "amount": "350", "currency": "USD"}
        ]}));
        let lines = budget_lines(&p, &pref());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].category, "其他");
        assert_eq!(lines[0].note.as_deref(), Some("杂费"));
        assert_eq!(lines[1].amount, 350.0);
        assert_eq!(lines[1].currency, "USD");
    }

    #[test]
    fn test_missing_or_non_numeric_amount_dropped() {
        let p = payload(json!({"budgetBreakdown": [
            {"category": "交通"},
            {"category": "餐饮", "amount": "很多"},
            "住宿 500"
        ]}));
        assert!(budget_lines(&p, &pref()).is_empty());
    }

    #[test]
    fn test_object_form() {
        let p = payload(json!({"budgetBreakdown": {"lodging": 1200, "meals": "600", "other": 0}}));
        let mut categories: Vec<String> = budget_lines(&p, &pref())
            .into_iter()
            .map(|l| l.category)
            .collect();
        categories.sort();
        assert_eq!(categories, vec!["lodging".to_string(), "meals".to_string()]);
    }

    #[test]
    fn test_estimated_budget() {
        assert_eq!(estimated_budget(&payload(json!({"estimatedBudget": 6500})), &pref()), 6500.0);
        assert_eq!(estimated_budget(&payload(json!({"totalBudget": "7,000"})), &pref()), 7000.0);
        assert_eq!(estimated_budget(&payload(json!({"estimatedBudget": "TBD"})), &pref()), 8000.0);
        assert_eq!(estimated_budget(&payload(json!({"estimatedBudget": -1})), &pref()), 8000.0);
        assert_eq!(estimated_budget(&payload(json!({})), &pref()), 8000.0);
    }
}
