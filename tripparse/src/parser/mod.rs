//! Payload parser that coordinates parsing strategies.

pub mod strategies;

use log::debug;
use serde_json::{Map, Value};
use strategies::{BraceSliceStrategy, ParsingStrategy, RepairStrategy};

use crate::{
    error::{ParseError, Result, StrategyError},
    fields::value_type_name,
};

/// Locates and decodes the JSON object inside a model response.
///
/// Strategies run in priority order; the first one producing a JSON object
/// wins. A strategy that produces a non-object value counts as a failure.
///
/// # Examples
///
/// ```
/// use tripparse::parser::PayloadParser;
///
/// let parser = PayloadParser::new();
/// let payload = parser.parse(r#"Sure! {"days": []}"#).unwrap();
/// assert!(payload.contains_key("days"));
/// ```
#[derive(Debug)]
pub struct PayloadParser {
    /// Parsing strategies in priority order.
    strategies: Vec<Box<dyn ParsingStrategy>>,
}

impl Default for PayloadParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadParser {
    /// Creates a parser with only [`BraceSliceStrategy`].
    pub fn new() -> Self {
        Self::with_strategies(vec![Box::new(BraceSliceStrategy)])
    }

    /// Creates a parser that also tries [`RepairStrategy`].
    pub fn with_repair() -> Self {
        Self::with_strategies(vec![Box::new(BraceSliceStrategy), Box::new(RepairStrategy)])
    }

    /// Creates a parser with custom strategies.
    ///
    /// Strategies will be sorted by priority automatically.
    pub fn with_strategies(mut strategies: Vec<Box<dyn ParsingStrategy>>) -> Self {
        strategies.sort_by_key(|s| s.priority());
        Self { strategies }
    }

    /// Names of the configured strategies, in the order they are tried.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Returns the first JSON object any strategy can decode.
    ///
    /// # Errors
    ///
    /// With a single strategy its own error is returned unchanged; with
    /// several, [`ParseError::AllStrategiesFailed`] lists every attempt.
    pub fn parse(&self, input: &str) -> Result<Map<String, Value>> {
        let mut attempts = Vec::new();

        for strategy in &self.strategies {
            let error = match strategy.parse(input) {
                Ok(Value::Object(map)) => {
                    debug!("strategy '{}' decoded payload with {} keys", strategy.name(), map.len());
                    return Ok(map);
                }
                Ok(other) => ParseError::NotAnObject {
                    found: value_type_name(&other),
                },
                Err(e) => e,
            };
            debug!("strategy '{}' failed: {}", strategy.name(), error);
            attempts.push((strategy.name(), error));
        }

        if attempts.len() == 1 {
            if let Some((_, error)) = attempts.pop() {
                return Err(error);
            }
        }

        Err(ParseError::AllStrategiesFailed {
            attempts: attempts
                .into_iter()
                .map(|(name, error)| StrategyError::new(name, error.to_string()))
                .collect(),
        })
    }
}
