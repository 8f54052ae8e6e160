//! Strategies for pulling a JSON payload out of a model response.

mod brace_slice;
mod repair;

pub use brace_slice::{brace_slice, BraceSliceStrategy};
pub use repair::RepairStrategy;

use serde_json::Value;

use crate::error::Result;

/// A way of turning response text into a JSON value.
///
/// Strategies are tried in priority order by [`super::PayloadParser`]; the
/// first one that succeeds wins.
pub trait ParsingStrategy: Send + Sync + std::fmt::Debug {
    /// Returns the name of this strategy for logging.
    fn name(&self) -> &'static str;

    /// Attempts to decode the input.
    fn parse(&self, input: &str) -> Result<Value>;

    /// Lower values are tried first.
    fn priority(&self) -> u8;
}
