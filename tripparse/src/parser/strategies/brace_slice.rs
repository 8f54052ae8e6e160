//! First-`{`-to-last-`}` extraction.

use serde_json::Value;

use super::ParsingStrategy;
use crate::error::{ParseError, Result};

/// Parses the text between the first `{` and the last `}`.
///
/// This strips prose, markdown fences and trailing chatter around a single
/// object without attempting to balance braces.
///
/// # Examples
///
/// ```
/// use tripparse::parser::strategies::{BraceSliceStrategy, ParsingStrategy};
///
/// let value = BraceSliceStrategy
///     .parse("Here you go:\n```json\n{\"days\": []}\n```")
///     .unwrap();
/// assert!(value["days"].is_array());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BraceSliceStrategy;

impl ParsingStrategy for BraceSliceStrategy {
    #[inline]
    fn name(&self) -> &'static str {
        "brace_slice"
    }

    fn parse(&self, input: &str) -> Result<Value> {
        let slice = brace_slice(input).ok_or(ParseError::NoJsonObject)?;
        Ok(serde_json::from_str(slice)?)
    }

    #[inline]
    fn priority(&self) -> u8 {
        1
    }
}

/// Returns the substring from the first `{` through the last `}`.
pub fn brace_slice(input: &str) -> Option<&str> {
    let start = input.find('{')?;
    let end = input.rfind('}')?;
    (end > start).then(|| &input[start..=end])
}
