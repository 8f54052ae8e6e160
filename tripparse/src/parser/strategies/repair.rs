//! Light JSON repair for common model slips.

use serde_json::Value;

use super::{brace_slice, ParsingStrategy};
use crate::error::{ParseError, Result};

/// Strategy that removes trailing commas and comments before parsing.
///
/// Opt-in: with repair enabled a slightly malformed response produces a
/// parsed plan instead of the fallback plan.
///
/// Converts: `{"a": 1, // note\n}` → `{"a": 1}`
#[derive(Debug, Clone, Copy, Default)]
pub struct RepairStrategy;

impl ParsingStrategy for RepairStrategy {
    fn name(&self) -> &'static str {
        "repair"
    }

    fn parse(&self, input: &str) -> Result<Value> {
        let slice = brace_slice(input).ok_or(ParseError::NoJsonObject)?;
        let repaired = strip_trailing_commas(&strip_comments(slice));
        Ok(serde_json::from_str(&repaired)?)
    }

    fn priority(&self) -> u8 {
        10
    }
}

/// Removes `//` line comments and `/* */` block comments outside strings.
fn strip_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape_next = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            if escape_next {
                escape_next = false;
            } else if c == '\\' {
                escape_next = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        let next = chars.peek().copied();
        match (c, next) {
            ('"', _) => {
                in_string = true;
                result.push(c);
            }
            ('/', Some('/')) => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        result.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => result.push(c),
        }
    }

    result
}

/// Drops commas that are followed (after whitespace) by `}` or `]`.
fn strip_trailing_commas(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape_next = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            if escape_next {
                escape_next = false;
            } else if c == '\\' {
                escape_next = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        if c == ',' {
            let mut lookahead = chars.clone();
            let is_trailing = loop {
                match lookahead.next() {
                    Some(next) if next.is_whitespace() => continue,
                    Some('}') | Some(']') => break true,
                    _ => break false,
                }
            };
            if is_trailing {
                continue;
            }
        } else if c == '"' {
            in_string = true;
        }
        result.push(c);
    }

    result
}
