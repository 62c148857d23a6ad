//! CSS Values & Units Level 3 — §8 Functional Notations
//! Spec: <https://www.w3.org/TR/css-values-3/#functional-notations>

use crate::{Value, ValueError};
use core::fmt;
use core::str::FromStr;
use cssparser::{ParseError as CssParseError, Parser, ParserInput, SourcePosition, Token};
use log::{debug, trace};

/// A single `name(arg, arg, ...)` form with its arguments in source order.
///
/// Arguments are not validated: arity and types are checked by whoever
/// interprets the function (e.g. the color converter).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    value: Value,
    function_name: String,
    arguments: Vec<Value>,
}

impl Function {
    /// Parse functional notation from a raw value string.
    ///
    /// # Errors
    /// Returns `ValueError::EmptyValue` for an empty string and
    /// `ValueError::MalformedFunction` when there is no name, no `(`, or no closing `)`.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValueError> {
        Self::from_value(Value::new(raw)?)
    }

    /// Parse functional notation from an already wrapped value.
    ///
    /// # Errors
    /// Returns `ValueError::MalformedFunction` when the value is not of the form `name(...)`.
    pub fn from_value(value: Value) -> Result<Self, ValueError> {
        let text = value.trimmed();
        let malformed = |reason| ValueError::MalformedFunction {
            raw: value.raw().to_owned(),
            reason,
        };
        let open = text.find('(').ok_or_else(|| malformed("missing `(`"))?;
        let close = text
            .rfind(')')
            .filter(|close| *close > open)
            .ok_or_else(|| malformed("missing `)`"))?;
        let function_name = text[..open].trim();
        if function_name.is_empty() {
            return Err(malformed("missing function name"));
        }
        let arguments = split_arguments(&text[open + 1..close])
            .into_iter()
            .map(Value::new)
            .collect::<Result<Vec<_>, _>>()?;
        trace!(
            "[FUNCTION] `{function_name}` with {} argument(s) from `{}`",
            arguments.len(),
            value.raw()
        );
        Ok(Self {
            function_name: function_name.to_owned(),
            arguments,
            value,
        })
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    pub fn argument(&self, index: usize) -> Option<&Value> {
        self.arguments.get(index)
    }

    /// The wrapped source value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Split the text between the parentheses on commas, whitespace and comments.
///
/// Tokenizing with the CSS tokenizer keeps quoted strings and nested blocks
/// (`calc(1px + 2px)`) inside a single argument. Empty pieces are dropped.
fn split_arguments(inner: &str) -> Vec<&str> {
    let mut input = ParserInput::new(inner);
    let mut parser = Parser::new(&mut input);
    let mut arguments = Vec::new();
    let mut argument_start: Option<SourcePosition> = None;
    loop {
        let before = parser.position();
        let (is_separator, opens_block) = match parser.next_including_whitespace_and_comments() {
            Ok(token) => (
                matches!(token, Token::Comma | Token::WhiteSpace(_) | Token::Comment(_)),
                matches!(
                    token,
                    Token::Function(_)
                        | Token::ParenthesisBlock
                        | Token::SquareBracketBlock
                        | Token::CurlyBracketBlock
                ),
            ),
            Err(_) => break,
        };
        if is_separator {
            if let Some(start) = argument_start.take() {
                arguments.push(parser.slice(start..before));
            }
            continue;
        }
        if argument_start.is_none() {
            argument_start = Some(before);
        }
        if opens_block {
            // Consume the block now so `position()` lands after its closing bracket.
            let nested = parser.parse_nested_block(|nested| {
                while nested.next_including_whitespace_and_comments().is_ok() {}
                Ok::<(), CssParseError<'_, ()>>(())
            });
            if nested.is_err() {
                debug!("[FUNCTION] could not consume nested block in `{inner}`");
            }
        }
    }
    if let Some(start) = argument_start {
        arguments.push(parser.slice_from(start));
    }
    arguments
}

impl FromStr for Function {
    type Err = ValueError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}(", self.function_name)?;
        for (index, argument) in self.arguments.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            formatter.write_str(argument.raw())?;
        }
        formatter.write_str(")")
    }
}
