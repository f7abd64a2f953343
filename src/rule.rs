//! The annotation grammar
//!
//! An annotation is `rule-name ":" argument`, split on the first `:`. The
//! rule-name set is closed; [`Rule::parse`] turns the string into a [`Rule`]
//! variant carrying a typed payload, so everything downstream dispatches on an
//! enum instead of re-matching strings.
//!
//! ```text
//! annotation := rule-name ":" argument
//! rule-name  := "len" | "in" | "min" | "max" | "minmax"
//! argument   := integer                ; len, min, max
//!             | literal ("," literal)* ; in
//!             | integer "," integer    ; minmax
//! ```
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{Rule, RuleParseError};
//!
//! assert_eq!(Rule::parse("len:5"), Ok(Rule::Len(5)));
//! assert_eq!(Rule::parse("minmax:1,10"), Ok(Rule::MinMax(1, 10)));
//! assert_eq!(Rule::parse("len"), Err(RuleParseError::Incomplete));
//! assert_eq!(Rule::parse("len:five"), Err(RuleParseError::InvalidLen));
//! ```

use core::fmt;

/// A parsed constraint rule with its typed argument payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rule {
    /// Text length must equal the argument.
    Len(i64),
    /// Value must be a member of the literal list.
    ///
    /// Literals are kept raw; for integer fields they are re-parsed at
    /// evaluation time, and the membership check fails closed if any literal
    /// is not an integer.
    In(Vec<String>),
    /// Integer value, or text length, must be at least the argument.
    Min(i64),
    /// Integer value, or text length, must be at most the argument.
    Max(i64),
    /// Integer value, or text length, must be within the inclusive range.
    MinMax(i64, i64),
}

/// Why an annotation failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RuleParseError {
    /// No `:` separator; the annotation has no argument part.
    Incomplete,
    /// The rule name is not part of the grammar.
    UnknownRule,
    /// The `len` argument is not an integer.
    InvalidLen,
    /// The `in` list is empty.
    EmptyInList,
    /// The `min` argument is not an integer.
    InvalidMin,
    /// The `max` argument is not an integer.
    InvalidMax,
    /// The `minmax` argument does not have exactly two parts.
    ///
    /// This variant is halt-grade: it stops validation of the whole record
    /// (see [`validate`](crate::validate)).
    MalformedRange,
    /// A `minmax` bound is not an integer.
    InvalidRange,
}

impl fmt::Display for RuleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            RuleParseError::Incomplete => "annotation is missing the rule separator",
            RuleParseError::UnknownRule => "unknown rule name",
            RuleParseError::InvalidLen => "len argument is not an integer",
            RuleParseError::EmptyInList => "in list is empty",
            RuleParseError::InvalidMin => "min argument is not an integer",
            RuleParseError::InvalidMax => "max argument is not an integer",
            RuleParseError::MalformedRange => "minmax argument is not a pair",
            RuleParseError::InvalidRange => "minmax bound is not an integer",
        };
        f.write_str(message)
    }
}

impl std::error::Error for RuleParseError {}

/// Base-10 integer with an optional leading sign; anything else is a parse
/// failure. `i64::from_str` implements exactly this grammar.
fn parse_int(text: &str) -> Option<i64> {
    text.parse().ok()
}

impl Rule {
    /// Parse an annotation string into a rule.
    ///
    /// The string is split on the *first* `:`, so a malformed multi-rule
    /// annotation like `min:0:max:10` parses as rule `min` with argument
    /// `0:max:10` and fails that rule's integer grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::{Rule, RuleParseError};
    ///
    /// assert_eq!(
    ///     Rule::parse("in:red,green,blue"),
    ///     Ok(Rule::In(vec!["red".into(), "green".into(), "blue".into()]))
    /// );
    /// assert_eq!(Rule::parse("min:0:max:10"), Err(RuleParseError::InvalidMin));
    /// assert_eq!(Rule::parse("minmax:1"), Err(RuleParseError::MalformedRange));
    /// ```
    pub fn parse(annotation: &str) -> Result<Rule, RuleParseError> {
        let (name, argument) = annotation
            .split_once(':')
            .ok_or(RuleParseError::Incomplete)?;

        match name {
            "len" => parse_int(argument)
                .map(Rule::Len)
                .ok_or(RuleParseError::InvalidLen),
            "in" => {
                let literals: Vec<String> = argument.split(',').map(str::to_owned).collect();
                // The original tag grammar flags an empty *first* literal, so
                // `in:` and `in:,2` are both empty-list errors.
                if literals[0].is_empty() {
                    return Err(RuleParseError::EmptyInList);
                }
                Ok(Rule::In(literals))
            }
            "min" => parse_int(argument)
                .map(Rule::Min)
                .ok_or(RuleParseError::InvalidMin),
            "max" => parse_int(argument)
                .map(Rule::Max)
                .ok_or(RuleParseError::InvalidMax),
            "minmax" => {
                let (lo, hi) = argument
                    .split_once(',')
                    .ok_or(RuleParseError::MalformedRange)?;
                if hi.contains(',') {
                    return Err(RuleParseError::MalformedRange);
                }
                let lo = parse_int(lo).ok_or(RuleParseError::InvalidRange)?;
                let hi = parse_int(hi).ok_or(RuleParseError::InvalidRange)?;
                Ok(Rule::MinMax(lo, hi))
            }
            _ => Err(RuleParseError::UnknownRule),
        }
    }
}
