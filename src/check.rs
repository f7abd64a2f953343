//! Constraint evaluators
//!
//! Pure predicates over a [`FieldValue`] and a rule's parsed argument. An
//! evaluator never errors: it answers pass or fail, and every fail surfaces
//! through the engine as the single value-mismatch error kind. Fields whose
//! kind has no branch in a given evaluator fail it unconditionally.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{check, FieldValue};
//!
//! assert!(check::len(5, &FieldValue::Text("abcde")));
//! assert!(check::min(18, &FieldValue::Int(21)));
//! assert!(!check::max(10, &FieldValue::Bool(true))); // no bool branch
//! ```

use crate::describe::FieldValue;
use crate::rule::Rule;

/// Text length equals `expected`. Only text has a length; every other kind
/// fails.
///
/// # Examples
///
/// ```
/// use fieldcheck::{check, FieldValue};
///
/// assert!(check::len(3, &FieldValue::Text("abc")));
/// assert!(!check::len(3, &FieldValue::Text("ab")));
/// assert!(!check::len(3, &FieldValue::Int(3)));
/// ```
pub fn len(expected: i64, value: &FieldValue<'_>) -> bool {
    match value {
        FieldValue::Text(text) => text.len() as i64 == expected,
        _ => false,
    }
}

/// Membership in a literal list.
///
/// Integer fields compare as integers: every literal must parse as an
/// integer, and if any does not, the whole check fails closed. Text fields
/// compare raw strings.
///
/// # Examples
///
/// ```
/// use fieldcheck::{check, FieldValue};
///
/// let list = vec!["1".to_string(), "2".to_string()];
/// assert!(check::member(&list, &FieldValue::Int(2)));
/// assert!(!check::member(&list, &FieldValue::Int(3)));
/// assert!(check::member(&list, &FieldValue::Text("2")));
///
/// // One unparseable literal fails the whole integer membership check.
/// let tainted = vec!["1".to_string(), "x".to_string()];
/// assert!(!check::member(&tainted, &FieldValue::Int(1)));
/// ```
pub fn member(literals: &[String], value: &FieldValue<'_>) -> bool {
    match value {
        FieldValue::Int(n) => match parse_all(literals) {
            Some(candidates) => candidates.contains(n),
            None => false,
        },
        FieldValue::Text(text) => literals.iter().any(|literal| literal == text),
        _ => false,
    }
}

/// Integer value, or text length, is at least `bound`.
pub fn min(bound: i64, value: &FieldValue<'_>) -> bool {
    match value {
        FieldValue::Int(n) => *n >= bound,
        FieldValue::Text(text) => text.len() as i64 >= bound,
        _ => false,
    }
}

/// Integer value, or text length, is at most `bound`.
pub fn max(bound: i64, value: &FieldValue<'_>) -> bool {
    match value {
        FieldValue::Int(n) => *n <= bound,
        FieldValue::Text(text) => text.len() as i64 <= bound,
        _ => false,
    }
}

/// Integer value, or text length, is within `lo..=hi`.
///
/// # Examples
///
/// ```
/// use fieldcheck::{check, FieldValue};
///
/// assert!(check::range(1, 10, &FieldValue::Int(5)));
/// assert!(!check::range(1, 10, &FieldValue::Int(11)));
/// assert!(check::range(2, 4, &FieldValue::Text("abc")));
/// ```
pub fn range(lo: i64, hi: i64, value: &FieldValue<'_>) -> bool {
    match value {
        FieldValue::Int(n) => (lo..=hi).contains(n),
        FieldValue::Text(text) => (lo..=hi).contains(&(text.len() as i64)),
        _ => false,
    }
}

fn parse_all(literals: &[String]) -> Option<Vec<i64>> {
    literals.iter().map(|literal| literal.parse().ok()).collect()
}

impl Rule {
    /// Evaluate this rule against a field value.
    ///
    /// Exhaustive over the rule set; adding a variant will not compile until
    /// it dispatches somewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::{FieldValue, Rule};
    ///
    /// let rule = Rule::parse("minmax:1,10").unwrap();
    /// assert!(rule.check(&FieldValue::Int(5)));
    /// assert!(!rule.check(&FieldValue::Int(11)));
    /// ```
    pub fn check(&self, value: &FieldValue<'_>) -> bool {
        match self {
            Rule::Len(expected) => len(*expected, value),
            Rule::In(literals) => member(literals, value),
            Rule::Min(bound) => min(*bound, value),
            Rule::Max(bound) => max(*bound, value),
            Rule::MinMax(lo, hi) => range(*lo, *hi, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literals(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_len_on_text() {
        assert!(len(5, &FieldValue::Text("abcde")));
        assert!(!len(5, &FieldValue::Text("abcd")));
        assert!(len(0, &FieldValue::Text("")));
    }

    #[test]
    fn test_len_counts_bytes() {
        // Length is byte length, not character count.
        assert!(len(2, &FieldValue::Text("é")));
        assert!(!len(1, &FieldValue::Text("é")));
    }

    #[test]
    fn test_len_rejects_other_kinds() {
        assert!(!len(1, &FieldValue::Int(1)));
        assert!(!len(4, &FieldValue::Bool(true)));
        assert!(!len(3, &FieldValue::Float(1.0)));
    }

    #[test]
    fn test_negative_len_never_passes() {
        assert!(!len(-1, &FieldValue::Text("")));
    }

    #[test]
    fn test_member_int() {
        let list = literals(&["1", "2", "3"]);
        assert!(member(&list, &FieldValue::Int(2)));
        assert!(!member(&list, &FieldValue::Int(4)));
    }

    #[test]
    fn test_member_int_fails_closed() {
        let list = literals(&["1", "two", "3"]);
        assert!(!member(&list, &FieldValue::Int(1)));
        assert!(!member(&list, &FieldValue::Int(3)));
    }

    #[test]
    fn test_member_text() {
        let list = literals(&["red", "green"]);
        assert!(member(&list, &FieldValue::Text("green")));
        assert!(!member(&list, &FieldValue::Text("blue")));
    }

    #[test]
    fn test_member_text_ignores_integer_parsing() {
        // Text membership is raw string comparison, even for numeric strings.
        let list = literals(&["01"]);
        assert!(!member(&list, &FieldValue::Text("1")));
        assert!(member(&list, &FieldValue::Text("01")));
    }

    #[test]
    fn test_member_rejects_other_kinds() {
        let list = literals(&["true"]);
        assert!(!member(&list, &FieldValue::Bool(true)));
    }

    #[test]
    fn test_min_int_and_text() {
        assert!(min(3, &FieldValue::Int(3)));
        assert!(!min(3, &FieldValue::Int(2)));
        assert!(min(3, &FieldValue::Text("abc")));
        assert!(!min(4, &FieldValue::Text("abc")));
    }

    #[test]
    fn test_max_int_and_text() {
        assert!(max(3, &FieldValue::Int(3)));
        assert!(!max(3, &FieldValue::Int(4)));
        assert!(max(3, &FieldValue::Text("abc")));
        assert!(!max(2, &FieldValue::Text("abc")));
    }

    #[test]
    fn test_range_int_and_text() {
        assert!(range(1, 10, &FieldValue::Int(1)));
        assert!(range(1, 10, &FieldValue::Int(10)));
        assert!(!range(1, 10, &FieldValue::Int(0)));
        assert!(!range(1, 10, &FieldValue::Int(11)));
        assert!(range(2, 4, &FieldValue::Text("abc")));
        assert!(!range(2, 4, &FieldValue::Text("abcde")));
    }

    #[test]
    fn test_inverted_range_never_passes() {
        assert!(!range(10, 1, &FieldValue::Int(5)));
    }

    #[test]
    fn test_rule_check_dispatch() {
        assert!(Rule::Len(3).check(&FieldValue::Text("abc")));
        assert!(Rule::In(literals(&["a"])).check(&FieldValue::Text("a")));
        assert!(Rule::Min(0).check(&FieldValue::Int(0)));
        assert!(Rule::Max(0).check(&FieldValue::Int(0)));
        assert!(Rule::MinMax(0, 0).check(&FieldValue::Int(0)));
    }

    #[test]
    fn test_float_fields_fail_every_rule() {
        let value = FieldValue::Float(5.0);
        assert!(!Rule::Len(1).check(&value));
        assert!(!Rule::In(literals(&["5"])).check(&value));
        assert!(!Rule::Min(0).check(&value));
        assert!(!Rule::Max(10).check(&value));
        assert!(!Rule::MinMax(0, 10).check(&value));
    }
}
