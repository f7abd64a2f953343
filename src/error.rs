//! Validation errors and their ordered collection
//!
//! Failures are values, never control flow: the engine collects one
//! [`ValidationError`] per violation and hands the caller the whole ordered
//! collection as a [`ValidationErrors`]. An empty collection does not exist -
//! success is `Ok(())`, and [`ValidationErrors::from_vec`] refuses an empty
//! vector, so a failure value always holds at least one error.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{ErrorKind, ValidationError, ValidationErrors};
//!
//! let errors = ValidationErrors::from_vec(vec![
//!     ValidationError::for_field("name", ErrorKind::ValueMismatch),
//!     ValidationError::for_field("age", ErrorKind::InvalidMin),
//! ])
//! .unwrap();
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(
//!     errors.to_string(),
//!     "name: value did not validate, age: min argument is not an integer"
//! );
//! ```

use core::fmt;
use std::ops::Deref;

use crate::rule::RuleParseError;

/// The closed set of failure causes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorKind {
    /// The validated value is not a record (structural, record-level).
    NotARecord,
    /// An internal field carries an annotation (structural, per field).
    InternalFieldAnnotation,
    /// The annotation has no rule separator.
    IncompleteRule,
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
    /// The `minmax` argument is malformed.
    InvalidMinMax,
    /// The field's value fails its constraint.
    ValueMismatch,
}

impl ErrorKind {
    /// Whether this kind concerns the record's structure rather than a rule.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ErrorKind::NotARecord | ErrorKind::InternalFieldAnnotation
        )
    }

    /// Whether this kind is an annotation syntax failure.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            ErrorKind::IncompleteRule
                | ErrorKind::UnknownRule
                | ErrorKind::InvalidLen
                | ErrorKind::EmptyInList
                | ErrorKind::InvalidMin
                | ErrorKind::InvalidMax
                | ErrorKind::InvalidMinMax
        )
    }

    fn message(&self) -> &'static str {
        match self {
            ErrorKind::NotARecord => "value is not a record",
            ErrorKind::InternalFieldAnnotation => {
                "validation is not allowed on an internal field"
            }
            ErrorKind::IncompleteRule => "annotation is missing the rule separator",
            ErrorKind::UnknownRule => "unknown rule name",
            ErrorKind::InvalidLen => "len argument is not an integer",
            ErrorKind::EmptyInList => "in list is empty",
            ErrorKind::InvalidMin => "min argument is not an integer",
            ErrorKind::InvalidMax => "max argument is not an integer",
            ErrorKind::InvalidMinMax => "minmax argument is incorrect",
            ErrorKind::ValueMismatch => "value did not validate",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<RuleParseError> for ErrorKind {
    fn from(error: RuleParseError) -> Self {
        match error {
            RuleParseError::Incomplete => ErrorKind::IncompleteRule,
            RuleParseError::UnknownRule => ErrorKind::UnknownRule,
            RuleParseError::InvalidLen => ErrorKind::InvalidLen,
            RuleParseError::EmptyInList => ErrorKind::EmptyInList,
            RuleParseError::InvalidMin => ErrorKind::InvalidMin,
            RuleParseError::InvalidMax => ErrorKind::InvalidMax,
            RuleParseError::MalformedRange | RuleParseError::InvalidRange => {
                ErrorKind::InvalidMinMax
            }
        }
    }
}

/// One validation failure: a cause, plus the offending field where there is
/// one. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationError {
    field: Option<&'static str>,
    kind: ErrorKind,
}

impl ValidationError {
    /// A record-level structural error with no associated field.
    pub fn structural(kind: ErrorKind) -> Self {
        ValidationError { field: None, kind }
    }

    /// An error attributed to one field.
    pub fn for_field(field: &'static str, kind: ErrorKind) -> Self {
        ValidationError {
            field: Some(field),
            kind,
        }
    }

    /// The failure cause.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The offending field, if the error is field-level.
    pub fn field(&self) -> Option<&'static str> {
        self.field
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(f, "{}: {}", field, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for ValidationError {}

/// An ordered, non-empty collection of validation errors.
///
/// Insertion order is field declaration order. The collection derefs to a
/// slice for structured access and renders by joining member messages with
/// `", "`.
///
/// # Examples
///
/// ```
/// use fieldcheck::{ErrorKind, ValidationError, ValidationErrors};
///
/// let errors = ValidationErrors::single(ValidationError::structural(ErrorKind::NotARecord));
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].kind(), ErrorKind::NotARecord);
/// assert_eq!(errors.to_string(), "value is not a record");
///
/// // Empty vectors are not a failure value.
/// assert!(ValidationErrors::from_vec(vec![]).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    // Engine-internal constructor; the engine only builds failure values
    // after pushing at least one error.
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        debug_assert!(!errors.is_empty());
        ValidationErrors(errors)
    }

    /// A collection holding exactly one error.
    pub fn single(error: ValidationError) -> Self {
        ValidationErrors(vec![error])
    }

    /// Build a collection from a vector, refusing empty input.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::{ErrorKind, ValidationError, ValidationErrors};
    ///
    /// let error = ValidationError::for_field("age", ErrorKind::ValueMismatch);
    /// assert!(ValidationErrors::from_vec(vec![error]).is_some());
    /// assert!(ValidationErrors::from_vec(vec![]).is_none());
    /// ```
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(ValidationErrors(errors))
        }
    }

    /// Append another collection's errors after this one's, preserving both
    /// orders. Associative, in the semigroup sense.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::{ErrorKind, ValidationError, ValidationErrors};
    ///
    /// let first = ValidationErrors::single(ValidationError::for_field(
    ///     "name",
    ///     ErrorKind::ValueMismatch,
    /// ));
    /// let second = ValidationErrors::single(ValidationError::for_field(
    ///     "age",
    ///     ErrorKind::InvalidMax,
    /// ));
    ///
    /// let merged = first.merge(second);
    /// assert_eq!(merged.len(), 2);
    /// assert_eq!(merged[0].field(), Some("name"));
    /// assert_eq!(merged[1].field(), Some("age"));
    /// ```
    pub fn merge(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }

    /// The errors as a slice, in insertion order.
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    /// Consume the collection, returning the underlying vector.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl Deref for ValidationErrors {
    type Target = [ValidationError];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
