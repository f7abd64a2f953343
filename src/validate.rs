//! The validation engine
//!
//! [`validate`] walks a record's descriptor table in declaration order and
//! folds each field into zero or one errors. The fold never short-circuits on
//! an ordinary field-level error; exactly two things end a call early:
//!
//! 1. the upfront structural check - a non-aggregate input returns a single
//!    not-a-record error before any field is examined;
//! 2. a `minmax` annotation whose argument does not split into exactly two
//!    parts - processing stops at that field, keeping errors already
//!    accumulated and discarding everything later fields would have produced.
//!
//! The second case is a long-standing quirk of this rule set, preserved
//! deliberately; every other syntax error records one error for its field and
//! moves on.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{validate, ErrorKind};
//!
//! struct Signup {
//!     login: String,
//!     age: i64,
//! }
//!
//! fieldcheck::describe! {
//!     Signup {
//!         pub login: text = "minmax:3,16",
//!         pub age: int = "min:18",
//!     }
//! }
//!
//! let ok = Signup { login: "ada".into(), age: 36 };
//! assert!(validate(&ok).is_ok());
//!
//! let bad = Signup { login: "x".into(), age: 11 };
//! let errors = validate(&bad).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert!(errors.iter().all(|e| e.kind() == ErrorKind::ValueMismatch));
//! ```

use crate::describe::{Describe, FieldDescriptor, Shape, Visibility};
use crate::error::{ErrorKind, ValidationError, ValidationErrors};
use crate::rule::{Rule, RuleParseError};

/// What one field contributed to the fold.
enum Outcome {
    /// No error: the field passed, or carried no annotation.
    Pass,
    /// One error; processing continues with the next field.
    Fail(ValidationError),
    /// One error that ends processing of the whole record.
    Halt(ValidationError),
}

fn check_field<T: Describe>(record: &T, descriptor: &FieldDescriptor<T>) -> Outcome {
    if descriptor.annotation.is_empty() {
        return Outcome::Pass;
    }

    if descriptor.visibility == Visibility::Internal {
        // Annotated internal fields are refused outright; the annotation is
        // not even parsed.
        return Outcome::Fail(ValidationError::for_field(
            descriptor.name,
            ErrorKind::InternalFieldAnnotation,
        ));
    }

    let rule = match Rule::parse(descriptor.annotation) {
        Ok(rule) => rule,
        Err(RuleParseError::MalformedRange) => {
            return Outcome::Halt(ValidationError::for_field(
                descriptor.name,
                ErrorKind::InvalidMinMax,
            ));
        }
        Err(error) => {
            return Outcome::Fail(ValidationError::for_field(descriptor.name, error.into()));
        }
    };

    let value = (descriptor.access)(record);
    if rule.check(&value) {
        Outcome::Pass
    } else {
        Outcome::Fail(ValidationError::for_field(
            descriptor.name,
            ErrorKind::ValueMismatch,
        ))
    }
}

/// Validate a record against its field annotations.
///
/// Returns `Ok(())` when every annotated field passes, otherwise the full
/// ordered collection of violations. The input must be an aggregate: handing
/// a scalar, collection, or reference fails structurally with a single
/// [`ErrorKind::NotARecord`] error.
///
/// The call is a pure function of the record and its static descriptor table:
/// no caching, no shared state, safe to invoke concurrently on independent
/// records.
///
/// # Examples
///
/// ```
/// use fieldcheck::{validate, ErrorKind};
///
/// // Non-aggregates fail structurally.
/// let errors = validate(&42i64).unwrap_err();
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].kind(), ErrorKind::NotARecord);
/// ```
pub fn validate<T: Describe>(record: &T) -> Result<(), ValidationErrors> {
    #[cfg(feature = "tracing")]
    tracing::trace!(record = std::any::type_name::<T>(), "validating record");

    if T::shape() != Shape::Aggregate {
        return Err(ValidationErrors::single(ValidationError::structural(
            ErrorKind::NotARecord,
        )));
    }

    let mut errors = Vec::new();
    for descriptor in T::descriptors() {
        match check_field(record, descriptor) {
            Outcome::Pass => {}
            Outcome::Fail(error) => errors.push(error),
            Outcome::Halt(error) => {
                errors.push(error);
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    field = descriptor.name,
                    "malformed minmax halted validation"
                );
                return Err(ValidationErrors::new(errors));
            }
        }
    }

    match ValidationErrors::from_vec(errors) {
        None => Ok(()),
        Some(errors) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(violations = errors.len(), "record failed validation");
            Err(errors)
        }
    }
}
