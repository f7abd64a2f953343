//! # Fieldcheck
//!
//! Declarative field validation: annotate a record's fields with constraint
//! rules, hand the record to [`validate`], and get back either success or the
//! full ordered list of violations - never just the first one.
//!
//! ## How it fits together
//!
//! - A record registers itself with the [`Describe`] trait (usually via the
//!   [`describe!`] macro): a static table of field descriptors - name,
//!   visibility, annotation string, and an accessor for the current value.
//! - [`validate`] parses each field's annotation into a typed [`Rule`],
//!   evaluates it against the field's [`FieldValue`], and accumulates one
//!   [`ValidationError`] per violation into a [`ValidationErrors`] collection.
//!
//! ## Rules
//!
//! | Annotation | Meaning |
//! |---|---|
//! | `len:N` | text length equals N |
//! | `in:a,b,c` | value is one of the listed literals |
//! | `min:N` | integer value, or text length, is at least N |
//! | `max:N` | integer value, or text length, is at most N |
//! | `minmax:lo,hi` | integer value, or text length, is within lo..=hi |
//!
//! ## Quick example
//!
//! ```rust
//! use fieldcheck::{validate, ErrorKind};
//!
//! struct Signup {
//!     login: String,
//!     role: String,
//!     age: i64,
//! }
//!
//! fieldcheck::describe! {
//!     Signup {
//!         pub login: text = "minmax:3,16",
//!         pub role: text = "in:admin,member,guest",
//!         pub age: int = "min:18",
//!     }
//! }
//!
//! let signup = Signup {
//!     login: "ada".into(),
//!     role: "wizard".into(),
//!     age: 11,
//! };
//!
//! let errors = validate(&signup).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].field(), Some("role"));
//! assert_eq!(errors[1].field(), Some("age"));
//! assert!(errors.iter().all(|e| e.kind() == ErrorKind::ValueMismatch));
//! ```
//!
//! ## Feature flags
//!
//! - `serde`: `Serialize` impls for rules and errors, for reporting
//!   violations across an API boundary.
//! - `tracing`: trace-level events from the engine.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod check;
pub mod describe;
pub mod error;
pub mod rule;
pub mod validate;

// Re-exports
pub use describe::{Describe, FieldAccessor, FieldDescriptor, FieldValue, Shape, Visibility};
pub use error::{ErrorKind, ValidationError, ValidationErrors};
pub use rule::{Rule, RuleParseError};
pub use validate::validate;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::describe::{Describe, FieldDescriptor, FieldValue, Shape, Visibility};
    pub use crate::error::{ErrorKind, ValidationError, ValidationErrors};
    pub use crate::rule::{Rule, RuleParseError};
    pub use crate::validate::validate;
}
