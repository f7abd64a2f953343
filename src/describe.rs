//! Record introspection via static descriptor tables
//!
//! Rust has no runtime reflection, so the engine cannot discover a struct's
//! fields on its own. Instead, every validatable type supplies a descriptor
//! table through the [`Describe`] trait: one [`FieldDescriptor`] per field, in
//! declaration order, carrying the field's name, its engine-level
//! [`Visibility`], its raw annotation string, and an accessor that reads the
//! field's current value as a [`FieldValue`].
//!
//! The [`describe!`](crate::describe!) macro writes the impl for you:
//!
//! ```
//! use fieldcheck::{Describe, FieldValue};
//!
//! struct Login {
//!     name: String,
//!     age: i64,
//! }
//!
//! fieldcheck::describe! {
//!     Login {
//!         pub name: text = "min:3",
//!         pub age: int = "minmax:18,99",
//!     }
//! }
//!
//! let login = Login { name: "ada".into(), age: 36 };
//! assert_eq!(Login::descriptors().len(), 2);
//! assert_eq!(login.field_value("age"), Some(FieldValue::Int(36)));
//! ```
//!
//! Non-aggregate types (primitives, `String`, `Vec<T>`, `Box<T>`) also
//! implement `Describe`, reporting a non-[`Shape::Aggregate`] shape with an
//! empty table. Handing one to [`validate`](crate::validate) therefore fails
//! with the structural not-a-record error instead of refusing to compile,
//! mirroring a dynamically-checked validator's behavior.

use core::fmt;

/// The runtime shape of a type, as reported by [`Describe::shape`].
///
/// Only [`Shape::Aggregate`] values can be validated; every other shape makes
/// [`validate`](crate::validate) fail structurally before any field is
/// examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A record: a fixed set of named, typed fields.
    Aggregate,
    /// A primitive or other single value.
    Scalar,
    /// A sequence or map.
    Collection,
    /// A pointer to some other value.
    Reference,
}

/// Engine-level visibility of a field.
///
/// An [`Internal`](Visibility::Internal) field that carries a non-empty
/// annotation is a structural violation: the engine refuses to evaluate rules
/// on fields the record does not export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// The field is part of the record's public surface.
    Exported,
    /// The field is private to the record.
    Internal,
}

/// A field's current value, as seen by the constraint evaluators.
///
/// Constraints only have kind-specific branches for [`Int`](FieldValue::Int)
/// and [`Text`](FieldValue::Text); any other kind fails every constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// An integer field, widened to `i64`.
    Int(i64),
    /// A text field, borrowed from the record.
    Text(&'a str),
    /// A floating-point field.
    Float(f64),
    /// A boolean field.
    Bool(bool),
}

/// Accessor reading one field out of a record.
pub type FieldAccessor<T> = for<'a> fn(&'a T) -> FieldValue<'a>;

/// Static metadata for one field of a record of type `T`.
///
/// Descriptors live in the `'static` table returned by
/// [`Describe::descriptors`]; the engine walks them in declaration order and
/// reads values through [`access`](FieldDescriptor::access), so a value can
/// only ever be fetched for a name the table itself produced.
pub struct FieldDescriptor<T> {
    /// Field name, unique within the record.
    pub name: &'static str,
    /// Engine-level visibility.
    pub visibility: Visibility,
    /// Raw annotation string; empty means the field is skipped.
    pub annotation: &'static str,
    /// Reads the field's current value from a record.
    pub access: FieldAccessor<T>,
}

// Manual impls: deriving would put unnecessary bounds on `T`, which is only
// ever behind a fn pointer here.
impl<T> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldDescriptor<T> {}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("annotation", &self.annotation)
            .finish_non_exhaustive()
    }
}

/// A type whose fields can be enumerated and read by name.
///
/// This is the registration-based stand-in for reflection: the impl is a pure
/// function of the type, carries no per-record state, and is usually generated
/// with [`describe!`](crate::describe!). The descriptor table lives for
/// `'static`, so implementors must be `'static` themselves - types borrowing
/// from elsewhere cannot register one.
///
/// Implementing the trait by hand is also fine:
///
/// ```
/// use fieldcheck::{Describe, FieldDescriptor, FieldValue, Shape, Visibility};
///
/// struct Port(u16);
///
/// impl Describe for Port {
///     fn shape() -> Shape {
///         Shape::Aggregate
///     }
///
///     fn descriptors() -> &'static [FieldDescriptor<Self>] {
///         const FIELDS: &[FieldDescriptor<Port>] = &[FieldDescriptor {
///             name: "number",
///             visibility: Visibility::Exported,
///             annotation: "minmax:1,65535",
///             access: |port| FieldValue::Int(port.0 as i64),
///         }];
///         FIELDS
///     }
/// }
///
/// assert!(fieldcheck::validate(&Port(8080)).is_ok());
/// ```
pub trait Describe: Sized + 'static {
    /// The runtime shape of this type.
    fn shape() -> Shape;

    /// The field table, in declaration order. Empty for non-aggregates.
    fn descriptors() -> &'static [FieldDescriptor<Self>];

    /// Look up a field's current value by name.
    ///
    /// Returns `None` only for names that [`descriptors`](Self::descriptors)
    /// never produced; callers inside the engine always hold such a name, so
    /// a `None` there would be a bug in the engine, not a validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::{Describe, FieldValue};
    ///
    /// struct Greeting {
    ///     text: String,
    /// }
    ///
    /// fieldcheck::describe! {
    ///     Greeting {
    ///         pub text: text = "",
    ///     }
    /// }
    ///
    /// let greeting = Greeting { text: "hello".into() };
    /// assert_eq!(greeting.field_value("text"), Some(FieldValue::Text("hello")));
    /// assert_eq!(greeting.field_value("missing"), None);
    /// ```
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        Self::descriptors()
            .iter()
            .find(|descriptor| descriptor.name == name)
            .map(|descriptor| (descriptor.access)(self))
    }
}

// Non-aggregate impls, so that handing a primitive to `validate` reports the
// structural error the same way a reflective validator would.
macro_rules! impl_non_aggregate {
    ($shape:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Describe for $ty {
                fn shape() -> Shape {
                    $shape
                }

                fn descriptors() -> &'static [FieldDescriptor<Self>] {
                    &[]
                }
            }
        )+
    };
}

impl_non_aggregate!(Shape::Scalar =>
    bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    String,
);

impl<T: 'static> Describe for Vec<T> {
    fn shape() -> Shape {
        Shape::Collection
    }

    fn descriptors() -> &'static [FieldDescriptor<Self>] {
        &[]
    }
}

// A boxed record is a pointer, not a record; callers validate the pointee.
impl<T: 'static> Describe for Box<T> {
    fn shape() -> Shape {
        Shape::Reference
    }

    fn descriptors() -> &'static [FieldDescriptor<Self>] {
        &[]
    }
}

/// Generate a [`Describe`] impl for a plain struct.
///
/// Each entry names a field, its value kind (`int`, `text`, `float`, or
/// `bool`), and its annotation string (`""` for none). A leading `pub` marks
/// the field [`Exported`](Visibility::Exported); without it the field is
/// [`Internal`](Visibility::Internal). The marker is engine-level metadata
/// and is independent of the field's Rust visibility - the macro must be
/// invoked where the fields are accessible.
///
/// # Examples
///
/// ```
/// use fieldcheck::Describe;
///
/// struct Account {
///     id: u32,
///     owner: String,
///     pin: String,
/// }
///
/// fieldcheck::describe! {
///     Account {
///         pub id: int = "min:1",
///         pub owner: text = "minmax:1,64",
///         pin: text = "",
///     }
/// }
///
/// assert_eq!(Account::descriptors()[1].name, "owner");
/// ```
#[macro_export]
macro_rules! describe {
    // Exported field.
    (@munch $ty:ty; [$($acc:expr,)*] pub $name:ident: $kind:ident = $ann:literal $(, $($rest:tt)*)?) => {
        $crate::describe!(@munch $ty;
            [$($acc,)* $crate::FieldDescriptor {
                name: stringify!($name),
                visibility: $crate::Visibility::Exported,
                annotation: $ann,
                access: |record: &$ty| $crate::describe!(@read record, $name, $kind),
            },]
            $($($rest)*)?);
    };

    // Internal field.
    (@munch $ty:ty; [$($acc:expr,)*] $name:ident: $kind:ident = $ann:literal $(, $($rest:tt)*)?) => {
        $crate::describe!(@munch $ty;
            [$($acc,)* $crate::FieldDescriptor {
                name: stringify!($name),
                visibility: $crate::Visibility::Internal,
                annotation: $ann,
                access: |record: &$ty| $crate::describe!(@read record, $name, $kind),
            },]
            $($($rest)*)?);
    };

    // All fields consumed: emit the impl.
    (@munch $ty:ty; [$($acc:expr,)*]) => {
        impl $crate::Describe for $ty {
            fn shape() -> $crate::Shape {
                $crate::Shape::Aggregate
            }

            fn descriptors() -> &'static [$crate::FieldDescriptor<Self>] {
                const FIELDS: &[$crate::FieldDescriptor<$ty>] = &[$($acc,)*];
                FIELDS
            }
        }
    };

    (@read $record:ident, $name:ident, int) => {
        $crate::FieldValue::Int($record.$name as i64)
    };
    (@read $record:ident, $name:ident, text) => {
        $crate::FieldValue::Text(&$record.$name)
    };
    (@read $record:ident, $name:ident, float) => {
        $crate::FieldValue::Float($record.$name as f64)
    };
    (@read $record:ident, $name:ident, bool) => {
        $crate::FieldValue::Bool($record.$name)
    };

    // Entry point.
    ($ty:ty { $($body:tt)* }) => {
        $crate::describe!(@munch $ty; [] $($body)*);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: String,
        count: u8,
        ratio: f64,
        active: bool,
        hidden: i32,
    }

    crate::describe! {
        Sample {
            pub name: text = "len:4",
            pub count: int = "max:10",
            pub ratio: float = "",
            pub active: bool = "",
            hidden: int = "min:0",
        }
    }

    fn sample() -> Sample {
        Sample {
            name: "abcd".into(),
            count: 3,
            ratio: 0.5,
            active: true,
            hidden: -1,
        }
    }

    #[test]
    fn test_aggregate_shape() {
        assert_eq!(Sample::shape(), Shape::Aggregate);
    }

    #[test]
    fn test_descriptors_in_declaration_order() {
        let names: Vec<_> = Sample::descriptors().iter().map(|d| d.name).collect();
        assert_eq!(names, ["name", "count", "ratio", "active", "hidden"]);
    }

    #[test]
    fn test_visibility_markers() {
        let descriptors = Sample::descriptors();
        assert_eq!(descriptors[0].visibility, Visibility::Exported);
        assert_eq!(descriptors[4].visibility, Visibility::Internal);
    }

    #[test]
    fn test_annotations_carried_verbatim() {
        let descriptors = Sample::descriptors();
        assert_eq!(descriptors[0].annotation, "len:4");
        assert_eq!(descriptors[2].annotation, "");
    }

    #[test]
    fn test_accessors_read_current_values() {
        let record = sample();
        let descriptors = Sample::descriptors();
        assert_eq!((descriptors[0].access)(&record), FieldValue::Text("abcd"));
        assert_eq!((descriptors[1].access)(&record), FieldValue::Int(3));
        assert_eq!((descriptors[2].access)(&record), FieldValue::Float(0.5));
        assert_eq!((descriptors[3].access)(&record), FieldValue::Bool(true));
        assert_eq!((descriptors[4].access)(&record), FieldValue::Int(-1));
    }

    #[test]
    fn test_field_value_lookup() {
        let record = sample();
        assert_eq!(record.field_value("count"), Some(FieldValue::Int(3)));
        assert_eq!(record.field_value("nope"), None);
    }

    #[test]
    fn test_field_value_lookup_through_generic_bound() {
        // The default method hands out a `'static` table for any implementor,
        // so it must stay callable behind a plain `T: Describe` bound.
        fn lookup<'a, T: Describe>(record: &'a T, name: &str) -> Option<FieldValue<'a>> {
            record.field_value(name)
        }
        let record = sample();
        assert_eq!(lookup(&record, "count"), Some(FieldValue::Int(3)));
        assert_eq!(lookup(&record, "nope"), None);
    }

    #[test]
    fn test_non_aggregate_shapes() {
        assert_eq!(i64::shape(), Shape::Scalar);
        assert_eq!(String::shape(), Shape::Scalar);
        assert_eq!(Vec::<u8>::shape(), Shape::Collection);
        assert_eq!(Box::<Sample>::shape(), Shape::Reference);
        assert!(i64::descriptors().is_empty());
    }

    #[test]
    fn test_descriptor_is_copy() {
        let descriptor = Sample::descriptors()[0];
        let copied = descriptor;
        assert_eq!(copied.name, "name");
    }

    #[test]
    fn test_descriptor_debug_omits_accessor() {
        let rendered = format!("{:?}", Sample::descriptors()[0]);
        assert!(rendered.contains("name"));
        assert!(rendered.contains("len:4"));
    }
}
