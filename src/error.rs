//! Error types.
//!
//! Classification, unwrapping, validation and resolution never fail. Errors
//! only come out of capabilities supplied by schema authors ([`FieldError`])
//! and out of descriptor construction ([`SchemaError`]).

use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error, From};

use crate::{
    types::name::NameParseError,
    value::{DefaultScalarValue, Value},
};

/// Error reported by a parse, serialize or resolve capability
///
/// Any type implementing [`Display`] converts into a `FieldError`, so
/// capabilities can use `?` on most error types directly:
///
/// ```rust
/// use graphql_kinds::{FieldResult, Value};
///
/// fn parse_port(v: &Value) -> FieldResult<Value> {
///     let s = v.as_string_value().ok_or("expected a string")?;
///     let port: u16 = s.parse()?;
///     Ok(Value::scalar(i32::from(port)))
/// }
/// # assert!(parse_port(&Value::scalar("8080")).is_ok());
/// # assert!(parse_port(&Value::scalar("eighty")).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FieldError<S = DefaultScalarValue> {
    message: String,
    extensions: Value<S>,
}

impl<T: Display, S> From<T> for FieldError<S> {
    fn from(e: T) -> Self {
        Self {
            message: e.to_string(),
            extensions: Value::null(),
        }
    }
}

impl<S> FieldError<S> {
    /// Constructs a new error with additional `extensions` data.
    ///
    /// If `extensions` is [`Value::Null`], no extra data is attached.
    pub fn new<T: Display>(e: T, extensions: Value<S>) -> Self {
        Self {
            message: e.to_string(),
            extensions,
        }
    }

    /// Human-readable message of this error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Additional data attached to this error.
    pub fn extensions(&self) -> &Value<S> {
        &self.extensions
    }
}

/// Result of a capability call.
pub type FieldResult<T, S = DefaultScalarValue> = Result<T, FieldError<S>>;

/// Error of assembling type descriptors into a well-formed schema
#[derive(Clone, Debug, Display, Eq, Error, From, PartialEq)]
pub enum SchemaError {
    /// A non-null modifier was put directly around another non-null modifier.
    #[display("Type \"{_0}\" is already non-null and cannot be wrapped in non-null again")]
    #[from(ignore)]
    NestedNonNull(#[error(not(source))] String),

    /// A named type has a name that isn't a valid GraphQL name.
    #[display("Invalid type name: {_0}")]
    InvalidName(NameParseError),

    /// Two types were registered under the same name.
    #[display("Type \"{_0}\" is defined more than once")]
    #[from(ignore)]
    DuplicateType(#[error(not(source))] ArcStr),

    /// A wrapping type was registered where a named type is required.
    #[display("Type \"{_0}\" is not a named type")]
    #[from(ignore)]
    UnnamedType(#[error(not(source))] String),

    /// A type references a name that isn't registered.
    #[display("Type \"{referenced_by}\" references unknown type \"{name}\"")]
    #[from(ignore)]
    UnknownType {
        /// The missing type name.
        name: ArcStr,
        /// The type holding the reference.
        referenced_by: ArcStr,
    },

    /// A field, argument or input field references a type that cannot be
    /// used in that position, e.g. an input object as a field result.
    #[display("Type \"{name}\" cannot be used as {position} in \"{referenced_by}\"")]
    #[from(ignore)]
    InvalidTypePosition {
        /// The misplaced type.
        name: ArcStr,
        /// The type holding the reference.
        referenced_by: ArcStr,
        /// What the type was used as.
        position: &'static str,
    },

    /// An object or interface declares it implements a type that isn't an
    /// interface.
    #[display("Type \"{implementer}\" cannot implement non-interface type \"{name}\"")]
    #[from(ignore)]
    InvalidInterface {
        /// The implemented type, which isn't an interface.
        name: ArcStr,
        /// The object or interface declaring the implementation.
        implementer: ArcStr,
    },

    /// A union member isn't an object type.
    #[display("Type \"{name}\" cannot be a possible type of \"{abstract_type}\"")]
    #[from(ignore)]
    InvalidPossibleType {
        /// The offending member type.
        name: ArcStr,
        /// The union or interface it was attached to.
        abstract_type: ArcStr,
    },
}
