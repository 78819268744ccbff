use std::fmt;

use arcstr::ArcStr;

/// A type literal, used to reference a type by name
///
/// Fields, arguments and union members point at other types through literals
/// rather than through descriptors, so a schema may be self-referential (an
/// object whose field returns the object itself). A literal carries no
/// semantic information and might refer to types that do not exist; it is
/// turned into a descriptor by [`SchemaType::make_type`].
///
/// The variants make a non-null modifier directly around another non-null
/// modifier unrepresentable.
///
/// [`SchemaType::make_type`]: crate::SchemaType::make_type
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Type {
    /// A nullable named type, e.g. `String`
    Named(ArcStr),
    /// A nullable list type, e.g. `[String]`
    ///
    /// The list itself is what's nullable, the containing type might be non-null.
    List(Box<Type>),
    /// A non-null named type, e.g. `String!`
    NonNullNamed(ArcStr),
    /// A non-null list type, e.g. `[String]!`.
    ///
    /// The list itself is what's non-null, the containing type might be null.
    NonNullList(Box<Type>),
}

impl Type {
    /// Builds a nullable named type literal.
    pub fn named(name: impl Into<ArcStr>) -> Self {
        Self::Named(name.into())
    }

    /// Builds a nullable list of the given type.
    pub fn list(of_type: Self) -> Self {
        Self::List(Box::new(of_type))
    }

    /// Makes this type non-null.
    ///
    /// Already non-null types are returned as is.
    #[must_use]
    pub fn non_null(self) -> Self {
        match self {
            Self::Named(n) => Self::NonNullNamed(n),
            Self::List(l) => Self::NonNullList(l),
            t @ (Self::NonNullNamed(_) | Self::NonNullList(_)) => t,
        }
    }

    /// Get the name of a named type.
    ///
    /// Only applies to named types; lists will return `None`.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(n) | Self::NonNullNamed(n) => Some(n),
            Self::List(_) | Self::NonNullList(_) => None,
        }
    }

    /// Get the innermost name by unpacking lists
    ///
    /// All type literals contain exactly one named type.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::Named(n) | Self::NonNullNamed(n) => n,
            Self::List(l) | Self::NonNullList(l) => l.innermost_name(),
        }
    }

    /// Determines if a type only can represent non-null values.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNullNamed(_) | Self::NonNullList(_))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => write!(f, "{n}"),
            Self::NonNullNamed(n) => write!(f, "{n}!"),
            Self::List(t) => write!(f, "[{t}]"),
            Self::NonNullList(t) => write!(f, "[{t}]!"),
        }
    }
}
