use derive_more::with_trait::Display;

/// GraphQL type kind
///
/// The GraphQL specification defines a number of type kinds - the meta type
/// of a type. Every category question asked about a type (can it be used as
/// an input, does it need a sub-selection, ...) is answered from its kind
/// alone.
///
/// Each category method matches on every variant without a wildcard, so a
/// new kind does not compile until every category has decided about it.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum TypeKind {
    /// ## Scalar types
    ///
    /// Scalar types appear as the leaf nodes of GraphQL queries. Strings,
    /// numbers, and booleans are the built in types, and while it's possible
    /// to define your own, it's relatively uncommon.
    #[display("SCALAR")]
    Scalar,

    /// ## Object types
    ///
    /// The most common type to be implemented by users. Objects have fields
    /// and can implement interfaces.
    #[display("OBJECT")]
    Object,

    /// ## Interface types
    ///
    /// Interface types are used to represent overlapping fields between
    /// multiple types, and can be queried for their concrete type.
    #[display("INTERFACE")]
    Interface,

    /// ## Union types
    ///
    /// Unions are similar to interfaces but can not contain any fields on
    /// their own.
    #[display("UNION")]
    Union,

    /// ## Enum types
    ///
    /// Like scalars, enum types appear as the leaf nodes of GraphQL queries.
    #[display("ENUM")]
    Enum,

    /// ## Input objects
    ///
    /// Represents complex values provided in queries _into_ the system.
    #[display("INPUT_OBJECT")]
    InputObject,

    /// ## List types
    ///
    /// Represent lists of other types.
    #[display("LIST")]
    List,

    /// ## Non-null types
    ///
    /// In GraphQL, nullable types are the default. By putting a `!` after a
    /// type, it becomes non-nullable.
    #[display("NON_NULL")]
    NonNull,
}

impl TypeKind {
    /// All the kinds, in introspection order.
    pub const ALL: [Self; 8] = [
        Self::Scalar,
        Self::Object,
        Self::Interface,
        Self::Union,
        Self::Enum,
        Self::InputObject,
        Self::List,
        Self::NonNull,
    ];

    /// Whether types of this kind can be used in input positions, e.g.
    /// arguments, variables or input object fields.
    pub const fn is_input(self) -> bool {
        match self {
            Self::Scalar | Self::Enum | Self::InputObject | Self::List | Self::NonNull => true,
            Self::Object | Self::Interface | Self::Union => false,
        }
    }

    /// Whether types of this kind can be the result of a field.
    pub const fn is_output(self) -> bool {
        match self {
            Self::Scalar | Self::Object | Self::Interface | Self::Union | Self::Enum => true,
            Self::InputObject | Self::List | Self::NonNull => false,
        }
    }

    /// Whether types of this kind are selected without a sub-selection.
    pub const fn is_leaf(self) -> bool {
        match self {
            Self::Scalar | Self::Enum => true,
            Self::Object
            | Self::Interface
            | Self::Union
            | Self::InputObject
            | Self::List
            | Self::NonNull => false,
        }
    }

    /// Whether types of this kind can be the parent of a field selection.
    pub const fn is_composite(self) -> bool {
        match self {
            Self::Object | Self::Interface | Self::Union => true,
            Self::Scalar | Self::Enum | Self::InputObject | Self::List | Self::NonNull => false,
        }
    }

    /// Whether types of this kind are resolved to a concrete object type at
    /// runtime.
    pub const fn is_abstract(self) -> bool {
        match self {
            Self::Interface | Self::Union => true,
            Self::Scalar
            | Self::Object
            | Self::Enum
            | Self::InputObject
            | Self::List
            | Self::NonNull => false,
        }
    }

    /// Whether types of this kind can represent `null` directly.
    pub const fn is_nullable(self) -> bool {
        match self {
            Self::Scalar
            | Self::Object
            | Self::Interface
            | Self::Union
            | Self::Enum
            | Self::InputObject
            | Self::List => true,
            Self::NonNull => false,
        }
    }

    /// Whether types of this kind carry a name of their own.
    pub const fn is_named(self) -> bool {
        match self {
            Self::Scalar
            | Self::Object
            | Self::Interface
            | Self::Union
            | Self::Enum
            | Self::InputObject => true,
            Self::List | Self::NonNull => false,
        }
    }

    /// Whether types of this kind are modifiers around exactly one other type.
    pub const fn is_wrapping(self) -> bool {
        match self {
            Self::List | Self::NonNull => true,
            Self::Scalar
            | Self::Object
            | Self::Interface
            | Self::Union
            | Self::Enum
            | Self::InputObject => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TypeKind::{self, *};

    fn members(category: fn(TypeKind) -> bool) -> Vec<TypeKind> {
        TypeKind::ALL.into_iter().filter(|k| category(*k)).collect()
    }

    #[test]
    fn input_kinds() {
        assert_eq!(
            members(TypeKind::is_input),
            [Scalar, Enum, InputObject, List, NonNull],
        );
    }

    #[test]
    fn output_kinds() {
        assert_eq!(
            members(TypeKind::is_output),
            [Scalar, Object, Interface, Union, Enum],
        );
    }

    #[test]
    fn leaf_kinds() {
        assert_eq!(members(TypeKind::is_leaf), [Scalar, Enum]);
    }

    #[test]
    fn composite_kinds() {
        assert_eq!(members(TypeKind::is_composite), [Object, Interface, Union]);
    }

    #[test]
    fn abstract_kinds() {
        assert_eq!(members(TypeKind::is_abstract), [Interface, Union]);
    }

    #[test]
    fn nullable_kinds() {
        assert_eq!(
            members(TypeKind::is_nullable),
            [Scalar, Object, Interface, Union, Enum, InputObject, List],
        );
    }

    #[test]
    fn named_and_wrapping_kinds_partition_all_kinds() {
        assert_eq!(
            members(TypeKind::is_named),
            [Scalar, Object, Interface, Union, Enum, InputObject],
        );
        assert_eq!(members(TypeKind::is_wrapping), [List, NonNull]);

        for kind in TypeKind::ALL {
            assert_ne!(kind.is_named(), kind.is_wrapping(), "{kind}");
        }
    }

    #[test]
    fn displays_introspection_names() {
        assert_eq!(InputObject.to_string(), "INPUT_OBJECT");
        assert_eq!(NonNull.to_string(), "NON_NULL");
    }
}
