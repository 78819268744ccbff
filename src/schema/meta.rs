//! Types used to describe a `GraphQL` schema

use std::{fmt, sync::Arc};

use arcstr::ArcStr;
use indexmap::IndexMap;

use crate::{
    ast::Type,
    error::{FieldError, FieldResult, SchemaError},
    types::base::TypeKind,
    value::{DefaultScalarValue, ScalarValue, Value},
};

/// Parse capability of a leaf type: coerces a raw input [`Value`] into its
/// internal representation, or rejects it.
pub type ParseFn<S> = Arc<dyn Fn(&Value<S>) -> FieldResult<Value<S>, S> + Send + Sync>;

/// Serialize capability of a leaf type: turns an internal representation into
/// a result [`Value`].
pub type SerializeFn<S> = Arc<dyn Fn(&Value<S>) -> FieldResult<Value<S>, S> + Send + Sync>;

/// Resolve capability of a [`Field`]: computes the field's value from its
/// parent value and its arguments.
pub type ResolveFn<S> =
    Arc<dyn Fn(&Value<S>, &IndexMap<String, Value<S>>) -> FieldResult<Value<S>, S> + Send + Sync>;

/// Resolve-type capability of an abstract type: picks the concrete type
/// representing a runtime value.
pub type ResolveTypeFn<S> = Arc<dyn Fn(&Value<S>) -> Arc<MetaType<S>> + Send + Sync>;

/// Whether an item is deprecated, with context.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum DeprecationStatus {
    /// The field/variant is not deprecated.
    Current,
    /// The field/variant is deprecated, with an optional reason
    Deprecated(Option<ArcStr>),
}

impl DeprecationStatus {
    /// An optional reason for the deprecation, or none if `Current`.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Current => None,
            Self::Deprecated(rsn) => rsn.as_deref(),
        }
    }
}

/// Scalar type metadata
#[derive(Clone)]
pub struct ScalarMeta<S> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    pub(crate) parse_fn: Option<ParseFn<S>>,
    pub(crate) serialize_fn: Option<SerializeFn<S>>,
}

/// Object type metadata
#[derive(Clone, Debug)]
pub struct ObjectMeta<S> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub fields: IndexMap<ArcStr, Field<S>>,
    #[doc(hidden)]
    pub interface_names: Vec<ArcStr>,
}

/// Interface type metadata
#[derive(Clone)]
pub struct InterfaceMeta<S> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub fields: IndexMap<ArcStr, Field<S>>,
    #[doc(hidden)]
    pub interface_names: Vec<ArcStr>,
    pub(crate) resolve_type_fn: Option<ResolveTypeFn<S>>,
}

/// Union type metadata
#[derive(Clone)]
pub struct UnionMeta<S> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub of_type_names: Vec<ArcStr>,
    pub(crate) resolve_type_fn: Option<ResolveTypeFn<S>>,
}

/// Enum type metadata
///
/// Parsing and serializing are derived from the declared values: a raw value
/// naming a member parses into that member's internal value, and an internal
/// value serializes back into its member's name.
#[derive(Clone, Debug)]
pub struct EnumMeta<S> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub values: IndexMap<ArcStr, EnumValue<S>>,
}

/// Input object metadata
#[derive(Clone, Debug)]
pub struct InputObjectMeta<S> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub input_fields: IndexMap<ArcStr, Argument<S>>,
}

/// List type metadata
#[derive(Clone, Debug)]
pub struct ListMeta<S> {
    #[doc(hidden)]
    pub of_type: Arc<MetaType<S>>,
}

/// Non-null type metadata
///
/// Can only be built through [`NonNullMeta::new()`], which refuses to wrap a
/// type that is non-null already.
#[derive(Clone, Debug)]
pub struct NonNullMeta<S> {
    of_type: Arc<MetaType<S>>,
}

/// Generic type metadata
///
/// Descriptors are assembled once and shared read-only afterwards, usually
/// behind an [`Arc`].
#[derive(Clone, Debug)]
pub enum MetaType<S = DefaultScalarValue> {
    #[doc(hidden)]
    Scalar(ScalarMeta<S>),
    #[doc(hidden)]
    Object(ObjectMeta<S>),
    #[doc(hidden)]
    Interface(InterfaceMeta<S>),
    #[doc(hidden)]
    Union(UnionMeta<S>),
    #[doc(hidden)]
    Enum(EnumMeta<S>),
    #[doc(hidden)]
    InputObject(InputObjectMeta<S>),
    #[doc(hidden)]
    List(ListMeta<S>),
    #[doc(hidden)]
    NonNull(NonNullMeta<S>),
}

crate::sa::assert_impl_all!(MetaType<DefaultScalarValue>: Send, Sync);

/// Metadata for a field
#[derive(Clone)]
pub struct Field<S> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub arguments: Option<Vec<Argument<S>>>,
    #[doc(hidden)]
    pub field_type: Type,
    #[doc(hidden)]
    pub deprecation_status: DeprecationStatus,
    pub(crate) resolve_fn: Option<ResolveFn<S>>,
}

/// Metadata for an argument to a field, or for an input object field
#[derive(Clone, Debug)]
pub struct Argument<S> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub arg_type: Type,
    #[doc(hidden)]
    pub default_value: Option<Value<S>>,
}

/// Metadata for a single value in an enum
#[derive(Clone, Debug)]
pub struct EnumValue<S> {
    /// The name of the enum value
    ///
    /// This is the string literal representation of the enum in responses.
    pub name: ArcStr,
    /// The internal value this enum value stands for.
    pub value: Value<S>,
    /// The optional description of the enum value.
    ///
    /// Note: this is not the description of the enum itself; it's the
    /// description of this enum _value_.
    pub description: Option<ArcStr>,
    /// Whether the field is deprecated or not, with an optional reason.
    pub deprecation_status: DeprecationStatus,
}

impl<S> MetaType<S> {
    /// Wraps `of_type` into a list.
    pub fn list_of(of_type: Arc<Self>) -> Self {
        ListMeta::new(of_type).into_meta()
    }

    /// Wraps `of_type` into a non-null modifier.
    ///
    /// # Errors
    ///
    /// If `of_type` is non-null already.
    pub fn non_null_of(of_type: Arc<Self>) -> Result<Self, SchemaError> {
        NonNullMeta::new(of_type).map(NonNullMeta::into_meta)
    }

    /// Access the name of the type, if applicable
    ///
    /// Lists and non-null wrappers don't have names.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Scalar(ScalarMeta { name, .. })
            | Self::Object(ObjectMeta { name, .. })
            | Self::Interface(InterfaceMeta { name, .. })
            | Self::Union(UnionMeta { name, .. })
            | Self::Enum(EnumMeta { name, .. })
            | Self::InputObject(InputObjectMeta { name, .. }) => Some(name),
            Self::List(_) | Self::NonNull(_) => None,
        }
    }

    /// Access the description of the type, if applicable
    pub fn description(&self) -> Option<&ArcStr> {
        match self {
            Self::Scalar(ScalarMeta { description, .. })
            | Self::Object(ObjectMeta { description, .. })
            | Self::Interface(InterfaceMeta { description, .. })
            | Self::Union(UnionMeta { description, .. })
            | Self::Enum(EnumMeta { description, .. })
            | Self::InputObject(InputObjectMeta { description, .. }) => description.as_ref(),
            Self::List(_) | Self::NonNull(_) => None,
        }
    }

    /// The [`TypeKind`] of this type.
    pub fn type_kind(&self) -> TypeKind {
        match self {
            Self::Scalar(_) => TypeKind::Scalar,
            Self::Object(_) => TypeKind::Object,
            Self::Interface(_) => TypeKind::Interface,
            Self::Union(_) => TypeKind::Union,
            Self::Enum(_) => TypeKind::Enum,
            Self::InputObject(_) => TypeKind::InputObject,
            Self::List(_) => TypeKind::List,
            Self::NonNull(_) => TypeKind::NonNull,
        }
    }

    /// Returns true if the type, once unwrapped, can be used in input
    /// positions, e.g. arguments or variables
    ///
    /// Scalars, enums and input objects are input types, as well as any list
    /// or non-null wrapper around them.
    pub fn is_input_type(&self) -> bool {
        self.named_type().type_kind().is_input()
    }

    /// Returns true if the type, once unwrapped, can be the result of a field
    pub fn is_output_type(&self) -> bool {
        self.named_type().type_kind().is_output()
    }

    /// Returns true if the type, once unwrapped, can occur in leaf positions
    /// in queries
    ///
    /// Only enums and scalars are leaf types.
    pub fn is_leaf_type(&self) -> bool {
        self.named_type().type_kind().is_leaf()
    }

    /// Returns true if the type is a composite type
    ///
    /// Objects, interfaces, and unions are composite.
    pub fn is_composite_type(&self) -> bool {
        self.type_kind().is_composite()
    }

    /// Returns true if the type is abstract
    ///
    /// Only interfaces and unions are abstract types.
    pub fn is_abstract_type(&self) -> bool {
        self.type_kind().is_abstract()
    }

    /// Returns true if the type accepts `null` as is, i.e. isn't non-null.
    pub fn is_nullable_type(&self) -> bool {
        self.type_kind().is_nullable()
    }

    /// Returns true if the type is a non-null wrapper.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Returns true if the type carries a name of its own.
    pub fn is_named(&self) -> bool {
        self.type_kind().is_named()
    }

    /// Returns true if the type is a list or non-null wrapper.
    pub fn is_wrapped(&self) -> bool {
        self.type_kind().is_wrapping()
    }

    /// Returns true if the type is an object type.
    pub fn is_object_type(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns true if the type exposes a field mapping
    ///
    /// Objects, interfaces, and input objects have fields.
    pub fn has_fields(&self) -> bool {
        self.fields().is_some() || self.input_fields().is_some()
    }

    /// Strips every list and non-null wrapper, returning the named type
    /// underneath.
    pub fn named_type(&self) -> &Self {
        let mut t = self;
        while let Self::List(ListMeta { of_type }) | Self::NonNull(NonNullMeta { of_type }) = t {
            t = &**of_type;
        }
        t
    }

    /// Strips a single non-null wrapper, if any.
    ///
    /// A non-null list of non-null items becomes a nullable list of non-null
    /// items; the items are left alone.
    pub fn nullable(&self) -> &Self {
        match self {
            Self::NonNull(NonNullMeta { of_type }) => &**of_type,
            t => t,
        }
    }

    /// Strips a single wrapper of either kind, if any.
    pub fn unwrap(&self) -> &Self {
        match self {
            Self::List(ListMeta { of_type }) | Self::NonNull(NonNullMeta { of_type }) => &**of_type,
            t => t,
        }
    }

    /// Access the fields of an object or interface type
    pub fn fields(&self) -> Option<&IndexMap<ArcStr, Field<S>>> {
        match self {
            Self::Object(ObjectMeta { fields, .. })
            | Self::Interface(InterfaceMeta { fields, .. }) => Some(fields),
            _ => None,
        }
    }

    /// Access a field's meta data given its name
    ///
    /// Only objects and interfaces have fields. This method always returns
    /// `None` for other types. The name is matched exactly.
    pub fn field_by_name(&self, name: &str) -> Option<&Field<S>> {
        self.fields()?.get(name)
    }

    /// Access the input fields of an input object type
    pub fn input_fields(&self) -> Option<&IndexMap<ArcStr, Argument<S>>> {
        match self {
            Self::InputObject(InputObjectMeta { input_fields, .. }) => Some(input_fields),
            _ => None,
        }
    }

    /// Access an input field's meta data given its name
    ///
    /// Only input objects have input fields. This method always returns
    /// `None` for other types. The name is matched exactly.
    pub fn input_field_by_name(&self, name: &str) -> Option<&Argument<S>> {
        self.input_fields()?.get(name)
    }

    /// Access the resolve-type capability of an abstract type, if one is
    /// configured.
    pub fn resolve_type_fn(&self) -> Option<&ResolveTypeFn<S>> {
        match self {
            Self::Interface(InterfaceMeta {
                resolve_type_fn, ..
            })
            | Self::Union(UnionMeta {
                resolve_type_fn, ..
            }) => resolve_type_fn.as_ref(),
            _ => None,
        }
    }

    /// Returns true if the type has a parse capability
    ///
    /// Enums always have one; scalars only if it was configured.
    pub fn has_parse_fn(&self) -> bool {
        match self {
            Self::Scalar(ScalarMeta { parse_fn, .. }) => parse_fn.is_some(),
            Self::Enum(_) => true,
            _ => false,
        }
    }

    /// Construct a `Type` literal instance based on the metadata
    pub fn as_type(&self) -> Type {
        match self {
            Self::List(ListMeta { of_type }) => Type::list(of_type.as_type()),
            Self::NonNull(NonNullMeta { of_type }) => of_type.as_type().non_null(),
            named => Type::named(named.name().unwrap_or_default()),
        }
    }
}

impl<S: ScalarValue> MetaType<S> {
    /// Runs the parse capability of the type against `value`.
    ///
    /// Returns [`None`] if the type has no parse capability.
    pub fn parse_value(&self, value: &Value<S>) -> Option<FieldResult<Value<S>, S>> {
        match self {
            Self::Scalar(ScalarMeta {
                parse_fn: Some(parse),
                ..
            }) => Some(parse(value)),
            Self::Enum(meta) => Some(meta.parse(value)),
            _ => None,
        }
    }

    /// Runs the serialize capability of the type against `value`.
    ///
    /// Returns [`None`] if the type has no serialize capability.
    pub fn serialize_value(&self, value: &Value<S>) -> Option<FieldResult<Value<S>, S>> {
        match self {
            Self::Scalar(ScalarMeta {
                serialize_fn: Some(serialize),
                ..
            }) => Some(serialize(value)),
            Self::Enum(meta) => Some(meta.serialize(value)),
            _ => None,
        }
    }
}

impl<S> fmt::Display for MetaType<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(ListMeta { of_type }) => write!(f, "[{of_type}]"),
            Self::NonNull(NonNullMeta { of_type }) => write!(f, "{of_type}!"),
            named => f.write_str(named.name().unwrap_or_default()),
        }
    }
}

impl<S> ScalarMeta<S> {
    /// Builds a new [`ScalarMeta`] type with the specified `name`.
    ///
    /// Without a parse capability any non-null value is accepted for it.
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            description: None,
            parse_fn: None,
            serialize_fn: None,
        }
    }

    /// Sets the `description` of this [`ScalarMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the parse capability of this [`ScalarMeta`] type.
    #[must_use]
    pub fn parse_with<F>(mut self, parse: F) -> Self
    where
        F: Fn(&Value<S>) -> FieldResult<Value<S>, S> + Send + Sync + 'static,
    {
        self.parse_fn = Some(Arc::new(parse));
        self
    }

    /// Sets the serialize capability of this [`ScalarMeta`] type.
    #[must_use]
    pub fn serialize_with<F>(mut self, serialize: F) -> Self
    where
        F: Fn(&Value<S>) -> FieldResult<Value<S>, S> + Send + Sync + 'static,
    {
        self.serialize_fn = Some(Arc::new(serialize));
        self
    }

    /// Wraps this [`ScalarMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType<S> {
        MetaType::Scalar(self)
    }
}

impl<S> ObjectMeta<S> {
    /// Build a new [`ObjectMeta`] type with the specified `name` and `fields`.
    pub fn new(name: impl Into<ArcStr>, fields: impl IntoIterator<Item = Field<S>>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: fields.into_iter().map(|f| (f.name.clone(), f)).collect(),
            interface_names: vec![],
        }
    }

    /// Sets the `description` of this [`ObjectMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the `interfaces` this [`ObjectMeta`] type implements.
    ///
    /// Overwrites any previously set list of interfaces.
    #[must_use]
    pub fn interfaces(mut self, interfaces: &[Type]) -> Self {
        self.interface_names = interfaces
            .iter()
            .map(|t| t.innermost_name().into())
            .collect();
        self
    }

    /// Wraps this [`ObjectMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType<S> {
        MetaType::Object(self)
    }
}

impl<S> InterfaceMeta<S> {
    /// Builds a new [`InterfaceMeta`] type with the specified `name` and
    /// `fields`.
    pub fn new(name: impl Into<ArcStr>, fields: impl IntoIterator<Item = Field<S>>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: fields.into_iter().map(|f| (f.name.clone(), f)).collect(),
            interface_names: vec![],
            resolve_type_fn: None,
        }
    }

    /// Sets the `description` of this [`InterfaceMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the `interfaces` this [`InterfaceMeta`] interface implements.
    ///
    /// Overwrites any previously set list of interfaces.
    #[must_use]
    pub fn interfaces(mut self, interfaces: &[Type]) -> Self {
        self.interface_names = interfaces
            .iter()
            .map(|t| t.innermost_name().into())
            .collect();
        self
    }

    /// Sets the resolve-type capability of this [`InterfaceMeta`] type.
    #[must_use]
    pub fn resolve_type_with<F>(mut self, resolve_type: F) -> Self
    where
        F: Fn(&Value<S>) -> Arc<MetaType<S>> + Send + Sync + 'static,
    {
        self.resolve_type_fn = Some(Arc::new(resolve_type));
        self
    }

    /// Wraps this [`InterfaceMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType<S> {
        MetaType::Interface(self)
    }
}

impl<S> UnionMeta<S> {
    /// Build a new [`UnionMeta`] type with the specified `name` and possible
    /// [`Type`]s.
    pub fn new(name: impl Into<ArcStr>, of_types: &[Type]) -> Self {
        Self {
            name: name.into(),
            description: None,
            of_type_names: of_types.iter().map(|t| t.innermost_name().into()).collect(),
            resolve_type_fn: None,
        }
    }

    /// Sets the `description` of this [`UnionMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the resolve-type capability of this [`UnionMeta`] type.
    #[must_use]
    pub fn resolve_type_with<F>(mut self, resolve_type: F) -> Self
    where
        F: Fn(&Value<S>) -> Arc<MetaType<S>> + Send + Sync + 'static,
    {
        self.resolve_type_fn = Some(Arc::new(resolve_type));
        self
    }

    /// Wraps this [`UnionMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType<S> {
        MetaType::Union(self)
    }
}

impl<S> EnumMeta<S> {
    /// Build a new [`EnumMeta`] type with the specified `name` and possible
    /// `values`.
    pub fn new(name: impl Into<ArcStr>, values: impl IntoIterator<Item = EnumValue<S>>) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: values.into_iter().map(|v| (v.name.clone(), v)).collect(),
        }
    }

    /// Sets the `description` of this [`EnumMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wraps this [`EnumMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType<S> {
        MetaType::Enum(self)
    }
}

impl<S: ScalarValue> EnumMeta<S> {
    /// Parses a raw value naming one of the members into that member's
    /// internal value.
    ///
    /// Both enum literals (`MUSEUM`) and strings (`"MUSEUM"`) are accepted.
    ///
    /// # Errors
    ///
    /// If `value` doesn't name a member.
    pub fn parse(&self, value: &Value<S>) -> FieldResult<Value<S>, S> {
        value
            .as_enum_value()
            .or_else(|| value.as_string_value())
            .and_then(|name| self.values.get(name))
            .map(|v| v.value.clone())
            .ok_or_else(|| {
                FieldError::from(format!(
                    "Enum \"{}\" cannot represent value: {value}",
                    self.name,
                ))
            })
    }

    /// Serializes an internal value into the name of its member.
    ///
    /// # Errors
    ///
    /// If no member holds `value`.
    pub fn serialize(&self, value: &Value<S>) -> FieldResult<Value<S>, S> {
        self.values
            .values()
            .find(|v| v.value == *value)
            .map(|v| Value::enum_value(&v.name))
            .ok_or_else(|| {
                FieldError::from(format!(
                    "Enum \"{}\" cannot serialize value: {value}",
                    self.name,
                ))
            })
    }
}

impl<S> InputObjectMeta<S> {
    /// Builds a new [`InputObjectMeta`] type with the specified `name` and
    /// `input_fields`.
    pub fn new(
        name: impl Into<ArcStr>,
        input_fields: impl IntoIterator<Item = Argument<S>>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            input_fields: input_fields
                .into_iter()
                .map(|f| (f.name.clone(), f))
                .collect(),
        }
    }

    /// Set the `description` of this [`InputObjectMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wraps this [`InputObjectMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType<S> {
        MetaType::InputObject(self)
    }
}

impl<S> ListMeta<S> {
    /// Build a new [`ListMeta`] type by wrapping the specified type.
    pub fn new(of_type: Arc<MetaType<S>>) -> Self {
        Self { of_type }
    }

    /// Wraps this [`ListMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType<S> {
        MetaType::List(self)
    }
}

impl<S> NonNullMeta<S> {
    /// Build a new [`NonNullMeta`] type by wrapping the specified type.
    ///
    /// # Errors
    ///
    /// If `of_type` is a non-null type itself: `T!!` is not a GraphQL type.
    pub fn new(of_type: Arc<MetaType<S>>) -> Result<Self, SchemaError> {
        if of_type.is_non_null() {
            return Err(SchemaError::NestedNonNull(of_type.to_string()));
        }
        Ok(Self { of_type })
    }

    /// The wrapped type, which is never non-null.
    pub fn of_type(&self) -> &Arc<MetaType<S>> {
        &self.of_type
    }

    /// Wraps this [`NonNullMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType<S> {
        MetaType::NonNull(self)
    }
}

impl<S> Field<S> {
    /// Builds a new [`Field`] of the given [`Type`] with the given `name`.
    pub fn new(name: impl Into<ArcStr>, field_type: Type) -> Self {
        Self {
            name: name.into(),
            description: None,
            arguments: None,
            field_type,
            deprecation_status: DeprecationStatus::Current,
            resolve_fn: None,
        }
    }

    /// Set the `description` of this [`Field`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds an `argument` to this [`Field`].
    ///
    /// Arguments are unordered and can't contain duplicates by name.
    #[must_use]
    pub fn argument(mut self, argument: Argument<S>) -> Self {
        self.arguments.get_or_insert_with(Vec::new).push(argument);
        self
    }

    /// Sets this [`Field`] as deprecated with an optional `reason`.
    ///
    /// Overwrites any previously set deprecation reason.
    #[must_use]
    pub fn deprecated(mut self, reason: Option<ArcStr>) -> Self {
        self.deprecation_status = DeprecationStatus::Deprecated(reason);
        self
    }

    /// Sets the resolve capability of this [`Field`].
    #[must_use]
    pub fn resolve_with<F>(mut self, resolve: F) -> Self
    where
        F: Fn(&Value<S>, &IndexMap<String, Value<S>>) -> FieldResult<Value<S>, S>
            + Send
            + Sync
            + 'static,
    {
        self.resolve_fn = Some(Arc::new(resolve));
        self
    }

    /// Access an argument's meta data given its name
    pub fn argument_by_name(&self, name: &str) -> Option<&Argument<S>> {
        self.arguments.as_ref()?.iter().find(|a| a.name == name)
    }

    /// Access the resolve capability of this [`Field`], if one is configured.
    pub fn resolve_fn(&self) -> Option<&ResolveFn<S>> {
        self.resolve_fn.as_ref()
    }
}

impl<S> Argument<S> {
    /// Builds a new [`Argument`] of the given [`Type`] with the given `name`.
    pub fn new(name: impl Into<ArcStr>, arg_type: Type) -> Self {
        Self {
            name: name.into(),
            description: None,
            arg_type,
            default_value: None,
        }
    }

    /// Sets the `description` of this [`Argument`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the default value of this [`Argument`].
    ///
    /// Overwrites any previously set default value.
    #[must_use]
    pub fn default_value(mut self, val: Value<S>) -> Self {
        self.default_value = Some(val);
        self
    }
}

impl<S> EnumValue<S> {
    /// Constructs a new [`EnumValue`] with the provided `name`.
    ///
    /// The internal value defaults to the name itself, as an enum literal.
    pub fn new(name: impl Into<ArcStr>) -> Self {
        let name = name.into();
        Self {
            value: Value::enum_value(&name),
            name,
            description: None,
            deprecation_status: DeprecationStatus::Current,
        }
    }

    /// Sets the internal `value` of this [`EnumValue`].
    #[must_use]
    pub fn value(mut self, value: Value<S>) -> Self {
        self.value = value;
        self
    }

    /// Sets the `description` of this [`EnumValue`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets this [`EnumValue`] as deprecated with an optional `reason`.
    ///
    /// Overwrites any previously set deprecation reason.
    #[must_use]
    pub fn deprecated(mut self, reason: Option<ArcStr>) -> Self {
        self.deprecation_status = DeprecationStatus::Deprecated(reason);
        self
    }
}

impl<S> fmt::Debug for ScalarMeta<S> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("ScalarMeta")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl<S: fmt::Debug> fmt::Debug for InterfaceMeta<S> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("InterfaceMeta")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("fields", &self.fields)
            .field("interface_names", &self.interface_names)
            .finish_non_exhaustive()
    }
}

impl<S> fmt::Debug for UnionMeta<S> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("UnionMeta")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("of_type_names", &self.of_type_names)
            .finish_non_exhaustive()
    }
}

impl<S: fmt::Debug> fmt::Debug for Field<S> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Field")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("arguments", &self.arguments)
            .field("field_type", &self.field_type)
            .field("deprecation_status", &self.deprecation_status)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        ast::Type,
        error::SchemaError,
        value::Value,
    };

    use super::{
        Argument, EnumMeta, EnumValue, Field, InputObjectMeta, MetaType, NonNullMeta, ObjectMeta,
        ScalarMeta,
    };

    fn string() -> Arc<MetaType> {
        Arc::new(ScalarMeta::new("String").into_meta())
    }

    #[test]
    fn non_null_refuses_non_null() {
        let non_null = Arc::new(MetaType::non_null_of(string()).unwrap());

        let err = NonNullMeta::new(non_null).unwrap_err();

        assert_eq!(err, SchemaError::NestedNonNull("String!".into()));
    }

    #[test]
    fn non_null_accepts_list_of_non_null() {
        let inner = Arc::new(MetaType::non_null_of(string()).unwrap());
        let list = Arc::new(MetaType::list_of(inner));

        let t = MetaType::non_null_of(list).unwrap();

        assert_eq!(t.to_string(), "[String!]!");
        assert_eq!(t.as_type(), Type::list(Type::named("String").non_null()).non_null());
    }

    #[test]
    fn unwrap_and_nullable_peel_one_level() {
        let inner = Arc::new(MetaType::non_null_of(string()).unwrap());
        let list = Arc::new(MetaType::list_of(inner));
        let t = MetaType::non_null_of(list).unwrap();

        assert_eq!(t.nullable().to_string(), "[String!]");
        assert_eq!(t.unwrap().to_string(), "[String!]");
        assert_eq!(t.unwrap().unwrap().to_string(), "String!");
        assert_eq!(t.nullable().nullable().to_string(), "[String!]");
        assert_eq!(t.named_type().to_string(), "String");
        assert_eq!(t.named_type().name(), Some("String"));
    }

    #[test]
    fn named_type_of_named_type_is_itself() {
        let s = string();

        assert!(std::ptr::eq(s.named_type(), &*s));
        assert!(std::ptr::eq(s.unwrap(), &*s));
        assert!(std::ptr::eq(s.nullable(), &*s));
    }

    #[test]
    fn field_lookup_is_exact() {
        let trip: MetaType = ObjectMeta::new(
            "Trip",
            [
                Field::new("id", Type::named("ID").non_null()),
                Field::new("name", Type::named("String")),
            ],
        )
        .into_meta();

        assert_eq!(
            trip.field_by_name("id").map(|f| f.field_type.to_string()),
            Some("ID!".into()),
        );
        assert!(trip.field_by_name("Id").is_none());
        assert!(trip.field_by_name("missing").is_none());
        assert!(trip.input_field_by_name("id").is_none());
        assert_eq!(
            trip.fields().map(|f| f.keys().map(|k| k.as_str()).collect::<Vec<_>>()),
            Some(vec!["id", "name"]),
        );
    }

    #[test]
    fn input_field_lookup() {
        let filter: MetaType = InputObjectMeta::new(
            "TripFilter",
            [Argument::new("kind", Type::named("TripKind")).default_value(Value::enum_value("MUSEUM"))],
        )
        .into_meta();

        let kind = filter.input_field_by_name("kind").unwrap();
        assert_eq!(kind.default_value, Some(Value::enum_value("MUSEUM")));
        assert!(filter.field_by_name("kind").is_none());
        assert!(filter.has_fields());
    }

    #[test]
    fn field_arguments() {
        let field: Field<crate::DefaultScalarValue> = Field::new("trips", Type::list(Type::named("Trip")))
            .argument(Argument::new("first", Type::named("Int")))
            .argument(Argument::new("after", Type::named("String")))
            .deprecated(Some("use `tripsConnection`".into()));

        assert_eq!(
            field.argument_by_name("first").map(|a| a.arg_type.to_string()),
            Some("Int".into()),
        );
        assert!(field.argument_by_name("last").is_none());
        assert_eq!(field.deprecation_status.reason(), Some("use `tripsConnection`"));
    }

    #[test]
    fn enum_parses_and_serializes_members() {
        let kind: MetaType = EnumMeta::new(
            "TripKind",
            [
                EnumValue::new("MUSEUM").value(Value::scalar(1)),
                EnumValue::new("PARK").value(Value::scalar(2)),
            ],
        )
        .into_meta();

        assert_eq!(
            kind.parse_value(&Value::enum_value("PARK")).unwrap(),
            Ok(Value::scalar(2)),
        );
        assert_eq!(
            kind.parse_value(&Value::scalar("MUSEUM")).unwrap(),
            Ok(Value::scalar(1)),
        );
        assert_eq!(
            kind.parse_value(&Value::enum_value("ZOO"))
                .unwrap()
                .unwrap_err()
                .message(),
            r#"Enum "TripKind" cannot represent value: ZOO"#,
        );
        assert_eq!(
            kind.serialize_value(&Value::scalar(2)).unwrap(),
            Ok(Value::enum_value("PARK")),
        );
        assert!(kind.serialize_value(&Value::scalar(3)).unwrap().is_err());
    }

    #[test]
    fn scalar_capabilities_are_optional() {
        let plain = ScalarMeta::<crate::DefaultScalarValue>::new("Opaque").into_meta();

        assert!(!plain.has_parse_fn());
        assert!(plain.parse_value(&Value::scalar(1)).is_none());
        assert!(plain.serialize_value(&Value::scalar(1)).is_none());

        let upper = ScalarMeta::new("Upper")
            .serialize_with(|v: &Value| {
                let s = v.as_string_value().ok_or("not a string")?;
                Ok(Value::scalar(s.to_uppercase()))
            })
            .into_meta();

        assert_eq!(
            upper.serialize_value(&Value::scalar("trip")).unwrap(),
            Ok(Value::scalar("TRIP")),
        );
    }
}
