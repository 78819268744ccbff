use std::sync::Arc;

use arcstr::ArcStr;
use fnv::FnvHashMap;

use crate::{
    ast::Type,
    error::SchemaError,
    schema::meta::{
        Argument, Field, InputObjectMeta, InterfaceMeta, MetaType, ObjectMeta, UnionMeta,
    },
    types::name::Name,
    value::DefaultScalarValue,
};

#[derive(Clone, Copy)]
enum Position {
    FieldResult,
    Input,
}

/// Named types of a schema, indexed by name
///
/// Built once from already assembled descriptors. Construction checks what
/// individual descriptors cannot check on their own: names are valid and
/// unique, every name a type refers to is registered, and every reference
/// sits in a position its type allows.
#[derive(Debug)]
pub struct SchemaType<S = DefaultScalarValue> {
    types: FnvHashMap<ArcStr, Arc<MetaType<S>>>,
}

crate::sa::assert_impl_all!(SchemaType<DefaultScalarValue>: Send, Sync);

impl<S> SchemaType<S> {
    /// Registers the given named `types`.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::UnnamedType`] if a list or non-null type is given.
    /// - [`SchemaError::InvalidName`] if a name isn't a valid GraphQL name.
    /// - [`SchemaError::DuplicateType`] if two types share a name.
    /// - [`SchemaError::UnknownType`] if a field, argument, interface or union
    ///   member refers to a name not given.
    /// - [`SchemaError::InvalidTypePosition`] if a field result isn't an output
    ///   type, or an argument or input field isn't an input type.
    /// - [`SchemaError::InvalidPossibleType`] if a union member isn't an
    ///   object type.
    /// - [`SchemaError::InvalidInterface`] if an object or interface
    ///   implements a type that isn't an interface.
    pub fn new(types: impl IntoIterator<Item = Arc<MetaType<S>>>) -> Result<Self, SchemaError> {
        let mut registered = FnvHashMap::<ArcStr, Arc<MetaType<S>>>::default();
        for t in types {
            let name: Name = t
                .name()
                .ok_or_else(|| SchemaError::UnnamedType(t.to_string()))?
                .parse()?;
            if registered.contains_key(name.as_str()) {
                return Err(SchemaError::DuplicateType(name.into()));
            }
            registered.insert(name.into(), t);
        }

        let schema = Self { types: registered };
        for t in schema.types.values() {
            schema.check_references(t)?;
        }
        Ok(schema)
    }

    /// Looks up a named type.
    pub fn concrete_type_by_name(&self, name: &str) -> Option<&Arc<MetaType<S>>> {
        self.types.get(name)
    }

    /// Iterates over all the registered types, in no particular order.
    pub fn concrete_type_list(&self) -> impl Iterator<Item = &Arc<MetaType<S>>> {
        self.types.values()
    }

    /// Builds the descriptor a type literal stands for.
    ///
    /// Returns [`None`] if the innermost name isn't registered.
    pub fn make_type(&self, t: &Type) -> Option<Arc<MetaType<S>>> {
        match t {
            Type::Named(n) => self.concrete_type_by_name(n).cloned(),
            Type::List(inner) => self
                .make_type(inner)
                .map(|inner| Arc::new(MetaType::list_of(inner))),
            Type::NonNullNamed(n) => self
                .concrete_type_by_name(n)
                .and_then(|t| MetaType::non_null_of(Arc::clone(t)).ok())
                .map(Arc::new),
            Type::NonNullList(inner) => self
                .make_type(inner)
                .and_then(|inner| MetaType::non_null_of(Arc::new(MetaType::list_of(inner))).ok())
                .map(Arc::new),
        }
    }

    /// Builds the descriptor of a field's result type.
    pub fn field_type(&self, field: &Field<S>) -> Option<Arc<MetaType<S>>> {
        self.make_type(&field.field_type)
    }

    /// Lists the object types an abstract type may resolve to
    ///
    /// Union members in declaration order, or the objects implementing an
    /// interface ordered by name. Non-abstract types have none.
    pub fn possible_types(&self, t: &MetaType<S>) -> Vec<&Arc<MetaType<S>>> {
        match t {
            MetaType::Union(UnionMeta { of_type_names, .. }) => of_type_names
                .iter()
                .filter_map(|n| self.concrete_type_by_name(n))
                .collect(),
            MetaType::Interface(InterfaceMeta { name, .. }) => {
                let mut implementers = self
                    .concrete_type_list()
                    .filter(|t| match &***t {
                        MetaType::Object(ObjectMeta {
                            interface_names, ..
                        }) => interface_names.contains(name),
                        _ => false,
                    })
                    .collect::<Vec<_>>();
                implementers.sort_by(|a, b| a.name().cmp(&b.name()));
                implementers
            }
            _ => vec![],
        }
    }

    /// Checks whether `possible_type` is one of the [possible types] of
    /// `abstract_type`.
    ///
    /// [possible types]: SchemaType::possible_types
    pub fn is_possible_type(&self, abstract_type: &MetaType<S>, possible_type: &MetaType<S>) -> bool {
        possible_type.name().is_some_and(|name| {
            self.possible_types(abstract_type)
                .into_iter()
                .any(|t| t.name() == Some(name))
        })
    }

    /// Checks whether a value of `sub_type` can be used where `super_type`
    /// is expected.
    pub fn is_subtype(&self, sub_type: &Type, super_type: &Type) -> bool {
        use Type::{List, Named, NonNullList, NonNullNamed};

        if super_type == sub_type {
            return true;
        }

        match (super_type, sub_type) {
            (NonNullNamed(super_name), NonNullNamed(sub_name))
            | (Named(super_name), Named(sub_name))
            | (Named(super_name), NonNullNamed(sub_name)) => {
                self.is_named_subtype(sub_name, super_name)
            }
            (NonNullList(super_inner), NonNullList(sub_inner))
            | (List(super_inner), List(sub_inner))
            | (List(super_inner), NonNullList(sub_inner)) => {
                self.is_subtype(sub_inner, super_inner)
            }
            _ => false,
        }
    }

    /// Checks whether the type named `sub_type_name` is, or is a possible
    /// type of, the type named `super_type_name`.
    pub fn is_named_subtype(&self, sub_type_name: &str, super_type_name: &str) -> bool {
        if sub_type_name == super_type_name {
            true
        } else if let (Some(sub_type), Some(super_type)) = (
            self.concrete_type_by_name(sub_type_name),
            self.concrete_type_by_name(super_type_name),
        ) {
            super_type.is_abstract_type() && self.is_possible_type(super_type, sub_type)
        } else {
            false
        }
    }

    fn check_references(&self, t: &MetaType<S>) -> Result<(), SchemaError> {
        let owner: ArcStr = t.name().unwrap_or_default().into();
        match t {
            MetaType::Object(ObjectMeta {
                fields,
                interface_names,
                ..
            })
            | MetaType::Interface(InterfaceMeta {
                fields,
                interface_names,
                ..
            }) => {
                for iface in interface_names {
                    if !matches!(**self.lookup(iface, &owner)?, MetaType::Interface(_)) {
                        return Err(SchemaError::InvalidInterface {
                            name: iface.clone(),
                            implementer: owner,
                        });
                    }
                }
                for field in fields.values() {
                    self.check_position(&field.field_type, &owner, Position::FieldResult)?;
                    for arg in field.arguments.iter().flatten() {
                        self.check_argument(arg, &owner)?;
                    }
                }
            }
            MetaType::InputObject(InputObjectMeta { input_fields, .. }) => {
                for arg in input_fields.values() {
                    self.check_argument(arg, &owner)?;
                }
            }
            MetaType::Union(UnionMeta { of_type_names, .. }) => {
                for member in of_type_names {
                    if !self.lookup(member, &owner)?.is_object_type() {
                        return Err(SchemaError::InvalidPossibleType {
                            name: member.clone(),
                            abstract_type: owner,
                        });
                    }
                }
            }
            MetaType::Scalar(_) | MetaType::Enum(_) | MetaType::List(_) | MetaType::NonNull(_) => {}
        }
        Ok(())
    }

    fn check_argument(&self, arg: &Argument<S>, owner: &ArcStr) -> Result<(), SchemaError> {
        self.check_position(&arg.arg_type, owner, Position::Input)
    }

    fn check_position(
        &self,
        t: &Type,
        owner: &ArcStr,
        position: Position,
    ) -> Result<(), SchemaError> {
        let named = self.lookup(t.innermost_name(), owner)?;
        let (allowed, position) = match position {
            Position::FieldResult => (named.is_output_type(), "a field result"),
            Position::Input => (named.is_input_type(), "an argument or input field"),
        };
        if allowed {
            Ok(())
        } else {
            Err(SchemaError::InvalidTypePosition {
                name: t.innermost_name().into(),
                referenced_by: owner.clone(),
                position,
            })
        }
    }

    fn lookup(&self, name: &str, owner: &ArcStr) -> Result<&Arc<MetaType<S>>, SchemaError> {
        self.concrete_type_by_name(name)
            .ok_or_else(|| SchemaError::UnknownType {
                name: name.into(),
                referenced_by: owner.clone(),
            })
    }
}
