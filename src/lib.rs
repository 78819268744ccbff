#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

// These are required by the crate's declarative macros.
#[doc(hidden)]
pub use static_assertions as sa;
#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing;

#[doc(hidden)]
#[macro_use]
pub mod macros;
mod ast;
mod error;
pub mod integrations;
mod resolve;
pub(crate) mod schema;
mod types;
pub mod validation;
mod value;

#[cfg(test)]
mod tests;

pub use crate::{
    ast::Type,
    error::{FieldError, FieldResult, SchemaError},
    resolve::resolve_type,
    schema::{meta, model::SchemaType},
    types::{
        base::TypeKind,
        name::{Name, NameParseError},
    },
    validation::is_valid_input,
    value::{DefaultScalarValue, ScalarValue, Value},
};
