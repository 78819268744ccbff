use std::{borrow::Borrow, str::FromStr};

use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error};

/// A validated GraphQL name, matching `/^[_a-zA-Z][_a-zA-Z0-9]*$/`.
#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Name(ArcStr);

impl Name {
    /// Checks whether `input` is a valid GraphQL name.
    pub fn is_valid(input: &str) -> bool {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    }

    /// Returns the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error of parsing an invalid [`Name`].
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display("Names must match /^[_a-zA-Z][_a-zA-Z0-9]*$/ but \"{_0}\" does not")]
pub struct NameParseError(#[error(not(source))] pub String);

impl FromStr for Name {
    type Err = NameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.into()))
        } else {
            Err(NameParseError(s.into()))
        }
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<Name> for ArcStr {
    fn from(name: Name) -> Self {
        name.0
    }
}
