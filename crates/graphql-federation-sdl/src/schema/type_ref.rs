use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// A reference to a named type, possibly wrapped in lists and non-null markers: `[String!]!`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    #[must_use]
    pub fn list(self) -> Self {
        TypeRef::List(Box::new(self))
    }

    /// Wraps the type in a non-null marker. Already non-null types are returned unchanged.
    #[must_use]
    pub fn non_null(self) -> Self {
        match self {
            TypeRef::NonNull(_) => self,
            other => TypeRef::NonNull(Box::new(other)),
        }
    }

    /// The innermost named type.
    pub fn named_type(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.named_type(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

impl FromStr for TypeRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s.trim()).ok_or_else(|| Error::InvalidTypeReference(s.to_owned()))
    }
}

fn parse(s: &str) -> Option<TypeRef> {
    if let Some(inner) = s.strip_suffix('!') {
        return match parse(inner.trim_end())? {
            TypeRef::NonNull(_) => None,
            inner => Some(TypeRef::NonNull(Box::new(inner))),
        };
    }

    if let Some(inner) = s.strip_prefix('[') {
        let inner = inner.strip_suffix(']')?;
        return parse(inner.trim()).map(TypeRef::list);
    }

    is_name(s).then(|| TypeRef::named(s))
}

/// https://spec.graphql.org/October2021/#Name
fn is_name(s: &str) -> bool {
    let mut chars = s.chars();

    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
