//! Element construction from generic option maps.
//!
//! Federation vocabulary (`tags`, `inaccessible`, `authenticated`) is pulled out of the options
//! and turned into directive applications before the rest is handed to the regular element
//! construction, which knows nothing about federation and rejects keys it does not understand.

use serde::de::DeserializeOwned;

use crate::{
    Annotatable, DirectiveCatalog, EnumType, EnumValue, FieldDefinition, InputObjectType, InputValueDefinition,
    InterfaceType, ObjectType, Result, ScalarType, UnionType, Value,
};
use crate::{schema::Deprecation, Error};

/// Options given when defining an element, e.g. `{"description": "...", "tags": [{"name": "public"}]}`.
pub type ElementOptions = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Default, serde::Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FederationOptions {
    pub tags: Vec<TagOption>,
    pub inaccessible: Option<bool>,
    pub authenticated: Option<bool>,
}

#[derive(Debug, serde::Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TagOption {
    pub name: String,
}

impl FederationOptions {
    pub const KEYS: &'static [&'static str] = &["tags", "inaccessible", "authenticated"];

    /// Removes the federation keys from `options`.
    pub fn extract(options: &mut ElementOptions) -> Result<Self> {
        let federation = Self::KEYS
            .iter()
            .filter_map(|key| Some(((*key).to_owned(), options.remove(*key)?)))
            .collect::<ElementOptions>();

        serde_json::from_value(serde_json::Value::Object(federation)).map_err(|err| Error::InvalidOption(err.to_string()))
    }

    /// One `@tag(name: "...")` per tag, in order, then `@inaccessible` and `@authenticated`.
    pub fn apply(self, element: &mut impl Annotatable, catalog: &DirectiveCatalog) -> Result<()> {
        for tag in self.tags {
            element.add_directive(catalog, "tag", [("name", Value::String(tag.name))])?;
        }

        if self.inaccessible.unwrap_or_default() {
            element.add_directive(catalog, "inaccessible", no_arguments())?;
        }

        if self.authenticated.unwrap_or_default() {
            element.add_directive(catalog, "authenticated", no_arguments())?;
        }

        Ok(())
    }
}

fn no_arguments() -> [(String, Value); 0] {
    []
}

/// Options understood by the regular construction of named types.
#[derive(Debug, Default, serde::Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TypeOptions {
    pub description: Option<String>,
}

/// Options understood by the regular construction of fields, arguments and enum values.
#[derive(Debug, Default, serde::Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MemberOptions {
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
}

impl MemberOptions {
    fn deprecation(&self) -> Option<Deprecation> {
        self.deprecation_reason.as_ref().map(|reason| Deprecation::Deprecated {
            reason: Some(reason.clone()),
        })
    }
}

/// An element the host schema can configure from options.
pub trait Configurable: Annotatable + Sized {
    type Options: DeserializeOwned;

    fn configure_host(self, options: Self::Options) -> Self;
}

/// Configures `element` from `options`: federation keys become directives, everything else goes
/// to the element's own construction.
pub fn configure<T: Configurable>(element: T, mut options: ElementOptions, catalog: &DirectiveCatalog) -> Result<T> {
    let federation = FederationOptions::extract(&mut options)?;
    let host_options = serde_json::from_value(serde_json::Value::Object(options))
        .map_err(|err| Error::InvalidOption(format!("`{}`: {err}", element.name())))?;

    let mut element = element.configure_host(host_options);
    federation.apply(&mut element, catalog)?;

    Ok(element)
}

macro_rules! configurable_type {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Configurable for $ty {
                type Options = TypeOptions;

                fn configure_host(mut self, options: TypeOptions) -> Self {
                    if let Some(description) = options.description {
                        self.description = Some(description);
                    }
                    self
                }
            }
        )*
    };
}

configurable_type!(ObjectType, InterfaceType, UnionType, EnumType, ScalarType, InputObjectType);

macro_rules! configurable_member {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Configurable for $ty {
                type Options = MemberOptions;

                fn configure_host(mut self, options: MemberOptions) -> Self {
                    if let Some(deprecation) = options.deprecation() {
                        self.deprecation = deprecation;
                    }
                    if let Some(description) = options.description {
                        self.description = Some(description);
                    }
                    self
                }
            }
        )*
    };
}

configurable_member!(FieldDefinition, InputValueDefinition, EnumValue);
