//! A minimal GraphQL schema model: the graph of named types that federation directives are
//! attached to and that the [SDL printers](crate::render_sdl) walk.

/// Implements [Annotatable](crate::Annotatable) for element types holding `name` and `directives`
/// fields. The location is either a [DirectiveLocations](crate::DirectiveLocations) constant or,
/// in braces, a method computing it.
macro_rules! annotatable {
    (@location $self:ident $location:ident) => {
        $crate::DirectiveLocations::$location
    };
    (@location $self:ident { $method:ident }) => {
        $self.$method()
    };
    ($($ty:ident => $location:tt),* $(,)?) => {
        $(
            impl $crate::Annotatable for $ty {
                fn location(&self) -> $crate::DirectiveLocations {
                    annotatable!(@location self $location)
                }

                fn name(&self) -> &str {
                    &self.name
                }

                fn directives(&self) -> &$crate::DirectiveSet {
                    &self.directives
                }

                fn directives_mut(&mut self) -> &mut $crate::DirectiveSet {
                    &mut self.directives
                }
            }
        )*
    };
}

mod builder;
mod input_values;
mod objects;
mod type_definitions;
mod type_ref;

pub use self::{
    builder::SchemaBuilder,
    input_values::{InputValueDefinition, InputValueKind},
    objects::{FieldDefinition, InterfaceType, ObjectType},
    type_definitions::{EnumType, EnumValue, InputObjectType, ScalarType, TypeDefinition, UnionType},
    type_ref::TypeRef,
};

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;

use crate::{DirectiveCatalog, Error, FederationContext, FederationVersion, Result};

/// Scalars every schema has without registering them.
pub(crate) const BUILTIN_SCALARS: &[&str] = &["ID", "String", "Int", "Float", "Boolean"];

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Deprecation {
    #[default]
    NoDeprecated,
    Deprecated {
        reason: Option<String>,
    },
}

impl Deprecation {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Deprecation::Deprecated { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootOperationTypes {
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
}

impl RootOperationTypes {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("query", self.query.as_deref()),
            ("mutation", self.mutation.as_deref()),
            ("subscription", self.subscription.as_deref()),
        ]
        .into_iter()
        .filter_map(|(operation, name)| Some((operation, name?)))
    }

    /// Whether every root type is named after its operation (`Query`, `Mutation`, `Subscription`),
    /// so that no `schema { ... }` definition is needed.
    pub fn are_conventional(&self) -> bool {
        self.iter().all(|(operation, name)| {
            let mut expected = operation.chars();
            let mut actual = name.chars();

            actual.next() == expected.next().map(|first| first.to_ascii_uppercase()) && actual.eq(expected)
        })
    }
}

/// A finalized schema. Immutable once built.
#[derive(Debug, Clone)]
pub struct Schema {
    types: IndexMap<String, TypeDefinition>,
    root_operation_types: RootOperationTypes,
    orphan_types: Vec<String>,
    federation: FederationContext,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    pub fn federation(&self) -> &FederationContext {
        &self.federation
    }

    pub fn federation_version(&self) -> &FederationVersion {
        self.federation.version()
    }

    pub fn is_federation_2(&self) -> bool {
        self.federation.is_federation_2()
    }

    pub fn root_operation_types(&self) -> &RootOperationTypes {
        &self.root_operation_types
    }

    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    pub fn query_type(&self) -> Option<&ObjectType> {
        self.root_operation_types
            .query
            .as_deref()
            .and_then(|name| self.get_type(name))
            .and_then(TypeDefinition::as_object)
    }

    /// Every registered type, reachable or not, in registration order.
    pub fn iter_types(&self) -> impl ExactSizeIterator<Item = &TypeDefinition> {
        self.types.values()
    }

    /// The types reachable from the root operation types and the orphan types, sorted by name.
    ///
    /// Built-in scalars resolve without being registered, and are only returned when a definition
    /// was registered for them explicitly.
    pub fn reachable_types(&self) -> Result<Vec<&TypeDefinition>> {
        let mut visited = IndexSet::new();
        let mut queue = self
            .root_operation_types
            .iter()
            .map(|(_, name)| name)
            .chain(self.orphan_types.iter().map(String::as_str))
            .collect::<Vec<_>>();

        queue.reverse();

        let mut reachable = Vec::new();

        while let Some(name) = queue.pop() {
            if !visited.insert(name) {
                continue;
            }

            let Some(definition) = self.types.get(name) else {
                if BUILTIN_SCALARS.contains(&name) {
                    continue;
                }

                return Err(Error::UnresolvedType(name.to_owned()));
            };

            queue.extend(definition.referenced_types().into_iter().rev());
            reachable.push(definition);
        }

        Ok(reachable
            .into_iter()
            .sorted_by(|a, b| a.name().cmp(b.name()))
            .collect())
    }

    /// The schema in SDL, without federation directives.
    pub fn to_sdl(&self) -> Result<String> {
        crate::render_sdl(self)
    }

    /// The schema in SDL with its federation directives and, for federation 2, the `@link` header.
    pub fn federation_sdl(&self, catalog: &DirectiveCatalog) -> Result<String> {
        crate::render_federation_sdl(self, catalog)
    }
}
