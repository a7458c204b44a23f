use indexmap::{map::Entry, IndexMap};

use super::{ObjectType, RootOperationTypes, Schema, TypeDefinition};
use crate::{config::FederationConfig, Error, FederationContext, FederationVersion, Result, VersionInput};

/// Collects the types and the federation declaration of a schema, then freezes them into a
/// [Schema].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    types: Vec<TypeDefinition>,
    root_operation_types: RootOperationTypes,
    orphan_types: Vec<String>,
    federation: FederationContext,
}

impl SchemaBuilder {
    #[must_use]
    pub fn query(mut self, query: ObjectType) -> Self {
        self.root_operation_types.query = Some(query.name.clone());
        self.register_type(query)
    }

    #[must_use]
    pub fn mutation(mut self, mutation: ObjectType) -> Self {
        self.root_operation_types.mutation = Some(mutation.name.clone());
        self.register_type(mutation)
    }

    #[must_use]
    pub fn subscription(mut self, subscription: ObjectType) -> Self {
        self.root_operation_types.subscription = Some(subscription.name.clone());
        self.register_type(subscription)
    }

    /// Registers a type. It only ends up in the SDL if some reachable type references it.
    #[must_use]
    pub fn register_type(mut self, definition: impl Into<TypeDefinition>) -> Self {
        self.types.push(definition.into());
        self
    }

    /// Registers a type that is part of the schema even if nothing references it.
    #[must_use]
    pub fn orphan_type(mut self, definition: impl Into<TypeDefinition>) -> Self {
        let definition = definition.into();
        self.orphan_types.push(definition.name().to_owned());
        self.register_type(definition)
    }

    /// The schema-level `federation(version: ...)` declaration.
    ///
    /// Fails right away on a malformed version. Declaring twice keeps the last version.
    pub fn federation(mut self, version: impl Into<VersionInput>) -> Result<Self> {
        self.federation.set_version(FederationVersion::parse(version)?);
        Ok(self)
    }

    /// Applies the federation section of a loaded configuration. A config without a version
    /// leaves the current one untouched.
    #[must_use]
    pub fn federation_config(mut self, config: &FederationConfig) -> Self {
        if let Some(version) = &config.version {
            self.federation.set_version(version.clone());
        }

        self
    }

    pub fn build(self) -> Result<Schema> {
        let SchemaBuilder {
            types: definitions,
            root_operation_types,
            orphan_types,
            federation,
        } = self;

        let mut types = IndexMap::with_capacity(definitions.len());

        for definition in definitions {
            match types.entry(definition.name().to_owned()) {
                Entry::Occupied(entry) => return Err(Error::DuplicateType(entry.key().clone())),
                Entry::Vacant(entry) => {
                    entry.insert(definition);
                }
            }
        }

        tracing::debug!(
            types = types.len(),
            federation_version = %federation.version(),
            "schema built"
        );

        Ok(Schema {
            types,
            root_operation_types,
            orphan_types,
            federation,
        })
    }
}
