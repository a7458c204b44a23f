//! Apollo Federation directives for GraphQL schemas, and SDL rendering of the annotated schema.
//!
//! Elements of a [Schema] carry [directive applications](DirectiveInstance), checked against a
//! [DirectiveCatalog] when attached. The schema's [federation version](FederationVersion) decides
//! which of them are rendered, and which directives the `@link` header of a federation 2 schema
//! imports.

mod catalog;
mod config;
mod directives;
mod error;
mod federation;
mod options;
mod render_sdl;
pub mod schema;
mod version;

pub use self::{
    catalog::{DirectiveCatalog, DirectiveDefinition, DirectiveLocations},
    config::{Config, FederationConfig},
    directives::{Annotatable, DirectiveInstance, DirectiveSet, Value},
    error::{Error, Result},
    federation::FederationContext,
    options::{configure, Configurable, ElementOptions, FederationOptions, MemberOptions, TagOption, TypeOptions},
    render_sdl::{render_federation_sdl, render_sdl, FEDERATION_SPEC_URL},
    schema::{
        EnumType, EnumValue, FieldDefinition, InputObjectType, InputValueDefinition, InterfaceType, ObjectType,
        ScalarType, Schema, SchemaBuilder, TypeDefinition, TypeRef, UnionType,
    },
    version::{FederationVersion, VersionInput},
};
