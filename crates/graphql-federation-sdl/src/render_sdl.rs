mod display_utils;
mod render_federation_sdl;
mod render_schema;

pub(crate) use self::display_utils::write_quoted;
pub use self::render_federation_sdl::{render_federation_sdl, FEDERATION_SPEC_URL};

use self::render_schema::{DirectiveFilter, SchemaRenderer};
use crate::{Result, Schema};

/// Renders the schema as plain GraphQL SDL.
///
/// Only the types reachable from the root operation types and the orphan types are rendered,
/// sorted by name. Federation directives are left out.
pub fn render_sdl(schema: &Schema) -> Result<String> {
    let types = schema.reachable_types()?;

    Ok(SchemaRenderer {
        schema,
        types: &types,
        filter: DirectiveFilter::Nothing,
    }
    .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EnumType, EnumValue, FieldDefinition, ObjectType, TypeRef};

    #[test]
    fn empty_schema() {
        let schema = Schema::builder().build().unwrap();
        assert_eq!(render_sdl(&schema).unwrap(), "");
    }

    #[test]
    fn custom_root_names() {
        let query = ObjectType::new("Root").with_field(FieldDefinition::new("ping", TypeRef::named("Boolean")));
        let mutation =
            ObjectType::new("Mutation").with_field(FieldDefinition::new("pong", TypeRef::named("Boolean").non_null()));

        let schema = Schema::builder().query(query).mutation(mutation).build().unwrap();

        insta::assert_snapshot!(render_sdl(&schema).unwrap(), @r###"
        schema {
          query: Root
          mutation: Mutation
        }

        type Mutation {
          pong: Boolean!
        }

        type Root {
          ping: Boolean
        }
        "###);
    }

    #[test]
    fn types_without_members() {
        let schema = Schema::builder()
            .query(ObjectType::new("Query"))
            .orphan_type(EnumType::new("Nothing"))
            .orphan_type(EnumType::new("Single").with_value(EnumValue::new("ONLY").with_description("The one.")))
            .build()
            .unwrap();

        insta::assert_snapshot!(render_sdl(&schema).unwrap(), @r###"
        enum Nothing

        type Query

        enum Single {
          """
          The one.
          """
          ONLY
        }
        "###);
    }
}
