use std::fmt::{self, Display};

use super::{
    display_utils::{write_quoted, INDENT},
    render_schema::{DirectiveFilter, SchemaRenderer},
};
use crate::{
    Annotatable, DirectiveCatalog, DirectiveDefinition, DirectiveSet, FederationVersion, Result, Schema,
    TypeDefinition,
};

pub const FEDERATION_SPEC_URL: &str = "https://specs.apollo.dev/federation";

/// Renders the schema as a federation subgraph SDL.
///
/// Elements carry the directives whose definition is available at the schema's version. Federation 2
/// schemas also start with an `extend schema @link(...)` header importing every directive of the
/// catalog available at that version. Federation 1 schemas have no header.
pub fn render_federation_sdl(schema: &Schema, catalog: &DirectiveCatalog) -> Result<String> {
    let types = schema.reachable_types()?;
    check_directives(&types, catalog)?;

    let version = schema.federation_version();

    let body = SchemaRenderer {
        schema,
        types: &types,
        filter: DirectiveFilter::ActiveAt { catalog, version },
    }
    .to_string();

    if !version.is_federation_2() {
        tracing::debug!(%version, "federation 1 schema, rendering without @link");
        return Ok(body);
    }

    let imports = catalog.eligible_directives(version);

    tracing::debug!(
        %version,
        imports = imports.len(),
        types = types.len(),
        "rendering federation 2 schema"
    );

    let mut sdl = LinkHeader {
        version,
        imports: &imports,
    }
    .to_string();

    if !body.is_empty() {
        sdl.push('\n');
        sdl.push_str(&body);
    }

    Ok(sdl)
}

struct LinkHeader<'a> {
    version: &'a FederationVersion,
    imports: &'a [&'a DirectiveDefinition],
}

impl Display for LinkHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "extend schema")?;
        write!(f, "{INDENT}@link(url: ")?;
        write_quoted(f, &format!("{FEDERATION_SPEC_URL}/v{}", self.version))?;
        f.write_str(", import: [")?;

        let mut imports = self.imports.iter().peekable();

        while let Some(definition) = imports.next() {
            write_quoted(f, &format!("@{}", definition.name))?;

            if imports.peek().is_some() {
                f.write_str(", ")?;
            }
        }

        f.write_str("])\n")
    }
}

/// Every directive applied in the schema must be known to the catalog. Attachment already checks
/// this, but the catalog used for rendering is not necessarily the one used for attachment.
fn check_directives(types: &[&TypeDefinition], catalog: &DirectiveCatalog) -> Result<()> {
    for definition in types {
        for directives in directive_sets(definition) {
            for directive in directives {
                catalog.lookup(&directive.name)?;
            }
        }
    }

    Ok(())
}

fn directive_sets(definition: &TypeDefinition) -> Vec<&DirectiveSet> {
    let mut sets = vec![definition.directives()];

    match definition {
        TypeDefinition::Object(object) => {
            for field in &object.fields {
                sets.push(field.directives());
                sets.extend(field.arguments.iter().map(Annotatable::directives));
            }
        }
        TypeDefinition::Interface(interface) => {
            for field in &interface.fields {
                sets.push(field.directives());
                sets.extend(field.arguments.iter().map(Annotatable::directives));
            }
        }
        TypeDefinition::Enum(r#enum) => sets.extend(r#enum.values.iter().map(Annotatable::directives)),
        TypeDefinition::InputObject(input_object) => {
            sets.extend(input_object.fields.iter().map(Annotatable::directives));
        }
        TypeDefinition::Scalar(_) | TypeDefinition::Union(_) => (),
    }

    sets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DirectiveLocations, Error, FieldDefinition, ObjectType, TypeRef};

    #[test]
    fn unknown_directives_fail_rendering() {
        let mut catalog = DirectiveCatalog::federation();
        catalog.register(DirectiveDefinition::new(
            "custom",
            FederationVersion::new(2, 0),
            DirectiveLocations::FIELD_DEFINITION,
        ));

        let mut field = FieldDefinition::new("test", TypeRef::named("String").non_null());
        field.add_directive(&catalog, "custom", [("level", 1)]).unwrap();

        let schema = crate::Schema::builder()
            .query(ObjectType::new("Query").with_field(field))
            .federation("2.1")
            .unwrap()
            .build()
            .unwrap();

        assert!(schema.federation_sdl(&catalog).unwrap().contains("test: String! @custom(level: 1)"));

        let error = schema.federation_sdl(&DirectiveCatalog::federation()).unwrap_err();
        assert!(matches!(error, Error::UnknownDirective(name) if name == "custom"));
    }

    #[test]
    fn header_without_types() {
        let schema = crate::Schema::builder().federation("2.0").unwrap().build().unwrap();
        let sdl = render_federation_sdl(&schema, &DirectiveCatalog::federation()).unwrap();

        assert_eq!(
            sdl,
            "extend schema\n  @link(url: \"https://specs.apollo.dev/federation/v2.0\", import: [\"@inaccessible\"])\n"
        );
    }
}
