use std::fmt::{self, Display, Write};

use super::display_utils::{write_description, write_separated, INDENT};
use crate::{
    schema::Deprecation, Annotatable, DirectiveCatalog, DirectiveInstance, DirectiveSet, EnumValue, FederationVersion,
    FieldDefinition, InputValueDefinition, Schema, TypeDefinition,
};

/// Which directive applications end up in the rendered SDL.
#[derive(Clone, Copy)]
pub(super) enum DirectiveFilter<'a> {
    /// Plain GraphQL: federation directives are not part of the schema's own vocabulary.
    Nothing,
    /// Directives whose definition is active at `version`.
    ActiveAt {
        catalog: &'a DirectiveCatalog,
        version: &'a FederationVersion,
    },
}

impl DirectiveFilter<'_> {
    fn renders(&self, directive: &DirectiveInstance) -> bool {
        match self {
            DirectiveFilter::Nothing => false,
            DirectiveFilter::ActiveAt { catalog, version } => {
                let active = catalog
                    .lookup(&directive.name)
                    .map(|definition| definition.is_active(version))
                    .unwrap_or_default();

                if !active {
                    tracing::debug!(
                        directive = %directive.name,
                        %version,
                        "directive is not available at this federation version, skipping"
                    );
                }

                active
            }
        }
    }
}

/// Renders the type definitions of a schema, sorted by name and separated by empty lines.
pub(super) struct SchemaRenderer<'a> {
    pub(super) schema: &'a Schema,
    pub(super) types: &'a [&'a TypeDefinition],
    pub(super) filter: DirectiveFilter<'a>,
}

impl Display for SchemaRenderer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roots = self.schema.root_operation_types();
        let mut first = true;

        if !roots.are_conventional() {
            first = false;
            f.write_str("schema {\n")?;
            for (operation, name) in roots.iter() {
                writeln!(f, "{INDENT}{operation}: {name}")?;
            }
            f.write_str("}\n")?;
        }

        for definition in self.types {
            if !std::mem::take(&mut first) {
                f.write_char('\n')?;
            }

            self.write_type(f, definition)?;
        }

        Ok(())
    }
}

impl SchemaRenderer<'_> {
    fn write_type(&self, f: &mut fmt::Formatter<'_>, definition: &TypeDefinition) -> fmt::Result {
        write_description(f, definition.description(), "")?;

        match definition {
            TypeDefinition::Scalar(scalar) => {
                write!(f, "scalar {}", scalar.name)?;
                self.write_directives(f, scalar.directives())?;
                f.write_char('\n')
            }
            TypeDefinition::Object(object) => {
                write!(f, "type {}", object.name)?;
                write_implements(f, &object.implements)?;
                self.write_directives(f, object.directives())?;
                self.write_fields(f, &object.fields)
            }
            TypeDefinition::Interface(interface) => {
                write!(f, "interface {}", interface.name)?;
                write_implements(f, &interface.implements)?;
                self.write_directives(f, interface.directives())?;
                self.write_fields(f, &interface.fields)
            }
            TypeDefinition::Union(union) => {
                write!(f, "union {}", union.name)?;
                self.write_directives(f, union.directives())?;

                if !union.members.is_empty() {
                    f.write_str(" = ")?;
                    write_separated(f, &union.members, " | ")?;
                }

                f.write_char('\n')
            }
            TypeDefinition::Enum(r#enum) => {
                write!(f, "enum {}", r#enum.name)?;
                self.write_directives(f, r#enum.directives())?;

                if r#enum.values.is_empty() {
                    return f.write_char('\n');
                }

                f.write_str(" {\n")?;
                for value in &r#enum.values {
                    self.write_enum_value(f, value)?;
                }
                f.write_str("}\n")
            }
            TypeDefinition::InputObject(input_object) => {
                write!(f, "input {}", input_object.name)?;
                self.write_directives(f, input_object.directives())?;

                if input_object.fields.is_empty() {
                    return f.write_char('\n');
                }

                f.write_str(" {\n")?;
                for field in &input_object.fields {
                    write_description(f, field.description.as_deref(), INDENT)?;
                    f.write_str(INDENT)?;
                    self.write_input_value(f, field)?;
                    f.write_char('\n')?;
                }
                f.write_str("}\n")
            }
        }
    }

    fn write_fields(&self, f: &mut fmt::Formatter<'_>, fields: &[FieldDefinition]) -> fmt::Result {
        if fields.is_empty() {
            return f.write_char('\n');
        }

        f.write_str(" {\n")?;

        for field in fields {
            write_description(f, field.description.as_deref(), INDENT)?;
            write!(f, "{INDENT}{}", field.name)?;
            self.write_arguments(f, &field.arguments)?;
            write!(f, ": {}", field.ty)?;
            write_deprecation(f, &field.deprecation)?;
            self.write_directives(f, field.directives())?;
            f.write_char('\n')?;
        }

        f.write_str("}\n")
    }

    fn write_arguments(&self, f: &mut fmt::Formatter<'_>, arguments: &[InputValueDefinition]) -> fmt::Result {
        if arguments.is_empty() {
            return Ok(());
        }

        let multiline = arguments.iter().any(|argument| argument.description.is_some());

        f.write_char('(')?;

        if multiline {
            let indent = INDENT.repeat(2);
            f.write_char('\n')?;

            for argument in arguments {
                write_description(f, argument.description.as_deref(), &indent)?;
                f.write_str(&indent)?;
                self.write_input_value(f, argument)?;
                f.write_char('\n')?;
            }

            f.write_str(INDENT)?;
        } else {
            let mut arguments = arguments.iter().peekable();

            while let Some(argument) = arguments.next() {
                self.write_input_value(f, argument)?;

                if arguments.peek().is_some() {
                    f.write_str(", ")?;
                }
            }
        }

        f.write_char(')')
    }

    fn write_input_value(&self, f: &mut fmt::Formatter<'_>, input_value: &InputValueDefinition) -> fmt::Result {
        write!(f, "{}: {}", input_value.name, input_value.ty)?;

        if let Some(default_value) = &input_value.default_value {
            write!(f, " = {default_value}")?;
        }

        write_deprecation(f, &input_value.deprecation)?;
        self.write_directives(f, input_value.directives())
    }

    fn write_enum_value(&self, f: &mut fmt::Formatter<'_>, value: &EnumValue) -> fmt::Result {
        write_description(f, value.description.as_deref(), INDENT)?;
        write!(f, "{INDENT}{}", value.name)?;
        write_deprecation(f, &value.deprecation)?;
        self.write_directives(f, value.directives())?;
        f.write_char('\n')
    }

    fn write_directives(&self, f: &mut fmt::Formatter<'_>, directives: &DirectiveSet) -> fmt::Result {
        for directive in directives.iter().filter(|directive| self.filter.renders(directive)) {
            write!(f, " {directive}")?;
        }

        Ok(())
    }
}

fn write_implements(f: &mut fmt::Formatter<'_>, implements: &[String]) -> fmt::Result {
    if implements.is_empty() {
        return Ok(());
    }

    f.write_str(" implements ")?;
    write_separated(f, implements, " & ")
}

fn write_deprecation(f: &mut fmt::Formatter<'_>, deprecation: &Deprecation) -> fmt::Result {
    match deprecation {
        Deprecation::NoDeprecated => Ok(()),
        Deprecation::Deprecated { reason: None } => f.write_str(" @deprecated"),
        Deprecation::Deprecated { reason: Some(reason) } => {
            f.write_str(" @deprecated(reason: ")?;
            super::write_quoted(f, reason)?;
            f.write_char(')')
        }
    }
}
