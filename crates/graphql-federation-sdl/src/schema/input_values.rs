use super::{Deprecation, TypeRef};
use crate::{DirectiveLocations, DirectiveSet, Value};

/// Where an input value definition lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputValueKind {
    /// An argument of an output field.
    Argument,
    /// A field of an input object.
    InputField,
}

/// http://spec.graphql.org/October2021/#InputValueDefinition
#[derive(Debug, Clone, PartialEq)]
pub struct InputValueDefinition {
    pub name: String,
    pub kind: InputValueKind,
    pub description: Option<String>,
    pub ty: TypeRef,
    pub default_value: Option<Value>,
    pub deprecation: Deprecation,
    directives: DirectiveSet,
}

impl InputValueDefinition {
    pub fn argument(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(name.into(), InputValueKind::Argument, ty)
    }

    pub fn input_field(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(name.into(), InputValueKind::InputField, ty)
    }

    fn directive_location(&self) -> DirectiveLocations {
        match self.kind {
            InputValueKind::Argument => DirectiveLocations::ARGUMENT_DEFINITION,
            InputValueKind::InputField => DirectiveLocations::INPUT_FIELD_DEFINITION,
        }
    }

    fn new(name: String, kind: InputValueKind, ty: TypeRef) -> Self {
        InputValueDefinition {
            name,
            kind,
            description: None,
            ty,
            default_value: None,
            deprecation: Deprecation::NoDeprecated,
            directives: DirectiveSet::default(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn deprecated(mut self, reason: Option<&str>) -> Self {
        self.deprecation = Deprecation::Deprecated {
            reason: reason.map(str::to_owned),
        };
        self
    }
}

annotatable! {
    InputValueDefinition => { directive_location },
}
