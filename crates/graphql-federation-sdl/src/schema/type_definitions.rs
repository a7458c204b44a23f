use super::{Deprecation, FieldDefinition, InputValueDefinition, InterfaceType, ObjectType};
use crate::{Annotatable, DirectiveSet};

/// Any named type of a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDefinition {
    Scalar(ScalarType),
    Object(ObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
    InputObject(InputObjectType),
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Scalar(ty) => &ty.name,
            TypeDefinition::Object(ty) => &ty.name,
            TypeDefinition::Interface(ty) => &ty.name,
            TypeDefinition::Union(ty) => &ty.name,
            TypeDefinition::Enum(ty) => &ty.name,
            TypeDefinition::InputObject(ty) => &ty.name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            TypeDefinition::Scalar(ty) => ty.description.as_deref(),
            TypeDefinition::Object(ty) => ty.description.as_deref(),
            TypeDefinition::Interface(ty) => ty.description.as_deref(),
            TypeDefinition::Union(ty) => ty.description.as_deref(),
            TypeDefinition::Enum(ty) => ty.description.as_deref(),
            TypeDefinition::InputObject(ty) => ty.description.as_deref(),
        }
    }

    pub fn directives(&self) -> &DirectiveSet {
        match self {
            TypeDefinition::Scalar(ty) => ty.directives(),
            TypeDefinition::Object(ty) => ty.directives(),
            TypeDefinition::Interface(ty) => ty.directives(),
            TypeDefinition::Union(ty) => ty.directives(),
            TypeDefinition::Enum(ty) => ty.directives(),
            TypeDefinition::InputObject(ty) => ty.directives(),
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            TypeDefinition::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn fields(&self) -> Option<&[FieldDefinition]> {
        match self {
            TypeDefinition::Object(ty) => Some(&ty.fields),
            TypeDefinition::Interface(ty) => Some(&ty.fields),
            _ => None,
        }
    }

    /// Names of the types this definition points at: field and argument types, implemented
    /// interfaces, union members.
    pub(crate) fn referenced_types(&self) -> Vec<&str> {
        fn fields_references<'a>(implements: &'a [String], fields: &'a [FieldDefinition], out: &mut Vec<&'a str>) {
            out.extend(implements.iter().map(String::as_str));

            for field in fields {
                out.push(field.ty.named_type());
                out.extend(field.arguments.iter().map(|argument| argument.ty.named_type()));
            }
        }

        let mut out = Vec::new();

        match self {
            TypeDefinition::Scalar(_) | TypeDefinition::Enum(_) => (),
            TypeDefinition::Object(ty) => fields_references(&ty.implements, &ty.fields, &mut out),
            TypeDefinition::Interface(ty) => fields_references(&ty.implements, &ty.fields, &mut out),
            TypeDefinition::Union(ty) => out.extend(ty.members.iter().map(String::as_str)),
            TypeDefinition::InputObject(ty) => out.extend(ty.fields.iter().map(|field| field.ty.named_type())),
        }

        out
    }
}

impl From<ScalarType> for TypeDefinition {
    fn from(value: ScalarType) -> Self {
        TypeDefinition::Scalar(value)
    }
}

impl From<ObjectType> for TypeDefinition {
    fn from(value: ObjectType) -> Self {
        TypeDefinition::Object(value)
    }
}

impl From<InterfaceType> for TypeDefinition {
    fn from(value: InterfaceType) -> Self {
        TypeDefinition::Interface(value)
    }
}

impl From<UnionType> for TypeDefinition {
    fn from(value: UnionType) -> Self {
        TypeDefinition::Union(value)
    }
}

impl From<EnumType> for TypeDefinition {
    fn from(value: EnumType) -> Self {
        TypeDefinition::Enum(value)
    }
}

impl From<InputObjectType> for TypeDefinition {
    fn from(value: InputObjectType) -> Self {
        TypeDefinition::InputObject(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
    directives: DirectiveSet,
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        ScalarType {
            name: name.into(),
            description: None,
            directives: DirectiveSet::default(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    pub members: Vec<String>,
    directives: DirectiveSet,
}

impl UnionType {
    pub fn new(name: impl Into<String>) -> Self {
        UnionType {
            name: name.into(),
            description: None,
            members: Vec::new(),
            directives: DirectiveSet::default(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<EnumValue>,
    directives: DirectiveSet,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        EnumType {
            name: name.into(),
            description: None,
            values: Vec::new(),
            directives: DirectiveSet::default(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: EnumValue) -> Self {
        self.values.push(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
    pub deprecation: Deprecation,
    directives: DirectiveSet,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        EnumValue {
            name: name.into(),
            description: None,
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
    pub fn deprecated(mut self, reason: Option<&str>) -> Self {
        self.deprecation = Deprecation::Deprecated {
            reason: reason.map(str::to_owned),
        };
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<InputValueDefinition>,
    directives: DirectiveSet,
}

impl InputObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        InputObjectType {
            name: name.into(),
            description: None,
            fields: Vec::new(),
            directives: DirectiveSet::default(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: InputValueDefinition) -> Self {
        self.fields.push(field);
        self
    }
}

annotatable! {
    ScalarType => SCALAR,
    UnionType => UNION,
    EnumType => ENUM,
    EnumValue => ENUM_VALUE,
    InputObjectType => INPUT_OBJECT,
}
