use std::fmt::{self, Display, Write};

use crate::{render_sdl::write_quoted, DirectiveCatalog, DirectiveLocations, Error, Result};

/// A GraphQL input literal, as found in directive arguments and default values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    String(String),
    Int(i64),
    Float(f64),
    Boolean(bool),
    Enum(String),
    List(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::String(s) => write_quoted(f, s),
            Value::Int(i) => Display::fmt(i, f),
            // Debug keeps the fractional part of round floats, so they don't read back as ints.
            Value::Float(val) => fmt::Debug::fmt(val, f),
            Value::Enum(val) => f.write_str(val),
            Value::Boolean(true) => f.write_str("true"),
            Value::Boolean(false) => f.write_str("false"),
            Value::Object(key_values) => {
                let mut key_values = key_values.iter().peekable();

                f.write_char('{')?;
                while let Some((key, value)) = key_values.next() {
                    write!(f, "{key}: {value}")?;
                    if key_values.peek().is_some() {
                        f.write_str(", ")?;
                    }
                }
                f.write_char('}')
            }
            Value::List(values) => {
                let mut values = values.iter().peekable();

                f.write_char('[')?;
                while let Some(value) = values.next() {
                    Display::fmt(value, f)?;
                    if values.peek().is_some() {
                        f.write_str(", ")?;
                    }
                }
                f.write_char(']')
            }
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

/// One application of a directive on a schema element, e.g. `@tag(name: "public")`.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveInstance {
    pub name: String,
    pub arguments: Vec<(String, Value)>,
}

impl DirectiveInstance {
    pub fn new(name: impl Into<String>) -> Self {
        DirectiveInstance {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    #[must_use]
    pub fn argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.push((name.into(), value.into()));
        self
    }

    pub fn get_argument(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find_map(|(argument, value)| (argument == name).then_some(value))
    }
}

impl fmt::Display for DirectiveInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('@')?;
        f.write_str(&self.name)?;

        if self.arguments.is_empty() {
            return Ok(());
        }

        f.write_char('(')?;

        let mut arguments = self.arguments.iter().peekable();

        while let Some((name, value)) = arguments.next() {
            write!(f, "{name}: {value}")?;

            if arguments.peek().is_some() {
                f.write_str(", ")?;
            }
        }

        f.write_char(')')
    }
}

/// The directives applied on one element, in the order they were attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectiveSet(Vec<DirectiveInstance>);

impl DirectiveSet {
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &DirectiveInstance> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|directive| directive.name == name)
    }

    /// All applications of the directive called `name`.
    pub fn get<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a DirectiveInstance> + 'a {
        self.0.iter().filter(move |directive| directive.name == name)
    }

    fn push(&mut self, directive: DirectiveInstance) {
        self.0.push(directive);
    }
}

impl<'a> IntoIterator for &'a DirectiveSet {
    type Item = &'a DirectiveInstance;
    type IntoIter = std::slice::Iter<'a, DirectiveInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A schema element that can carry federation directives.
///
/// Implemented by every element kind of the [schema](crate::schema) module, so that directive
/// attachment behaves the same everywhere.
pub trait Annotatable {
    /// The directive location this element sits at.
    fn location(&self) -> DirectiveLocations;

    /// The element name, for error messages and logs.
    fn name(&self) -> &str;

    fn directives(&self) -> &DirectiveSet;

    fn directives_mut(&mut self) -> &mut DirectiveSet;

    /// Applies the directive `name` to this element.
    ///
    /// The directive must be known to the catalog and allowed on this element's location.
    /// Non-repeatable directives can only be applied once.
    fn add_directive<N, V>(
        &mut self,
        catalog: &DirectiveCatalog,
        name: &str,
        arguments: impl IntoIterator<Item = (N, V)>,
    ) -> Result<()>
    where
        Self: Sized,
        N: Into<String>,
        V: Into<Value>,
    {
        let definition = catalog.lookup(name)?;
        let location = self.location();

        if !definition.allows(location) {
            return Err(Error::InvalidDirectiveLocation {
                directive: name.to_owned(),
                location,
            });
        }

        if !definition.repeatable && self.directives().contains(name) {
            return Err(Error::DuplicateDirective {
                directive: name.to_owned(),
                element: self.name().to_owned(),
            });
        }

        let directive = DirectiveInstance {
            name: name.to_owned(),
            arguments: arguments
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        };

        tracing::trace!(element = self.name(), %location, %directive, "attaching directive");

        self.directives_mut().push(directive);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EnumValue, FieldDefinition, ObjectType, TypeRef};

    const NO_ARGUMENTS: [(&str, Value); 0] = [];

    #[test]
    fn value_display() {
        let value = Value::Object(vec![
            ("name".to_owned(), Value::from("a \"quoted\"\nvalue")),
            ("scopes".to_owned(), Value::from(vec!["read", "write"])),
            ("limit".to_owned(), Value::Int(3)),
            ("ratio".to_owned(), Value::Float(0.5)),
            ("kind".to_owned(), Value::Enum("PUBLIC".to_owned())),
            ("nothing".to_owned(), Value::Null),
            ("empty".to_owned(), Value::List(vec![])),
        ]);

        assert_eq!(
            value.to_string(),
            r#"{name: "a \"quoted\"\nvalue", scopes: ["read", "write"], limit: 3, ratio: 0.5, kind: PUBLIC, nothing: null, empty: []}"#
        );
    }

    #[test]
    fn directive_display() {
        assert_eq!(DirectiveInstance::new("inaccessible").to_string(), "@inaccessible");
        assert_eq!(
            DirectiveInstance::new("tag").argument("name", "public").to_string(),
            r#"@tag(name: "public")"#
        );
    }

    #[test]
    fn tags_are_repeatable() {
        let catalog = DirectiveCatalog::federation();
        let mut field = FieldDefinition::new("test", TypeRef::named("String"));

        field.add_directive(&catalog, "tag", [("name", "x")]).unwrap();
        field.add_directive(&catalog, "tag", [("name", "y")]).unwrap();

        let tags = field
            .directives()
            .get("tag")
            .map(|directive| directive.get_argument("name").unwrap().to_string())
            .collect::<Vec<_>>();

        assert_eq!(tags, [r#""x""#, r#""y""#]);
    }

    #[test]
    fn non_repeatable_directive_applied_twice() {
        let catalog = DirectiveCatalog::federation();
        let mut object = ObjectType::new("Cat");

        object.add_directive(&catalog, "inaccessible", NO_ARGUMENTS).unwrap();
        let error = object
            .add_directive(&catalog, "inaccessible", NO_ARGUMENTS)
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "directive @inaccessible is not repeatable but was applied twice on `Cat`"
        );
        assert_eq!(object.directives().len(), 1);
    }

    #[test]
    fn location_is_checked_on_attachment() {
        let catalog = DirectiveCatalog::federation();
        let mut value = EnumValue::new("RED");

        let error = value
            .add_directive(&catalog, "authenticated", NO_ARGUMENTS)
            .unwrap_err();

        assert!(matches!(
            &error,
            Error::InvalidDirectiveLocation { directive, location }
                if directive == "authenticated" && *location == DirectiveLocations::ENUM_VALUE
        ));
        assert_eq!(error.to_string(), "directive @authenticated cannot be applied on ENUM_VALUE");
        assert!(value.directives().is_empty());
    }

    #[test]
    fn unknown_directive_is_rejected() {
        let catalog = DirectiveCatalog::federation();
        let mut object = ObjectType::new("Cat");

        let error = object.add_directive(&catalog, "key", [("fields", "id")]).unwrap_err();

        assert!(matches!(error, Error::UnknownDirective(name) if name == "key"));
    }
}
