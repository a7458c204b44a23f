use std::fmt;

use crate::{Error, FederationVersion, Result};

bitflags::bitflags! {
    /// https://spec.graphql.org/October2021/#sec-The-__Directive-Type
    #[derive(Default, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
    pub struct DirectiveLocations: u32 {
        const QUERY = 0b1 << 0;
        const MUTATION = 0b1 << 1;
        const SUBSCRIPTION = 0b1 << 2;
        const FIELD = 0b1 << 3;
        const FRAGMENT_DEFINITION = 0b1 << 4;
        const FRAGMENT_SPREAD = 0b1 << 5;
        const INLINE_FRAGMENT = 0b1 << 6;
        const VARIABLE_DEFINITION = 0b1 << 7;
        const SCHEMA = 0b1 << 8;
        const SCALAR = 0b1 << 9;
        const OBJECT = 0b1 << 10;
        const FIELD_DEFINITION = 0b1 << 11;
        const ARGUMENT_DEFINITION = 0b1 << 12;
        const INTERFACE = 0b1 << 13;
        const UNION = 0b1 << 14;
        const ENUM = 0b1 << 15;
        const ENUM_VALUE = 0b1 << 16;
        const INPUT_OBJECT = 0b1 << 17;
        const INPUT_FIELD_DEFINITION = 0b1 << 18;
    }
}

impl fmt::Display for DirectiveLocations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut locations = self.iter().peekable();

        while let Some(location) = locations.next() {
            let name = match location {
                DirectiveLocations::QUERY => "QUERY",
                DirectiveLocations::MUTATION => "MUTATION",
                DirectiveLocations::SUBSCRIPTION => "SUBSCRIPTION",
                DirectiveLocations::FIELD => "FIELD",
                DirectiveLocations::FRAGMENT_DEFINITION => "FRAGMENT_DEFINITION",
                DirectiveLocations::FRAGMENT_SPREAD => "FRAGMENT_SPREAD",
                DirectiveLocations::INLINE_FRAGMENT => "INLINE_FRAGMENT",
                DirectiveLocations::VARIABLE_DEFINITION => "VARIABLE_DEFINITION",
                DirectiveLocations::SCHEMA => "SCHEMA",
                DirectiveLocations::SCALAR => "SCALAR",
                DirectiveLocations::OBJECT => "OBJECT",
                DirectiveLocations::FIELD_DEFINITION => "FIELD_DEFINITION",
                DirectiveLocations::ARGUMENT_DEFINITION => "ARGUMENT_DEFINITION",
                DirectiveLocations::INTERFACE => "INTERFACE",
                DirectiveLocations::UNION => "UNION",
                DirectiveLocations::ENUM => "ENUM",
                DirectiveLocations::ENUM_VALUE => "ENUM_VALUE",
                DirectiveLocations::INPUT_OBJECT => "INPUT_OBJECT",
                DirectiveLocations::INPUT_FIELD_DEFINITION => "INPUT_FIELD_DEFINITION",
                _ => continue,
            };

            f.write_str(name)?;

            if locations.peek().is_some() {
                f.write_str(" | ")?;
            }
        }

        Ok(())
    }
}

/// An Apollo Federation directive, and the first version it can be used with.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveDefinition {
    pub name: String,
    pub min_version: FederationVersion,
    pub locations: DirectiveLocations,
    pub repeatable: bool,
}

impl DirectiveDefinition {
    pub fn new(name: impl Into<String>, min_version: FederationVersion, locations: DirectiveLocations) -> Self {
        DirectiveDefinition {
            name: name.into(),
            min_version,
            locations,
            repeatable: false,
        }
    }

    #[must_use]
    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    /// Whether a schema at `version` may import and render this directive.
    pub fn is_active(&self, version: &FederationVersion) -> bool {
        self.min_version <= *version
    }

    pub fn allows(&self, location: DirectiveLocations) -> bool {
        self.locations.contains(location)
    }
}

/// The table of directives that elements may carry.
///
/// Built once, before any schema, and only read afterwards. The catalog is also the only source
/// for the `@link` import list: a directive is imported because the schema version allows it, not
/// because some element happens to use it.
#[derive(Debug, Clone, Default)]
pub struct DirectiveCatalog {
    definitions: Vec<DirectiveDefinition>,
}

impl DirectiveCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The Apollo Federation directives handled by this crate.
    pub fn federation() -> Self {
        let mut catalog = DirectiveCatalog::new();

        catalog.register(DirectiveDefinition::new(
            "inaccessible",
            FederationVersion::new(2, 0),
            DirectiveLocations::FIELD_DEFINITION
                | DirectiveLocations::OBJECT
                | DirectiveLocations::INTERFACE
                | DirectiveLocations::UNION
                | DirectiveLocations::ARGUMENT_DEFINITION
                | DirectiveLocations::SCALAR
                | DirectiveLocations::ENUM
                | DirectiveLocations::ENUM_VALUE
                | DirectiveLocations::INPUT_OBJECT
                | DirectiveLocations::INPUT_FIELD_DEFINITION,
        ));

        catalog.register(
            DirectiveDefinition::new(
                "tag",
                FederationVersion::new(2, 3),
                DirectiveLocations::FIELD_DEFINITION
                    | DirectiveLocations::OBJECT
                    | DirectiveLocations::INTERFACE
                    | DirectiveLocations::UNION
                    | DirectiveLocations::ARGUMENT_DEFINITION
                    | DirectiveLocations::SCALAR
                    | DirectiveLocations::ENUM
                    | DirectiveLocations::ENUM_VALUE
                    | DirectiveLocations::INPUT_OBJECT
                    | DirectiveLocations::INPUT_FIELD_DEFINITION,
            )
            .repeatable(),
        );

        catalog.register(DirectiveDefinition::new(
            "authenticated",
            FederationVersion::new(2, 5),
            DirectiveLocations::FIELD_DEFINITION
                | DirectiveLocations::OBJECT
                | DirectiveLocations::INTERFACE
                | DirectiveLocations::SCALAR
                | DirectiveLocations::ENUM,
        ));

        catalog
    }

    /// Registering a name twice replaces the first definition, which keeps its position.
    pub fn register(&mut self, definition: DirectiveDefinition) {
        match self.definitions.iter_mut().find(|existing| existing.name == definition.name) {
            Some(existing) => {
                tracing::debug!(directive = %definition.name, "replacing directive definition");
                *existing = definition;
            }
            None => self.definitions.push(definition),
        }
    }

    pub fn lookup(&self, name: &str) -> Result<&DirectiveDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.name == name)
            .ok_or_else(|| Error::UnknownDirective(name.to_owned()))
    }

    /// The directives a schema at `version` imports, by ascending minimum version.
    ///
    /// Directives sharing a minimum version keep their registration order.
    pub fn eligible_directives(&self, version: &FederationVersion) -> Vec<&DirectiveDefinition> {
        let mut eligible = self
            .definitions
            .iter()
            .filter(|definition| definition.is_active(version))
            .collect::<Vec<_>>();

        eligible.sort_by(|a, b| a.min_version.cmp(&b.min_version));
        eligible
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &DirectiveDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn eligible_names(catalog: &DirectiveCatalog, version: &str) -> Vec<String> {
        let version = version.parse().unwrap();

        catalog
            .eligible_directives(&version)
            .into_iter()
            .map(|definition| definition.name.clone())
            .collect()
    }

    #[test]
    fn directive_locations_display() {
        let all = DirectiveLocations::all().to_string();

        let expected = "QUERY | MUTATION | SUBSCRIPTION | FIELD | FRAGMENT_DEFINITION | FRAGMENT_SPREAD | INLINE_FRAGMENT | VARIABLE_DEFINITION | SCHEMA | SCALAR | OBJECT | FIELD_DEFINITION | ARGUMENT_DEFINITION | INTERFACE | UNION | ENUM | ENUM_VALUE | INPUT_OBJECT | INPUT_FIELD_DEFINITION";

        assert_eq!(all, expected);
    }

    #[rstest]
    #[case("1.0", &[])]
    #[case("2.0", &["inaccessible"])]
    #[case("2.1", &["inaccessible"])]
    #[case("2.3", &["inaccessible", "tag"])]
    #[case("2.4", &["inaccessible", "tag"])]
    #[case("2.6", &["inaccessible", "tag", "authenticated"])]
    fn federation_directives_by_version(#[case] version: &str, #[case] expected: &[&str]) {
        let catalog = DirectiveCatalog::federation();
        assert_eq!(eligible_names(&catalog, version), expected);
    }

    #[test]
    fn eligible_directives_are_sorted_by_min_version() {
        let mut catalog = DirectiveCatalog::new();
        catalog.register(DirectiveDefinition::new(
            "late",
            FederationVersion::new(2, 5),
            DirectiveLocations::OBJECT,
        ));
        catalog.register(DirectiveDefinition::new(
            "early",
            FederationVersion::new(2, 0),
            DirectiveLocations::OBJECT,
        ));
        catalog.register(DirectiveDefinition::new(
            "also_late",
            FederationVersion::new(2, 5),
            DirectiveLocations::OBJECT,
        ));

        assert_eq!(eligible_names(&catalog, "3"), ["early", "late", "also_late"]);
    }

    #[test]
    fn registering_twice_replaces_in_place() {
        let mut catalog = DirectiveCatalog::federation();
        catalog.register(DirectiveDefinition::new(
            "inaccessible",
            FederationVersion::new(2, 0),
            DirectiveLocations::OBJECT,
        ));

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.iter().next().unwrap().locations, DirectiveLocations::OBJECT);
    }

    #[test]
    fn unknown_directive_lookup() {
        let catalog = DirectiveCatalog::federation();

        assert!(catalog.lookup("tag").unwrap().repeatable);
        assert!(matches!(
            catalog.lookup("shareable"),
            Err(Error::UnknownDirective(name)) if name == "shareable"
        ));
    }
}
