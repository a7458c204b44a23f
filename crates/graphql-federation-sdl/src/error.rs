use crate::DirectiveLocations;

/// Errors raised while defining, annotating or rendering a federated schema.
///
/// None of these are transient: they all point at a mistake in the schema definition.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The federation version could not be decomposed into numeric components.
    #[error("invalid federation version `{0}`, expected dot-separated numbers such as `2.3`")]
    InvalidVersion(String),
    /// The directive is not registered in the catalog.
    #[error("unknown directive @{0}")]
    UnknownDirective(String),
    /// The directive was attached somewhere its definition does not allow.
    #[error("directive @{directive} cannot be applied on {location}")]
    InvalidDirectiveLocation {
        directive: String,
        location: DirectiveLocations,
    },
    /// A non-repeatable directive was attached twice on the same element.
    #[error("directive @{directive} is not repeatable but was applied twice on `{element}`")]
    DuplicateDirective { directive: String, element: String },
    /// A type is referenced but was never registered in the schema.
    #[error("type `{0}` is referenced but not registered in the schema")]
    UnresolvedType(String),
    /// Two types were registered under the same name.
    #[error("type `{0}` is registered more than once")]
    DuplicateType(String),
    #[error("invalid type reference `{0}`")]
    InvalidTypeReference(String),
    /// An element option had an unexpected shape, or was not recognized at all.
    #[error("invalid element options: {0}")]
    InvalidOption(String),
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
