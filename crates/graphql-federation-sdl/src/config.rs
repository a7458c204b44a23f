use crate::{FederationVersion, Result};

/// Configuration file contents.
///
/// ```toml
/// [federation]
/// version = "2.3"
/// ```
#[derive(Debug, Default, serde::Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub federation: FederationConfig,
}

impl Config {
    pub fn from_toml(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }
}

#[derive(Debug, Default, serde::Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FederationConfig {
    /// Integer, float or string. Defaults to federation 1 when absent.
    pub version: Option<FederationVersion>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use indoc::indoc;

    #[test]
    fn empty_config() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn version_spellings() {
        for (input, expected) in [
            ("version = \"2.3\"", "2.3"),
            ("version = 2.3", "2.3"),
            ("version = 2", "2"),
            ("version = \"2.0.1\"", "2.0.1"),
        ] {
            let config = Config::from_toml(&format!("[federation]\n{input}")).unwrap();
            let version = config.federation.version.unwrap();

            assert_eq!(version.as_str(), expected, "{input}");
            assert!(version.is_federation_2());
        }
    }

    #[test]
    fn invalid_version() {
        let error = Config::from_toml(indoc! {r#"
            [federation]
            version = "latest"
        "#})
        .unwrap_err();

        assert!(matches!(error, Error::Config(_)));
        assert!(error.to_string().contains("invalid federation version `latest`"), "{error}");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let error = Config::from_toml(indoc! {r#"
            [federation]
            verison = "2.3"
        "#})
        .unwrap_err();

        assert!(error.to_string().contains("unknown field `verison`"), "{error}");
    }
}
