use std::{cmp::Ordering, fmt, hash, str::FromStr};

use crate::{Error, Result};

/// A federation version as it is written at the schema definition boundary.
///
/// Integer, float and string spellings are all accepted, and normalized into a
/// [FederationVersion] right away.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum VersionInput {
    Int(i64),
    Float(f64),
    String(String),
}

impl From<i64> for VersionInput {
    fn from(value: i64) -> Self {
        VersionInput::Int(value)
    }
}

impl From<i32> for VersionInput {
    fn from(value: i32) -> Self {
        VersionInput::Int(value.into())
    }
}

impl From<u32> for VersionInput {
    fn from(value: u32) -> Self {
        VersionInput::Int(value.into())
    }
}

impl From<f64> for VersionInput {
    fn from(value: f64) -> Self {
        VersionInput::Float(value)
    }
}

impl From<&str> for VersionInput {
    fn from(value: &str) -> Self {
        VersionInput::String(value.to_owned())
    }
}

impl From<String> for VersionInput {
    fn from(value: String) -> Self {
        VersionInput::String(value)
    }
}

/// An Apollo Federation version, e.g. `2.3`.
///
/// The literal is kept as written, because it ends up verbatim in the `@link` url. Comparisons
/// only look at the numeric components, and missing trailing components count as zero: `2`,
/// `2.0` and `2.0.0` are all equal, and `2.0.1` is greater than all of them.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(try_from = "VersionInput")]
pub struct FederationVersion {
    literal: String,
    components: Vec<u64>,
}

impl FederationVersion {
    /// The first version of federation 2.
    pub const FEDERATION_2: (u64, u64) = (2, 0);

    pub fn new(major: u64, minor: u64) -> Self {
        FederationVersion {
            literal: format!("{major}.{minor}"),
            components: vec![major, minor],
        }
    }

    pub fn parse(input: impl Into<VersionInput>) -> Result<Self> {
        match input.into() {
            VersionInput::Int(int) => {
                let major = u64::try_from(int).map_err(|_| Error::InvalidVersion(int.to_string()))?;

                Ok(FederationVersion {
                    literal: major.to_string(),
                    components: vec![major],
                })
            }
            VersionInput::Float(float) => {
                if !float.is_finite() || float.is_sign_negative() {
                    return Err(Error::InvalidVersion(float.to_string()));
                }

                // The debug representation keeps the fractional part of round numbers: 2.0 stays "2.0".
                parse_components(format!("{float:?}"))
            }
            VersionInput::String(string) => parse_components(string.trim().to_owned()),
        }
    }

    /// The version exactly as it was written.
    pub fn as_str(&self) -> &str {
        &self.literal
    }

    pub fn major(&self) -> u64 {
        self.component(0)
    }

    pub fn minor(&self) -> u64 {
        self.component(1)
    }

    pub fn is_federation_2(&self) -> bool {
        let (major, minor) = Self::FEDERATION_2;
        *self >= FederationVersion::new(major, minor)
    }

    fn component(&self, idx: usize) -> u64 {
        self.components.get(idx).copied().unwrap_or_default()
    }

    /// Components without trailing zeroes, so that `2.0` and `2` hash the same.
    fn significant_components(&self) -> &[u64] {
        let len = self
            .components
            .iter()
            .rposition(|component| *component != 0)
            .map(|idx| idx + 1)
            .unwrap_or(0);

        &self.components[..len]
    }
}

fn parse_components(literal: String) -> Result<FederationVersion> {
    let components = literal
        .split('.')
        .map(|component| {
            if component.is_empty() || !component.bytes().all(|byte| byte.is_ascii_digit()) {
                return None;
            }

            component.parse::<u64>().ok()
        })
        .collect::<Option<Vec<_>>>();

    match components {
        Some(components) => Ok(FederationVersion { literal, components }),
        None => Err(Error::InvalidVersion(literal)),
    }
}

impl Default for FederationVersion {
    fn default() -> Self {
        FederationVersion::new(1, 0)
    }
}

impl TryFrom<VersionInput> for FederationVersion {
    type Error = Error;

    fn try_from(value: VersionInput) -> Result<Self> {
        FederationVersion::parse(value)
    }
}

impl FromStr for FederationVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FederationVersion::parse(s)
    }
}

impl fmt::Display for FederationVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

impl PartialEq for FederationVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FederationVersion {}

impl PartialOrd for FederationVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FederationVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());

        (0..len)
            .map(|idx| self.component(idx).cmp(&other.component(idx)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl hash::Hash for FederationVersion {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.significant_components().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_to_federation_one() {
        let version = FederationVersion::default();

        assert_eq!(version.as_str(), "1.0");
        assert!(!version.is_federation_2());
    }

    #[rstest]
    #[case(VersionInput::Int(2), true)]
    #[case(VersionInput::Float(2.0), true)]
    #[case(VersionInput::Float(2.3), true)]
    #[case("2.0".into(), true)]
    #[case("2.0.1".into(), true)]
    #[case("2.3".into(), true)]
    #[case("10".into(), true)]
    #[case(VersionInput::Int(1), false)]
    #[case("1.5".into(), false)]
    #[case("1.99.99".into(), false)]
    fn federation_2_threshold(#[case] input: VersionInput, #[case] expected: bool) {
        let version = FederationVersion::parse(input).unwrap();
        assert_eq!(version.is_federation_2(), expected, "{version}");
    }

    #[test]
    fn spellings_of_two_are_equal() {
        let int = FederationVersion::parse(2).unwrap();
        let float = FederationVersion::parse(2.0).unwrap();
        let string = FederationVersion::parse("2.0").unwrap();

        assert_eq!(int, float);
        assert_eq!(float, string);
        assert_eq!(int, FederationVersion::new(2, 0));
    }

    #[test]
    fn patch_component_is_compared() {
        let patch = FederationVersion::parse("2.0.1").unwrap();
        let base = FederationVersion::parse("2.0").unwrap();

        assert!(patch > base);
        assert!(FederationVersion::parse("2.10").unwrap() > FederationVersion::parse("2.9").unwrap());
    }

    #[test]
    fn literal_is_preserved() {
        assert_eq!(FederationVersion::parse("2.3").unwrap().to_string(), "2.3");
        assert_eq!(FederationVersion::parse(" 2.3 ").unwrap().to_string(), "2.3");
        assert_eq!(FederationVersion::parse(2.0).unwrap().to_string(), "2.0");
        assert_eq!(FederationVersion::parse(2.3).unwrap().to_string(), "2.3");
        assert_eq!(FederationVersion::parse(2).unwrap().to_string(), "2");
    }

    #[test]
    fn equal_versions_hash_the_same() {
        use std::collections::HashSet;

        let versions: HashSet<FederationVersion> = ["2", "2.0", "2.0.0"]
            .into_iter()
            .map(|version| version.parse().unwrap())
            .collect();

        assert_eq!(versions.len(), 1);
    }

    #[rstest]
    #[case("")]
    #[case("two")]
    #[case("2.")]
    #[case("2..1")]
    #[case("v2.3")]
    #[case("2.3-beta")]
    #[case("-2")]
    fn malformed_strings_are_rejected(#[case] input: &str) {
        let error = FederationVersion::parse(input).unwrap_err();
        assert!(matches!(error, Error::InvalidVersion(_)), "{error}");
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert!(matches!(FederationVersion::parse(-1), Err(Error::InvalidVersion(_))));
        assert!(matches!(FederationVersion::parse(f64::NAN), Err(Error::InvalidVersion(_))));
        assert!(matches!(FederationVersion::parse(-2.0), Err(Error::InvalidVersion(_))));
    }
}
