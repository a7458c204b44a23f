use crate::FederationVersion;

/// Per-schema federation state.
///
/// Resolved once while the schema is defined and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FederationContext {
    version: FederationVersion,
}

impl FederationContext {
    pub fn new(version: FederationVersion) -> Self {
        FederationContext { version }
    }

    /// Sets the federation version. When called twice, the last call wins.
    pub fn set_version(&mut self, version: FederationVersion) {
        if self.version != FederationVersion::default() {
            tracing::debug!(previous = %self.version, new = %version, "overriding federation version");
        }

        self.version = version;
    }

    /// The selected version, `1.0` when none was set.
    pub fn version(&self) -> &FederationVersion {
        &self.version
    }

    pub fn is_federation_2(&self) -> bool {
        self.version.is_federation_2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_1_0() {
        let context = FederationContext::default();

        assert_eq!(context.version().as_str(), "1.0");
        assert!(!context.is_federation_2());
    }

    #[test]
    fn last_write_wins() {
        let mut context = FederationContext::default();
        context.set_version("2.3".parse().unwrap());
        context.set_version("1.5".parse().unwrap());

        assert_eq!(context.version().as_str(), "1.5");
        assert!(!context.is_federation_2());
    }
}
