use crate::{Error, Result};

const MAX_NAME_LEN: usize = 100;

/// Identifies the cluster to discover.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClusterSpec {
    name: String,
    region: Option<String>,
}

impl ClusterSpec {
    /// Creates a spec for the named cluster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidClusterName`] if the name is empty, longer than
    /// 100 characters, does not start with an alphanumeric character, or
    /// contains anything other than alphanumerics, `-` and `_`.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;

        Ok(Self { name, region: None })
    }

    /// Records the region the cluster lives in.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// The cluster name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The region, if one was given.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

fn validate_name(name: &str) -> Result<()> {
    let invalid = |reason| {
        Err(Error::InvalidClusterName {
            name: name.to_string(),
            reason,
        })
    };

    if name.is_empty() {
        return invalid("must not be empty");
    }
    if name.len() > MAX_NAME_LEN {
        return invalid("must be at most 100 characters");
    }
    if !name.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return invalid("must start with an alphanumeric character");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return invalid("may only contain alphanumerics, '-' and '_'");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["test-cluster", "a", "prod_eu_1", "0cluster"] {
            assert_eq!(ClusterSpec::new(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_invalid_names() {
        let too_long = "x".repeat(101);

        for name in ["", "-leading", "has space", "dots.not.allowed", too_long.as_str()] {
            assert!(
                matches!(
                    ClusterSpec::new(name),
                    Err(Error::InvalidClusterName { .. })
                ),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_region_is_optional() {
        let spec = ClusterSpec::new("test-cluster").unwrap();
        assert_eq!(spec.region(), None);

        let spec = spec.with_region("us-west-2");
        assert_eq!(spec.region(), Some("us-west-2"));
    }
}
