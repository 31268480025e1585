use std::fmt::{self, Display};

use serde::{Serialize, Serializer};

/// Lifecycle status of a cluster.
///
/// Known control-plane values get their own variant; anything else is kept
/// verbatim so that [`ClusterStatus::as_str`] always returns the literal the
/// backend reported.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ClusterStatus {
    /// `ACTIVE`
    Active,

    /// `CREATING`
    Creating,

    /// `DELETING`
    Deleting,

    /// `FAILED`
    Failed,

    /// `PENDING`
    Pending,

    /// `UPDATING`
    Updating,

    /// Cluster known only through an infrastructure stack. Carries the stack
    /// status literal (e.g. `CREATE_COMPLETE`).
    Legacy(String),

    /// Any control-plane status this crate does not recognise.
    Unknown(String),
}

impl ClusterStatus {
    /// The literal status string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "ACTIVE",
            Self::Creating => "CREATING",
            Self::Deleting => "DELETING",
            Self::Failed => "FAILED",
            Self::Pending => "PENDING",
            Self::Updating => "UPDATING",
            Self::Legacy(status) | Self::Unknown(status) => status,
        }
    }
}

impl From<&str> for ClusterStatus {
    fn from(status: &str) -> Self {
        match status {
            "ACTIVE" => Self::Active,
            "CREATING" => Self::Creating,
            "DELETING" => Self::Deleting,
            "FAILED" => Self::Failed,
            "PENDING" => Self::Pending,
            "UPDATING" => Self::Updating,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl Display for ClusterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ClusterStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A cluster as reported by the control plane.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClusterRecord {
    /// The cluster name.
    pub name: String,

    /// The status reported at query time.
    pub status: ClusterStatus,

    /// The API server endpoint.
    pub endpoint: Option<String>,

    /// The VPC the control plane is attached to.
    pub vpc_id: Option<String>,

    /// The subnets the control plane is attached to.
    pub subnet_ids: Vec<String>,
}

impl ClusterRecord {
    /// Creates a record with only a name and status set.
    pub fn new(name: impl Into<String>, status: impl Into<ClusterStatus>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            endpoint: None,
            vpc_id: None,
            subnet_ids: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses_round_trip_literal() {
        for literal in ["ACTIVE", "CREATING", "DELETING", "FAILED", "PENDING", "UPDATING"] {
            assert_eq!(ClusterStatus::from(literal).as_str(), literal);
        }
    }

    #[test]
    fn test_unknown_status_is_kept_verbatim() {
        let status = ClusterStatus::from("RESIZING");

        assert_eq!(status, ClusterStatus::Unknown("RESIZING".to_string()));
        assert_eq!(status.to_string(), "RESIZING");
    }

    #[test]
    fn test_status_serializes_as_literal() {
        let legacy = ClusterStatus::Legacy("CREATE_COMPLETE".to_string());

        assert_eq!(serde_json::to_string(&legacy).unwrap(), "\"CREATE_COMPLETE\"");
        assert_eq!(
            serde_json::to_string(&ClusterStatus::Active).unwrap(),
            "\"ACTIVE\""
        );
    }
}
