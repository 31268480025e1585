use std::fmt::{self, Display};

use kubescout_cloud::{ClusterRecord, ClusterStatus, StackSummary};
use serde::Serialize;

/// Which backend a cluster was discovered through.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "origin", rename_all = "kebab-case")]
pub enum Origin {
    /// Managed directly by the control-plane service.
    Native,

    /// Known only through an infrastructure-as-code stack.
    InfrastructureStack {
        /// Identifier of the stack that provisioned the cluster.
        stack_id: String,
    },
}

impl Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => f.write_str("native"),
            Self::InfrastructureStack { .. } => f.write_str("infrastructure-stack"),
        }
    }
}

/// One discovered cluster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ClusterDescriptor {
    /// The cluster name. Merge key across origins.
    pub name: String,

    /// Status literal as reported by the origin backend.
    pub status: ClusterStatus,

    /// Where the cluster was discovered.
    #[serde(flatten)]
    pub origin: Origin,
}

impl ClusterDescriptor {
    /// Descriptor for a cluster reported by the control plane.
    #[must_use]
    pub fn native(record: &ClusterRecord) -> Self {
        Self {
            name: record.name.clone(),
            status: record.status.clone(),
            origin: Origin::Native,
        }
    }

    /// Descriptor for a cluster provisioned by `stack`.
    #[must_use]
    pub fn from_stack(cluster_name: &str, stack: &StackSummary) -> Self {
        Self {
            name: cluster_name.to_string(),
            status: ClusterStatus::Legacy(stack.status.as_str().to_string()),
            origin: Origin::InfrastructureStack {
                stack_id: stack.identifier().to_string(),
            },
        }
    }

    /// Whether the control plane reported this cluster.
    #[must_use]
    pub const fn is_native(&self) -> bool {
        matches!(self.origin, Origin::Native)
    }

    /// The provisioning stack, for stack-origin clusters.
    #[must_use]
    pub fn stack_id(&self) -> Option<&str> {
        match &self.origin {
            Origin::Native => None,
            Origin::InfrastructureStack { stack_id } => Some(stack_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_copies_status_verbatim() {
        let record = ClusterRecord::new("test-cluster", "CREATING");
        let descriptor = ClusterDescriptor::native(&record);

        assert!(descriptor.is_native());
        assert_eq!(descriptor.status.as_str(), "CREATING");
        assert_eq!(descriptor.stack_id(), None);
    }

    #[test]
    fn test_stack_descriptor_keeps_stack_status_literal() {
        let stack = StackSummary::new("EKS-old-ControlPlane", "CREATE_COMPLETE")
            .with_stack_id("arn:aws:cloudformation:us-west-2:000000000000:stack/EKS-old-ControlPlane/1");
        let descriptor = ClusterDescriptor::from_stack("old", &stack);

        assert!(!descriptor.is_native());
        assert_eq!(descriptor.name, "old");
        assert_eq!(descriptor.status.as_str(), "CREATE_COMPLETE");
        assert_eq!(
            descriptor.stack_id(),
            Some("arn:aws:cloudformation:us-west-2:000000000000:stack/EKS-old-ControlPlane/1")
        );
    }

    #[test]
    fn test_serialized_shape() {
        let native = ClusterDescriptor::native(&ClusterRecord::new("a", "ACTIVE"));
        let legacy =
            ClusterDescriptor::from_stack("b", &StackSummary::new("b", "CREATE_COMPLETE"));

        assert_eq!(
            serde_json::to_value(&native).unwrap(),
            serde_json::json!({"name": "a", "status": "ACTIVE", "origin": "native"})
        );
        assert_eq!(
            serde_json::to_value(&legacy).unwrap(),
            serde_json::json!({
                "name": "b",
                "status": "CREATE_COMPLETE",
                "origin": "infrastructure-stack",
                "stack_id": "b"
            })
        );
    }
}
