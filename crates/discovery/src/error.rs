use thiserror::Error;

/// Boxed capability error, kept as the capability produced it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for discovery operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during cluster discovery.
#[derive(Debug, Error)]
pub enum Error {
    /// The control plane failed for a reason other than a missing cluster.
    #[error("control plane request failed: {0}")]
    ControlPlane(#[source] BoxError),

    /// The identity capability failed.
    #[error("identity resolution failed: {0}")]
    Identity(#[source] BoxError),

    /// The cluster name violates the naming rules.
    #[error("invalid cluster name {name:?}: {reason}")]
    InvalidClusterName {
        /// The rejected name.
        name: String,

        /// Which rule it violates.
        reason: &'static str,
    },

    /// The network-inspection capability failed.
    #[error("network inspection failed: {0}")]
    Network(#[source] BoxError),

    /// The report could not be serialized.
    #[error("report serialization failed: {0}")]
    Report(#[from] serde_json::Error),

    /// The infrastructure-stack listing failed.
    #[error("infrastructure stack listing failed: {0}")]
    Stacks(#[source] BoxError),
}
