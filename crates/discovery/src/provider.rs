use kubescout_cloud::{
    CallerIdentity, CloudError, ControlPlane, IdentityInspector, NetworkInspector, Provider,
    StackLister, Subnet,
};
use tracing::{debug, info};

use crate::merge::merge;
use crate::stacks::scan_stacks;
use crate::{ClusterDescriptor, ClusterSpec, DiagnosticLevel, Error, Result};

/// Network placement of a native cluster.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClusterNetwork {
    /// The API server endpoint.
    pub endpoint: Option<String>,

    /// The VPC the control plane is attached to.
    pub vpc_id: Option<String>,

    /// The control plane's subnets.
    pub subnets: Vec<Subnet>,
}

/// Couples a [`Provider`] with the cluster to discover.
#[derive(Debug)]
pub struct ClusterProvider<'a, C, S, N, I>
where
    C: ControlPlane,
    S: StackLister,
    N: NetworkInspector,
    I: IdentityInspector,
{
    spec: &'a ClusterSpec,
    provider: &'a Provider<C, S, N, I>,
    level: DiagnosticLevel,
}

impl<'a, C, S, N, I> ClusterProvider<'a, C, S, N, I>
where
    C: ControlPlane,
    S: StackLister,
    N: NetworkInspector,
    I: IdentityInspector,
{
    /// Creates a cluster provider at the default (normal) diagnostic level.
    #[must_use]
    pub fn new(spec: &'a ClusterSpec, provider: &'a Provider<C, S, N, I>) -> Self {
        Self {
            spec,
            provider,
            level: DiagnosticLevel::default(),
        }
    }

    /// Sets the diagnostic level that gates the stack scan.
    #[must_use]
    pub const fn with_level(mut self, level: DiagnosticLevel) -> Self {
        self.level = level;
        self
    }

    /// The cluster spec.
    #[must_use]
    pub const fn spec(&self) -> &ClusterSpec {
        self.spec
    }

    /// Discovers the named cluster and, at debug level or above, every
    /// cluster provisioned through infrastructure stacks.
    ///
    /// The native record (if any) comes first, followed by stack-origin
    /// clusters in page order. A name known to the control plane is never
    /// repeated from a stack.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ControlPlane`] or [`Error::Stacks`] when either backend
    /// fails. A missing native cluster is not an error.
    pub async fn discover(&self) -> Result<Vec<ClusterDescriptor>> {
        debug!(
            cluster = self.spec.name(),
            region = %self.spec.region().unwrap_or("default"),
            level = %self.level,
            "discovering clusters"
        );

        let native: Vec<ClusterDescriptor> =
            describe_native(self.provider.control_plane(), self.spec.name())
                .await?
                .into_iter()
                .collect();

        if !self.level.scans_stacks() {
            debug!(level = %self.level, "skipping infrastructure stack scan");
            return Ok(native);
        }

        let legacy = scan_stacks(self.provider.stacks()).await?;

        Ok(merge(native, legacy))
    }

    /// Resolves the identity the session authenticates as.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Identity`] if the identity capability fails.
    pub async fn check_auth(&self) -> Result<CallerIdentity> {
        resolve_identity(self.provider.identity()).await
    }

    /// Resolves the VPC subnets of the named cluster. Returns `None` when the
    /// control plane has no such cluster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ControlPlane`] or [`Error::Network`] when either
    /// backend fails.
    pub async fn network(&self) -> Result<Option<ClusterNetwork>> {
        let record = match self
            .provider
            .control_plane()
            .describe_cluster(self.spec.name())
            .await
        {
            Ok(record) => record,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(Error::ControlPlane(Box::new(e))),
        };

        let subnets = self
            .provider
            .network()
            .describe_subnets(&record.subnet_ids)
            .await
            .map_err(|e| Error::Network(Box::new(e)))?;

        Ok(Some(ClusterNetwork {
            endpoint: record.endpoint,
            vpc_id: record.vpc_id,
            subnets,
        }))
    }
}

pub(crate) async fn resolve_identity<I: IdentityInspector>(
    identity: &I,
) -> Result<CallerIdentity> {
    let identity = identity
        .caller_identity()
        .await
        .map_err(|e| Error::Identity(Box::new(e)))?;

    debug!(account = %identity.account, arn = %identity.arn, "resolved caller identity");

    Ok(identity)
}

/// Describes `name`, treating absence as "no native contribution".
pub(crate) async fn describe_native<C: ControlPlane>(
    control_plane: &C,
    name: &str,
) -> Result<Option<ClusterDescriptor>> {
    match control_plane.describe_cluster(name).await {
        Ok(record) => {
            info!(cluster = %record.name, status = %record.status, "found native cluster");
            Ok(Some(ClusterDescriptor::native(&record)))
        }
        Err(e) if e.is_not_found() => {
            debug!(cluster = name, "no native cluster with this name");
            Ok(None)
        }
        Err(e) => Err(Error::ControlPlane(Box::new(e))),
    }
}
