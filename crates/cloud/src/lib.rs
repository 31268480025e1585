//! Abstract interfaces for the cloud backends consulted during cluster
//! discovery: the managed control plane, infrastructure stacks, virtual
//! networks and caller identity.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod cluster;
mod error;
mod identity;
mod network;
mod stack;

pub use cluster::{ClusterRecord, ClusterStatus};
pub use error::{CloudError, CloudErrorKind};
pub use identity::CallerIdentity;
pub use network::Subnet;
pub use stack::{StackPage, StackStatus, StackSummary};

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;

/// A lazy, finite sequence of result pages. Re-invoke the producing method to
/// restart it.
pub type Pages<T, E> = BoxStream<'static, Result<Vec<T>, E>>;

/// Describes clusters managed by the control-plane service.
#[async_trait]
pub trait ControlPlane
where
    Self: Clone + Debug + Send + Sync + 'static,
{
    /// The error type for the control plane.
    type Error: CloudError;

    /// Describe the named cluster.
    ///
    /// Fails with an error of kind [`CloudErrorKind::NotFound`] when no cluster
    /// of that name exists.
    async fn describe_cluster(&self, name: &str) -> Result<ClusterRecord, Self::Error>;

    /// List the names of every cluster in the account/region, one page at a
    /// time.
    fn cluster_names(&self) -> Pages<String, Self::Error>;
}

/// Lists infrastructure-as-code stacks.
pub trait StackLister
where
    Self: Clone + Debug + Send + Sync + 'static,
{
    /// The error type for the stack backend.
    type Error: CloudError;

    /// List every stack whose status is in `status_filter`.
    ///
    /// Pages already yielded before an error item are not retracted.
    fn stack_pages(&self, status_filter: &[StackStatus]) -> Pages<StackSummary, Self::Error>;
}

/// Inspects virtual networks.
#[async_trait]
pub trait NetworkInspector
where
    Self: Clone + Debug + Send + Sync + 'static,
{
    /// The error type for the network backend.
    type Error: CloudError;

    /// Describe the given subnets.
    async fn describe_subnets(&self, subnet_ids: &[String]) -> Result<Vec<Subnet>, Self::Error>;
}

/// Inspects the identity of the current session.
#[async_trait]
pub trait IdentityInspector
where
    Self: Clone + Debug + Send + Sync + 'static,
{
    /// The error type for the identity backend.
    type Error: CloudError;

    /// Resolve the identity the session authenticates as.
    async fn caller_identity(&self) -> Result<CallerIdentity, Self::Error>;
}

/// Single point of access to the four capabilities for one
/// account/region/session.
///
/// Holds no discovery state, so one instance can back any number of
/// concurrent cluster providers.
#[derive(Debug)]
pub struct Provider<C, S, N, I>
where
    C: ControlPlane,
    S: StackLister,
    N: NetworkInspector,
    I: IdentityInspector,
{
    control_plane: Arc<C>,
    stacks: Arc<S>,
    network: Arc<N>,
    identity: Arc<I>,
}

impl<C, S, N, I> Clone for Provider<C, S, N, I>
where
    C: ControlPlane,
    S: StackLister,
    N: NetworkInspector,
    I: IdentityInspector,
{
    fn clone(&self) -> Self {
        Self {
            control_plane: self.control_plane.clone(),
            stacks: self.stacks.clone(),
            network: self.network.clone(),
            identity: self.identity.clone(),
        }
    }
}

impl<C, S, N, I> Provider<C, S, N, I>
where
    C: ControlPlane,
    S: StackLister,
    N: NetworkInspector,
    I: IdentityInspector,
{
    /// Creates a new provider from its capabilities.
    pub fn new(control_plane: C, stacks: S, network: N, identity: I) -> Self {
        Self {
            control_plane: Arc::new(control_plane),
            stacks: Arc::new(stacks),
            network: Arc::new(network),
            identity: Arc::new(identity),
        }
    }

    /// The control-plane capability.
    pub fn control_plane(&self) -> &C {
        &self.control_plane
    }

    /// The infrastructure-stack capability.
    pub fn stacks(&self) -> &S {
        &self.stacks
    }

    /// The network-inspection capability.
    pub fn network(&self) -> &N {
        &self.network
    }

    /// The identity capability.
    pub fn identity(&self) -> &I {
        &self.identity
    }
}
