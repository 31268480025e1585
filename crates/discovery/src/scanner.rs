use futures::StreamExt;
use kubescout_cloud::{
    CallerIdentity, ControlPlane, IdentityInspector, NetworkInspector, Provider, StackLister,
};
use tracing::debug;

use crate::merge::merge;
use crate::provider::{describe_native, resolve_identity};
use crate::stacks::scan_stacks;
use crate::{ClusterDescriptor, DiagnosticLevel, Error, Result};

/// Discovers every cluster in the account/region, for callers that do not
/// name one.
#[derive(Debug)]
pub struct AccountScanner<'a, C, S, N, I>
where
    C: ControlPlane,
    S: StackLister,
    N: NetworkInspector,
    I: IdentityInspector,
{
    provider: &'a Provider<C, S, N, I>,
    level: DiagnosticLevel,
}

impl<'a, C, S, N, I> AccountScanner<'a, C, S, N, I>
where
    C: ControlPlane,
    S: StackLister,
    N: NetworkInspector,
    I: IdentityInspector,
{
    /// Creates a scanner at the default (normal) diagnostic level.
    #[must_use]
    pub fn new(provider: &'a Provider<C, S, N, I>) -> Self {
        Self {
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

    /// Resolves the identity the session authenticates as.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Identity`] if the identity capability fails.
    pub async fn check_auth(&self) -> Result<CallerIdentity> {
        resolve_identity(self.provider.identity()).await
    }

    /// Describes every native cluster in listing order and, at debug level or
    /// above, appends the stack-origin clusters no native record covers.
    ///
    /// A cluster deleted between listing and describing is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ControlPlane`] or [`Error::Stacks`] when either backend
    /// fails.
    pub async fn discover_all(&self) -> Result<Vec<ClusterDescriptor>> {
        let control_plane = self.provider.control_plane();
        let mut pages = control_plane.cluster_names();
        let mut native = Vec::new();

        while let Some(page) = pages.next().await {
            let names = page.map_err(|e| Error::ControlPlane(Box::new(e)))?;

            for name in names {
                if let Some(descriptor) = describe_native(control_plane, &name).await? {
                    native.push(descriptor);
                }
            }
        }

        debug!(clusters = native.len(), "listed native clusters");

        if !self.level.scans_stacks() {
            return Ok(native);
        }

        let legacy = scan_stacks(self.provider.stacks()).await?;

        Ok(merge(native, legacy))
    }
}
