//! Mock implementations of the cloud capabilities. They replay scripted
//! responses and record every invocation so tests can assert on call counts
//! and arguments.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;

pub use error::Error;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use kubescout_cloud::{
    CallerIdentity, ClusterRecord, ControlPlane, IdentityInspector, NetworkInspector, Pages,
    Provider, StackLister, StackPage, StackStatus, StackSummary, Subnet,
};
use parking_lot::Mutex;

/// A provider assembled entirely from mocks.
pub type MockProvider =
    Provider<MockControlPlane, MockStackLister, MockNetworkInspector, MockIdentityInspector>;

/// Mock control plane.
#[derive(Clone, Debug, Default)]
pub struct MockControlPlane {
    clusters: Arc<Mutex<Vec<ClusterRecord>>>,
    stale_names: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<Error>>>,
    page_size: Option<usize>,
    describe_calls: Arc<Mutex<Vec<String>>>,
    list_calls: Arc<Mutex<usize>>,
}

impl MockControlPlane {
    /// Creates an empty mock control plane.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cluster the mock will describe and list.
    #[must_use]
    pub fn with_cluster(self, record: ClusterRecord) -> Self {
        self.clusters.lock().push(record);
        self
    }

    /// Makes every call fail with `error`.
    #[must_use]
    pub fn failing_with(self, error: Error) -> Self {
        *self.failure.lock() = Some(error);
        self
    }

    /// Splits name listings into pages of `page_size` names.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Lists `name` after the known clusters without being able to describe
    /// it, as if it were deleted between list and describe.
    #[must_use]
    pub fn with_stale_name(self, name: impl Into<String>) -> Self {
        self.stale_names.lock().push(name.into());
        self
    }

    /// The names passed to `describe_cluster`, in call order.
    #[must_use]
    pub fn describe_calls(&self) -> Vec<String> {
        self.describe_calls.lock().clone()
    }

    /// Number of `describe_cluster` invocations.
    #[must_use]
    pub fn describe_call_count(&self) -> usize {
        self.describe_calls.lock().len()
    }

    /// Number of `cluster_names` invocations.
    #[must_use]
    pub fn list_call_count(&self) -> usize {
        *self.list_calls.lock()
    }
}

#[async_trait]
impl ControlPlane for MockControlPlane {
    type Error = Error;

    async fn describe_cluster(&self, name: &str) -> Result<ClusterRecord, Self::Error> {
        self.describe_calls.lock().push(name.to_string());

        if let Some(error) = self.failure.lock().clone() {
            return Err(error);
        }

        self.clusters
            .lock()
            .iter()
            .find(|record| record.name == name)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("cluster {name}")))
    }

    fn cluster_names(&self) -> Pages<String, Self::Error> {
        *self.list_calls.lock() += 1;

        if let Some(error) = self.failure.lock().clone() {
            return futures::stream::iter(vec![Err(error)]).boxed();
        }

        let names: Vec<String> = self
            .clusters
            .lock()
            .iter()
            .map(|record| record.name.clone())
            .chain(self.stale_names.lock().iter().cloned())
            .collect();
        let page_size = self.page_size.unwrap_or(names.len()).max(1);
        let pages: Vec<Result<Vec<String>, Error>> = names
            .chunks(page_size)
            .map(|chunk| Ok(chunk.to_vec()))
            .collect();

        futures::stream::iter(pages).boxed()
    }
}

/// Mock infrastructure-stack lister.
///
/// Scripted pages are filtered by the requested statuses the way the real
/// backend does, so a page may come back empty.
#[derive(Clone, Debug, Default)]
pub struct MockStackLister {
    pages: Arc<Mutex<Vec<StackPage>>>,
    failure: Arc<Mutex<Option<(usize, Error)>>>,
    calls: Arc<Mutex<Vec<Vec<StackStatus>>>>,
}

impl MockStackLister {
    /// Creates a mock with no stacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a page of stacks.
    #[must_use]
    pub fn with_page(self, page: StackPage) -> Self {
        self.pages.lock().push(page);
        self
    }

    /// Fails with `error` after delivering `after_pages` pages.
    #[must_use]
    pub fn failing_after(self, after_pages: usize, error: Error) -> Self {
        *self.failure.lock() = Some((after_pages, error));
        self
    }

    /// The status filters passed to each `stack_pages` invocation.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<StackStatus>> {
        self.calls.lock().clone()
    }

    /// Number of `stack_pages` invocations.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl StackLister for MockStackLister {
    type Error = Error;

    fn stack_pages(&self, status_filter: &[StackStatus]) -> Pages<StackSummary, Self::Error> {
        self.calls.lock().push(status_filter.to_vec());

        let mut items: Vec<Result<StackPage, Error>> = self
            .pages
            .lock()
            .iter()
            .map(|page| {
                Ok(page
                    .iter()
                    .filter(|stack| {
                        status_filter.is_empty() || status_filter.contains(&stack.status)
                    })
                    .cloned()
                    .collect())
            })
            .collect();

        if let Some((after_pages, error)) = self.failure.lock().clone() {
            items.truncate(after_pages);
            items.push(Err(error));
        }

        futures::stream::iter(items).boxed()
    }
}

/// Mock network inspector.
#[derive(Clone, Debug, Default)]
pub struct MockNetworkInspector {
    subnets: Arc<Mutex<HashMap<String, Subnet>>>,
    failure: Arc<Mutex<Option<Error>>>,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockNetworkInspector {
    /// Creates a mock with no subnets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subnet the mock will describe.
    #[must_use]
    pub fn with_subnet(self, subnet: Subnet) -> Self {
        self.subnets
            .lock()
            .insert(subnet.subnet_id.clone(), subnet);
        self
    }

    /// Makes every call fail with `error`.
    #[must_use]
    pub fn failing_with(self, error: Error) -> Self {
        *self.failure.lock() = Some(error);
        self
    }

    /// Number of `describe_subnets` invocations.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl NetworkInspector for MockNetworkInspector {
    type Error = Error;

    async fn describe_subnets(&self, subnet_ids: &[String]) -> Result<Vec<Subnet>, Self::Error> {
        self.calls.lock().push(subnet_ids.to_vec());

        if let Some(error) = self.failure.lock().clone() {
            return Err(error);
        }

        let subnets = self.subnets.lock();
        subnet_ids
            .iter()
            .map(|id| {
                subnets
                    .get(id)
                    .cloned()
                    .ok_or_else(|| Error::NotFound(format!("subnet {id}")))
            })
            .collect()
    }
}

/// Mock identity inspector.
#[derive(Clone, Debug)]
pub struct MockIdentityInspector {
    identity: Arc<Mutex<Result<CallerIdentity, Error>>>,
    calls: Arc<Mutex<usize>>,
}

impl Default for MockIdentityInspector {
    fn default() -> Self {
        Self::new(CallerIdentity {
            account: "000000000000".to_string(),
            arn: "arn:aws:iam::000000000000:user/mock".to_string(),
            user_id: "AIDAMOCK".to_string(),
        })
    }
}

impl MockIdentityInspector {
    /// Creates a mock that resolves to `identity`.
    #[must_use]
    pub fn new(identity: CallerIdentity) -> Self {
        Self {
            identity: Arc::new(Mutex::new(Ok(identity))),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Makes every call fail with `error`.
    #[must_use]
    pub fn failing_with(self, error: Error) -> Self {
        *self.identity.lock() = Err(error);
        self
    }

    /// Number of `caller_identity` invocations.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl IdentityInspector for MockIdentityInspector {
    type Error = Error;

    async fn caller_identity(&self) -> Result<CallerIdentity, Self::Error> {
        *self.calls.lock() += 1;
        self.identity.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;
    use kubescout_cloud::{CloudError, ClusterStatus};

    use super::*;

    #[tokio::test]
    async fn test_describe_records_calls_and_reports_not_found() {
        let control_plane =
            MockControlPlane::new().with_cluster(ClusterRecord::new("alpha", "ACTIVE"));

        let record = control_plane.describe_cluster("alpha").await.unwrap();
        assert_eq!(record.status, ClusterStatus::Active);

        let error = control_plane.describe_cluster("beta").await.unwrap_err();
        assert!(error.is_not_found());

        assert_eq!(control_plane.describe_calls(), vec!["alpha", "beta"]);
    }

    #[tokio::test]
    async fn test_cluster_names_are_paged() {
        let control_plane = MockControlPlane::new()
            .with_cluster(ClusterRecord::new("a", "ACTIVE"))
            .with_cluster(ClusterRecord::new("b", "ACTIVE"))
            .with_cluster(ClusterRecord::new("c", "ACTIVE"))
            .with_page_size(2);

        let pages: Vec<Vec<String>> = control_plane.cluster_names().try_collect().await.unwrap();

        assert_eq!(pages, vec![vec!["a", "b"], vec!["c"]]);
        assert_eq!(control_plane.list_call_count(), 1);
    }

    #[tokio::test]
    async fn test_stack_pages_apply_status_filter() {
        let stacks = MockStackLister::new().with_page(vec![
            StackSummary::new("done", "CREATE_COMPLETE"),
            StackSummary::new("busy", "CREATE_IN_PROGRESS"),
        ]);

        let pages: Vec<StackPage> = stacks
            .stack_pages(&[StackStatus::CreateComplete])
            .try_collect()
            .await
            .unwrap();

        assert_eq!(pages, vec![vec![StackSummary::new("done", "CREATE_COMPLETE")]]);
        assert_eq!(stacks.calls(), vec![vec![StackStatus::CreateComplete]]);
    }

    #[tokio::test]
    async fn test_stack_pages_deliver_pages_before_failure() {
        let stacks = MockStackLister::new()
            .with_page(vec![StackSummary::new("one", "CREATE_COMPLETE")])
            .with_page(vec![StackSummary::new("two", "CREATE_COMPLETE")])
            .failing_after(1, Error::Transport("throttled".to_string()));

        let items: Vec<Result<StackPage, Error>> = stacks.stack_pages(&[]).collect().await;

        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert_eq!(items[1], Err(Error::Transport("throttled".to_string())));
    }

    #[tokio::test]
    async fn test_identity_failure_is_scripted() {
        let identity =
            MockIdentityInspector::default().failing_with(Error::Transport("expired".to_string()));

        assert!(identity.caller_identity().await.is_err());
        assert_eq!(identity.call_count(), 1);
    }
}
