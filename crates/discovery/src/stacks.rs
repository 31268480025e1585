//! Discovery of clusters provisioned through infrastructure stacks.
//!
//! Stack listings carry no tags, so stacks are matched to clusters by name.
//! `eksctl-<cluster>-cluster` and `EKS-<cluster>-ControlPlane` name their
//! cluster explicitly. Every other `eksctl-`/`EKS-` stack (node groups, VPCs,
//! service roles, addons) belongs to a cluster but does not define one.
//!
//! Any other stack is a standalone legacy cluster stack, named after its
//! cluster, only when its name ends in `-cluster` or its template description
//! mentions eksctl or EKS. Everything else (databases, CDNs, ...) is not a
//! cluster.

use futures::StreamExt;
use kubescout_cloud::{StackLister, StackStatus, StackSummary};
use tracing::{debug, trace};

use crate::{ClusterDescriptor, Error, Result};

/// Stack statuses that represent a usable cluster.
pub const CLUSTER_STACK_STATUSES: [StackStatus; 1] = [StackStatus::CreateComplete];

/// Returns the name of the cluster `stack` provisions, if it provisions one.
#[must_use]
pub fn cluster_name_for_stack(stack: &StackSummary) -> Option<&str> {
    let stack_name = stack.stack_name.as_str();

    if let Some(rest) = stack_name.strip_prefix("eksctl-") {
        return rest.strip_suffix("-cluster").filter(|name| !name.is_empty());
    }

    if let Some(rest) = stack_name.strip_prefix("EKS-") {
        return rest
            .strip_suffix("-ControlPlane")
            .filter(|name| !name.is_empty());
    }

    let named_as_cluster = stack_name
        .strip_suffix("-cluster")
        .is_some_and(|prefix| !prefix.is_empty());
    let described_as_cluster = stack
        .template_description
        .as_deref()
        .is_some_and(mentions_eks);

    (named_as_cluster || described_as_cluster).then_some(stack_name)
}

fn mentions_eks(description: &str) -> bool {
    description
        .split(|c: char| !c.is_ascii_alphanumeric())
        .any(|word| word == "EKS" || word.eq_ignore_ascii_case("eksctl"))
}

/// Lists every successfully created stack once and maps the cluster stacks to
/// descriptors, in page order. Nothing is returned if any page fails.
pub(crate) async fn scan_stacks<S: StackLister>(stacks: &S) -> Result<Vec<ClusterDescriptor>> {
    let mut pages = stacks.stack_pages(&CLUSTER_STACK_STATUSES);
    let mut found = Vec::new();
    let mut page_count = 0_usize;

    while let Some(page) = pages.next().await {
        let page = page.map_err(|e| Error::Stacks(Box::new(e)))?;
        page_count += 1;

        for stack in &page {
            match cluster_name_for_stack(stack) {
                Some(cluster) => found.push(ClusterDescriptor::from_stack(cluster, stack)),
                None => trace!(stack = %stack.stack_name, "skipping non-cluster stack"),
            }
        }
    }

    debug!(
        pages = page_count,
        clusters = found.len(),
        "scanned infrastructure stacks"
    );

    Ok(found)
}

#[cfg(test)]
mod tests {
    use kubescout_cloud_mock::{Error as MockError, MockStackLister};

    use super::*;

    fn named(stack_name: &str) -> StackSummary {
        StackSummary::new(stack_name, "CREATE_COMPLETE")
    }

    fn described(stack_name: &str, description: &str) -> StackSummary {
        let mut stack = named(stack_name);
        stack.template_description = Some(description.to_string());
        stack
    }

    #[test]
    fn test_cluster_stacks_name_their_cluster() {
        assert_eq!(cluster_name_for_stack(&named("eksctl-prod-cluster")), Some("prod"));
        assert_eq!(
            cluster_name_for_stack(&named("EKS-staging-ControlPlane")),
            Some("staging")
        );
        assert_eq!(
            cluster_name_for_stack(&named("legacy-cluster")),
            Some("legacy-cluster")
        );
    }

    #[test]
    fn test_component_stacks_are_skipped() {
        for name in [
            "eksctl-prod-nodegroup-ng-1",
            "eksctl-prod-addon-iamserviceaccount-kube-system-aws-node",
            "eksctl-prod-fargate",
            "EKS-staging-DefaultNodeGroup",
            "EKS-staging-VPC",
            "EKS-staging-ServiceRole",
            "eksctl--cluster",
            "EKS--ControlPlane",
            "-cluster",
        ] {
            assert_eq!(cluster_name_for_stack(&named(name)), None, "{name}");
        }
    }

    #[test]
    fn test_unrelated_stacks_are_skipped() {
        for stack in [
            named("billing-rds-database"),
            named("marketing-site-cdn"),
            described("team-weeks-report", "Weekly reporting bucket"),
        ] {
            assert_eq!(cluster_name_for_stack(&stack), None, "{}", stack.stack_name);
        }
    }

    #[test]
    fn test_template_description_marks_cluster_stack() {
        let stack = described("analytics", "Amazon EKS control plane for analytics");
        assert_eq!(cluster_name_for_stack(&stack), Some("analytics"));

        let stack = described("batch", "created by eksctl - do not edit");
        assert_eq!(cluster_name_for_stack(&stack), Some("batch"));
    }

    #[tokio::test]
    async fn test_scan_requests_only_created_stacks() {
        let stacks = MockStackLister::new().with_page(vec![
            StackSummary::new("EKS-old-ControlPlane", "CREATE_COMPLETE"),
            StackSummary::new("EKS-old-VPC", "CREATE_COMPLETE"),
            StackSummary::new("eksctl-new-cluster", "CREATE_IN_PROGRESS"),
        ]);

        let found = scan_stacks(&stacks).await.unwrap();

        assert_eq!(
            found,
            vec![ClusterDescriptor::from_stack(
                "old",
                &StackSummary::new("EKS-old-ControlPlane", "CREATE_COMPLETE")
            )]
        );
        assert_eq!(stacks.calls(), vec![vec![StackStatus::CreateComplete]]);
    }

    #[tokio::test]
    async fn test_scan_keeps_page_order() {
        let stacks = MockStackLister::new()
            .with_page(vec![StackSummary::new("first-page-cluster", "CREATE_COMPLETE")])
            .with_page(vec![StackSummary::new("eksctl-b-cluster", "CREATE_COMPLETE")]);

        let names: Vec<String> = scan_stacks(&stacks)
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();

        assert_eq!(names, vec!["first-page-cluster", "b"]);
    }

    #[tokio::test]
    async fn test_scan_discards_partial_results_on_failure() {
        let stacks = MockStackLister::new()
            .with_page(vec![StackSummary::new("eksctl-a-cluster", "CREATE_COMPLETE")])
            .failing_after(1, MockError::Transport("throttled".to_string()));

        let error = scan_stacks(&stacks).await.unwrap_err();

        assert!(matches!(error, Error::Stacks(_)));
    }
}
