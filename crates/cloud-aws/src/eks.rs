use async_stream::stream;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_eks::operation::describe_cluster::DescribeClusterError;
use kubescout_cloud::{ClusterRecord, ClusterStatus, ControlPlane, Pages};

use crate::{Error, Result};

/// Control plane backed by Amazon EKS.
#[derive(Clone, Debug)]
pub struct EksControlPlane {
    client: aws_sdk_eks::Client,
}

impl EksControlPlane {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_eks::Client::new(config),
        }
    }
}

#[async_trait]
impl ControlPlane for EksControlPlane {
    type Error = Error;

    async fn describe_cluster(&self, name: &str) -> Result<ClusterRecord> {
        let resp = self.client.describe_cluster().name(name).send().await;

        let cluster = match resp {
            Ok(resp) => resp.cluster.ok_or(Error::MissingField {
                operation: "DescribeCluster",
                field: "cluster",
            })?,
            Err(e)
                if e.as_service_error()
                    .is_some_and(DescribeClusterError::is_resource_not_found_exception) =>
            {
                return Err(Error::ClusterNotFound(name.to_string()));
            }
            Err(e) => return Err(Error::Eks(e.into())),
        };

        let status = cluster.status.ok_or(Error::MissingField {
            operation: "DescribeCluster",
            field: "status",
        })?;
        let (vpc_id, subnet_ids) = cluster
            .resources_vpc_config
            .map(|vpc| (vpc.vpc_id, vpc.subnet_ids.unwrap_or_default()))
            .unwrap_or_default();

        Ok(ClusterRecord {
            name: cluster.name.unwrap_or_else(|| name.to_string()),
            status: ClusterStatus::from(status.as_str()),
            endpoint: cluster.endpoint,
            vpc_id,
            subnet_ids,
        })
    }

    fn cluster_names(&self) -> Pages<String, Error> {
        let mut pages = self.client.list_clusters().into_paginator().send();

        Box::pin(stream! {
            while let Some(page) = pages.next().await {
                match page {
                    Ok(page) => yield Ok(page.clusters.unwrap_or_default()),
                    Err(e) => {
                        yield Err(Error::Eks(e.into()));
                        break;
                    }
                }
            }
        })
    }
}
