use async_trait::async_trait;
use aws_config::SdkConfig;
use kubescout_cloud::{NetworkInspector, Subnet};

use crate::{Error, Result};

/// Network inspector backed by Amazon EC2.
#[derive(Clone, Debug)]
pub struct Ec2Network {
    client: aws_sdk_ec2::Client,
}

impl Ec2Network {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_ec2::Client::new(config),
        }
    }
}

#[async_trait]
impl NetworkInspector for Ec2Network {
    type Error = Error;

    async fn describe_subnets(&self, subnet_ids: &[String]) -> Result<Vec<Subnet>> {
        if subnet_ids.is_empty() {
            return Ok(Vec::new());
        }

        let resp = self
            .client
            .describe_subnets()
            .set_subnet_ids(Some(subnet_ids.to_vec()))
            .send()
            .await
            .map_err(|e| Error::Ec2(e.into()))?;

        resp.subnets
            .unwrap_or_default()
            .into_iter()
            .map(|s| {
                Ok(Subnet {
                    subnet_id: s.subnet_id.ok_or(Error::MissingField {
                        operation: "DescribeSubnets",
                        field: "subnet_id",
                    })?,
                    vpc_id: s.vpc_id.ok_or(Error::MissingField {
                        operation: "DescribeSubnets",
                        field: "vpc_id",
                    })?,
                    availability_zone: s.availability_zone.ok_or(Error::MissingField {
                        operation: "DescribeSubnets",
                        field: "availability_zone",
                    })?,
                    cidr_block: s.cidr_block,
                })
            })
            .collect()
    }
}
