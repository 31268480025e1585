use async_trait::async_trait;
use aws_config::SdkConfig;
use kubescout_cloud::{CallerIdentity, IdentityInspector};

use crate::{Error, Result};

/// Identity inspector backed by AWS STS.
#[derive(Clone, Debug)]
pub struct StsIdentity {
    client: aws_sdk_sts::Client,
}

impl StsIdentity {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_sts::Client::new(config),
        }
    }
}

#[async_trait]
impl IdentityInspector for StsIdentity {
    type Error = Error;

    async fn caller_identity(&self) -> Result<CallerIdentity> {
        let resp = self
            .client
            .get_caller_identity()
            .send()
            .await
            .map_err(|e| Error::Sts(e.into()))?;

        Ok(CallerIdentity {
            account: resp.account.ok_or(Error::MissingField {
                operation: "GetCallerIdentity",
                field: "account",
            })?,
            arn: resp.arn.ok_or(Error::MissingField {
                operation: "GetCallerIdentity",
                field: "arn",
            })?,
            user_id: resp.user_id.ok_or(Error::MissingField {
                operation: "GetCallerIdentity",
                field: "user_id",
            })?,
        })
    }
}
