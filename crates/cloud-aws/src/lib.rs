//! AWS implementations of the cluster-discovery capabilities: EKS for the
//! control plane, CloudFormation for legacy stacks, EC2 for networking and STS
//! for caller identity.
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::result_large_err)]

mod cloudformation;
mod ec2;
mod eks;
mod error;
mod sts;

pub use cloudformation::CloudFormationStacks;
pub use ec2::Ec2Network;
pub use eks::EksControlPlane;
pub use error::{Error, Result};
pub use sts::StsIdentity;

use aws_config::Region;
use aws_credential_types::provider::ProvideCredentials;
use kubescout_cloud::Provider;
use tracing::{debug, info};

/// A provider whose capabilities all talk to AWS.
pub type AwsProvider = Provider<EksControlPlane, CloudFormationStacks, Ec2Network, StsIdentity>;

/// Options for resolving the AWS session.
#[derive(Clone, Debug, Default)]
pub struct AwsProviderOptions {
    /// Region override. Falls back to the environment/profile region.
    pub region: Option<String>,

    /// Named profile from the shared config files.
    pub profile: Option<String>,
}

/// Resolves the AWS session once and builds a provider from it.
///
/// # Errors
///
/// Returns [`Error::Configuration`] if no region is configured or credentials
/// cannot be resolved.
pub async fn connect(
    AwsProviderOptions { region, profile }: AwsProviderOptions,
) -> Result<AwsProvider> {
    let mut loader = aws_config::from_env();
    if let Some(region) = region {
        loader = loader.region(Region::new(region));
    }
    if let Some(profile) = profile {
        loader = loader.profile_name(profile);
    }
    let config = loader.load().await;

    let region = config
        .region()
        .ok_or_else(|| Error::Configuration("no AWS region configured".to_string()))?;

    let credentials = config
        .credentials_provider()
        .ok_or_else(|| Error::Configuration("no AWS credentials provider".to_string()))?;
    credentials
        .provide_credentials()
        .await
        .map_err(|e| Error::Configuration(format!("unable to resolve AWS credentials: {e}")))?;

    info!(%region, "resolved AWS session");
    debug!("building EKS, CloudFormation, EC2 and STS clients");

    Ok(Provider::new(
        EksControlPlane::new(&config),
        CloudFormationStacks::new(&config),
        Ec2Network::new(&config),
        StsIdentity::new(&config),
    ))
}
