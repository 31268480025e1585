//! CLI binary that reports the Kubernetes clusters visible to an account.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use clap::Parser;
use kubescout_cloud_aws::{AwsProvider, AwsProviderOptions, connect};
use kubescout_discovery::{
    AccountScanner, ClusterDescriptor, ClusterNetwork, ClusterProvider, ClusterSpec,
    DiagnosticLevel, OutputFormat, render,
};
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;

/// CLI-specific error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Cloud session could not be established.
    #[error(transparent)]
    Aws(#[from] kubescout_cloud_aws::Error),

    /// Discovery failed.
    #[error(transparent)]
    Discovery(#[from] kubescout_discovery::Error),
}

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Cluster to describe. When omitted every cluster in the region is listed.
    #[arg(long, env = "KUBESCOUT_CLUSTER_NAME")]
    name: Option<String>,

    /// Region to query. Falls back to the AWS environment and profile.
    #[arg(long, env = "KUBESCOUT_REGION")]
    region: Option<String>,

    /// Named profile from the shared AWS config files.
    #[arg(long, env = "AWS_PROFILE")]
    profile: Option<String>,

    /// Diagnostic level. Infrastructure stacks are scanned from 4 upwards.
    #[arg(
        short,
        long,
        default_value_t = DiagnosticLevel::NORMAL.value(),
        env = "KUBESCOUT_VERBOSE"
    )]
    verbose: u8,

    /// Report format (table or json).
    #[arg(short, long, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    /// Also print the VPC subnets of the named cluster.
    #[arg(long, requires = "name")]
    show_network: bool,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();
    let level = DiagnosticLevel::new(args.verbose);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(LevelFilter::from(level.tracing_level()))
        .init();

    let provider = connect(AwsProviderOptions {
        region: args.region.clone(),
        profile: args.profile.clone(),
    })
    .await?;

    let clusters = match &args.name {
        Some(name) => {
            let mut spec = ClusterSpec::new(name.as_str())?;
            if let Some(region) = &args.region {
                spec = spec.with_region(region.as_str());
            }
            describe_named(&provider, &spec, level, args.show_network).await?
        }
        None => {
            let scanner = AccountScanner::new(&provider).with_level(level);
            let identity = scanner.check_auth().await?;
            info!(account = %identity.account, "listing clusters");

            scanner.discover_all().await?
        }
    };

    println!("{}", render(&clusters, args.output)?);

    Ok(())
}

async fn describe_named(
    provider: &AwsProvider,
    spec: &ClusterSpec,
    level: DiagnosticLevel,
    show_network: bool,
) -> Result<Vec<ClusterDescriptor>, Error> {
    let cluster_provider = ClusterProvider::new(spec, provider).with_level(level);

    let identity = cluster_provider.check_auth().await?;
    info!(
        account = %identity.account,
        cluster = cluster_provider.spec().name(),
        "describing cluster"
    );

    let clusters = cluster_provider.discover().await?;

    if show_network {
        match cluster_provider.network().await? {
            Some(network) => print_network(&network),
            None => debug!(
                cluster = cluster_provider.spec().name(),
                "no native cluster, skipping network"
            ),
        }
    }

    Ok(clusters)
}

fn print_network(network: &ClusterNetwork) {
    println!("Endpoint: {}", network.endpoint.as_deref().unwrap_or("-"));
    println!("VPC: {}", network.vpc_id.as_deref().unwrap_or("-"));
    for subnet in &network.subnets {
        println!(
            "  {}  {}  {}",
            subnet.subnet_id,
            subnet.availability_zone,
            subnet.cidr_block.as_deref().unwrap_or("-")
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    fn default_of(id: &str) -> Vec<String> {
        Args::command()
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .unwrap()
            .get_default_values()
            .iter()
            .map(|value| value.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(default_of("verbose"), vec!["3"]);
        assert_eq!(default_of("output"), vec!["table"]);
        assert!(default_of("name").is_empty());
    }

    #[test]
    fn test_flags_override_environment() {
        let args =
            Args::try_parse_from(["kubescout", "--verbose", "1", "--output", "table"]).unwrap();

        assert_eq!(args.verbose, 1);
        assert_eq!(args.output, OutputFormat::Table);
        assert!(!args.show_network);
    }

    #[test]
    fn test_named_cluster_at_debug_level() {
        let args = Args::try_parse_from([
            "kubescout",
            "--name",
            "test-cluster",
            "--verbose",
            "4",
            "--output",
            "json",
        ])
        .unwrap();

        assert_eq!(args.name.as_deref(), Some("test-cluster"));
        assert!(DiagnosticLevel::new(args.verbose).scans_stacks());
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn test_show_network_requires_name() {
        assert!(Args::try_parse_from(["kubescout", "--show-network"]).is_err());
    }
}
