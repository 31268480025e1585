use aws_sdk_ec2::error::ProvideErrorMetadata;
use kubescout_cloud::{CloudError, CloudErrorKind};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    CloudFormation(#[from] aws_sdk_cloudformation::Error),

    #[error("cluster not found: {0}")]
    ClusterNotFound(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Ec2(#[from] aws_sdk_ec2::Error),

    #[error(transparent)]
    Eks(#[from] aws_sdk_eks::Error),

    #[error("missing {field} in {operation} response")]
    MissingField {
        operation: &'static str,
        field: &'static str,
    },

    #[error(transparent)]
    Sts(#[from] aws_sdk_sts::Error),
}

impl CloudError for Error {
    fn kind(&self) -> CloudErrorKind {
        match self {
            Self::ClusterNotFound(_) => CloudErrorKind::NotFound,
            Self::Ec2(e) if e.code() == Some("InvalidSubnetID.NotFound") => {
                CloudErrorKind::NotFound
            }
            _ => CloudErrorKind::Transport,
        }
    }
}
