//! Error types for the mock cloud capabilities.

use kubescout_cloud::{CloudError, CloudErrorKind};
use thiserror::Error;

/// Error type for the mock cloud capabilities.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// Scripted or genuine absence of a resource.
    #[error("not found: {0}")]
    NotFound(String),

    /// Scripted network/backend failure.
    #[error("transport error: {0}")]
    Transport(String),
}

impl CloudError for Error {
    fn kind(&self) -> CloudErrorKind {
        match self {
            Self::NotFound(_) => CloudErrorKind::NotFound,
            Self::Transport(_) => CloudErrorKind::Transport,
        }
    }
}
