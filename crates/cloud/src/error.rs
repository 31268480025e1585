//! Error classification shared by every cloud capability.

use std::error::Error;
use std::fmt::{self, Debug, Display};

/// The kind of capability error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CloudErrorKind {
    /// The requested resource does not exist in the account/region.
    NotFound,

    /// Network, authentication or backend-side failure.
    Transport,
}

impl Display for CloudErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Marker trait for capability errors.
pub trait CloudError: Debug + Error + Send + Sync + 'static {
    /// Returns the kind of this error.
    fn kind(&self) -> CloudErrorKind;

    /// Shorthand for `self.kind() == CloudErrorKind::NotFound`.
    fn is_not_found(&self) -> bool {
        self.kind() == CloudErrorKind::NotFound
    }
}
