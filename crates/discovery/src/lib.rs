//! Discovers Kubernetes clusters owned by an account, whether they were
//! created natively through the managed control plane or indirectly through
//! infrastructure-as-code stacks.
//!
//! The control plane is always asked about the named cluster. Stacks are only
//! enumerated when the [`DiagnosticLevel`] is at or above
//! [`STACK_SCAN_THRESHOLD`], since that scan is account-wide.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod descriptor;
mod error;
mod level;
mod merge;
mod provider;
pub mod report;
mod scanner;
mod spec;
pub mod stacks;

pub use descriptor::{ClusterDescriptor, Origin};
pub use error::{BoxError, Error, Result};
pub use level::{DiagnosticLevel, STACK_SCAN_THRESHOLD};
pub use merge::merge;
pub use provider::{ClusterNetwork, ClusterProvider};
pub use report::{OutputFormat, render};
pub use scanner::AccountScanner;
pub use spec::ClusterSpec;
