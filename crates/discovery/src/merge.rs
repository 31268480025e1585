use std::collections::HashSet;

use tracing::trace;

use crate::ClusterDescriptor;

/// Merges native and stack-origin descriptors on cluster name.
///
/// Native descriptors come first and always win. Stack descriptors follow in
/// the order given; the first one seen for a name wins.
#[must_use]
pub fn merge(
    native: Vec<ClusterDescriptor>,
    stacks: Vec<ClusterDescriptor>,
) -> Vec<ClusterDescriptor> {
    let mut seen: HashSet<String> = native.iter().map(|d| d.name.clone()).collect();
    let mut merged = native;

    for descriptor in stacks {
        if seen.insert(descriptor.name.clone()) {
            merged.push(descriptor);
        } else {
            trace!(cluster = %descriptor.name, "dropping stack record shadowed by earlier record");
        }
    }

    merged
}
