use crate::VmQuery;

use std::collections::HashSet;

use tracing::{instrument, warn};

/// Answers "is this VM running?" from the tool's `runningvms` listing.
///
/// A failed probe never propagates: it degrades to "nothing is running" so
/// the worst outcome is stale running markers in the menu.
pub struct RunningStateTracker<'a> {
    query: VmQuery<'a>,
}

impl<'a> RunningStateTracker<'a> {
    /// Create a tracker over a VM query.
    pub fn new(query: VmQuery<'a>) -> Self {
        Self { query }
    }

    /// Ids of every running VM, empty if the query failed.
    #[instrument(skip(self))]
    pub fn running_set(&self) -> HashSet<String> {
        match self.query.list_running_vms() {
            Ok(records) => records.into_iter().map(|vm| vm.id).collect(),
            Err(e) => {
                warn!(error = %e, "Running VM query failed, treating all VMs as stopped");
                HashSet::new()
            }
        }
    }

    /// Whether the VM with exactly this id is running.
    #[instrument(skip(self))]
    pub fn is_running(&self, id: &str) -> bool {
        self.running_set().contains(id)
    }
}
