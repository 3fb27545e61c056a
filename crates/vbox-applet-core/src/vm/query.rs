use crate::{CoreError, CoreResult, ProcessInvoker, ToolCommands, VmRecord, parse_vm_list};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// VM listing queries against the management tool.
pub struct VmQuery<'a> {
    invoker: &'a dyn ProcessInvoker,
    commands: &'a ToolCommands,
}

impl<'a> VmQuery<'a> {
    /// Create a query over the given invoker and command set.
    pub fn new(invoker: &'a dyn ProcessInvoker, commands: &'a ToolCommands) -> Self {
        Self { invoker, commands }
    }

    /// List every registered VM, optionally asking the tool to sort.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::QueryFailed`] if the tool cannot be run.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn list_vms(&self, sorted: bool) -> CoreResult<Vec<VmRecord>> {
        self.run("list vms", &self.commands.list_vms(sorted))
    }

    /// List only running VMs.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::QueryFailed`] if the tool cannot be run.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn list_running_vms(&self) -> CoreResult<Vec<VmRecord>> {
        self.run("list runningvms", &self.commands.list_running_vms())
    }

    #[track_caller]
    fn run(&self, query: &str, command_line: &str) -> CoreResult<Vec<VmRecord>> {
        let output = self
            .invoker
            .run_sync(command_line)
            .map_err(|source| CoreError::QueryFailed {
                query: query.to_string(),
                source: Box::new(source),
                location: ErrorLocation::from(Location::caller()),
            })?;

        // Nonzero exit is tolerated; whatever was printed is still parsed.
        let records = parse_vm_list(&output.stdout_text());
        debug!(
            query,
            status = ?output.status,
            count = records.len(),
            "VM query complete"
        );

        Ok(records)
    }
}
