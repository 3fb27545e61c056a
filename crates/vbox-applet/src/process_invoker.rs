//! Process spawning for vboxmanage, VirtualBox and wmctrl.
//!
//! Synchronous runs block the UI thread until the child exits. Asynchronous
//! runs are spawned on a tokio runtime that reaps the child and logs its
//! exit status; the caller never waits for them.

use crate::AppResult;

use std::{
    panic::Location,
    process::{Command, Stdio},
    sync::Arc,
};

use error_location::ErrorLocation;
use tokio::runtime::Runtime;
use tracing::{debug, instrument, warn};
use vbox_applet_core::{CoreError, CoreResult, ProcessInvoker, ProcessOutput, split_command_line};

/// [`ProcessInvoker`] backed by the operating system.
#[derive(Clone)]
pub struct SystemProcessInvoker {
    runtime: Arc<Runtime>,
}

impl SystemProcessInvoker {
    /// Create an invoker with its own background runtime for async spawns.
    #[track_caller]
    pub fn new() -> AppResult<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("vbox-applet-spawn")
            .enable_all()
            .build()?;

        Ok(Self {
            runtime: Arc::new(runtime),
        })
    }
}

impl ProcessInvoker for SystemProcessInvoker {
    #[track_caller]
    #[instrument(skip(self))]
    fn run_sync(&self, command_line: &str) -> CoreResult<ProcessOutput> {
        let (program, args) = split_command_line(command_line)?;

        let output = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| CoreError::ProcessFailed {
                command: command_line.to_string(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let status = output.status.code();
        if !output.status.success() {
            debug!(?status, "Command exited unsuccessfully");
        }

        Ok(ProcessOutput {
            stdout: output.stdout,
            status,
        })
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn run_async(&self, command_line: &str) -> CoreResult<()> {
        let (program, args) = split_command_line(command_line)?;

        // tokio's process driver must be reachable when the child is spawned.
        let _guard = self.runtime.enter();
        let mut child = tokio::process::Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| CoreError::ProcessFailed {
                command: command_line.to_string(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let command = command_line.to_string();
        self.runtime.spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => debug!(%command, "Spawned command finished"),
                Ok(status) => warn!(%command, code = ?status.code(), "Spawned command failed"),
                Err(e) => warn!(%command, error = %e, "Failed to wait for spawned command"),
            }
        });

        Ok(())
    }
}
