use crate::CoreResult;

/// Captured result of a synchronous process run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Raw standard output.
    pub stdout: Vec<u8>,
    /// Exit code, `None` when the child was killed by a signal.
    pub status: Option<i32>,
}

impl ProcessOutput {
    /// Standard output decoded as UTF-8, replacing invalid sequences.
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// Whether the child exited with status 0.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Process-spawn primitive used for every external tool call.
///
/// A nonzero exit status is not an error for [`run_sync`](Self::run_sync):
/// callers inspect the captured output, which may legitimately be empty.
pub trait ProcessInvoker {
    /// Run `command_line` to completion and capture its stdout.
    ///
    /// # Errors
    ///
    /// Returns error if the command line cannot be split or the process
    /// cannot be spawned.
    fn run_sync(&self, command_line: &str) -> CoreResult<ProcessOutput>;

    /// Spawn `command_line` without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns error if the command line cannot be split or the process
    /// cannot be spawned.
    fn run_async(&self, command_line: &str) -> CoreResult<()>;
}
