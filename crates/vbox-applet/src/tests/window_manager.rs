use crate::{WmctrlWindowManager, window_manager::parse_window_list};

use std::{cell::RefCell, panic::Location, rc::Rc};

use error_location::ErrorLocation;
use vbox_applet_core::{
    CoreError, CoreResult, ProcessInvoker, ProcessOutput, WindowInfo, WindowManager,
};

const WMCTRL_OUTPUT: &str = "\
0x01e00003  0 workstation Terminal
0x03a00007  0 workstation alpha [Running] - Oracle VirtualBox
0x04200001 -1 N/A  Desktop
";

#[derive(Clone, Default)]
struct ScriptedInvoker {
    stdout: String,
    status: Option<i32>,
    fail: bool,
    calls: Rc<RefCell<Vec<String>>>,
}

impl ProcessInvoker for ScriptedInvoker {
    fn run_sync(&self, command_line: &str) -> CoreResult<ProcessOutput> {
        self.calls.borrow_mut().push(command_line.to_string());
        if self.fail {
            return Err(CoreError::ProcessFailed {
                command: command_line.to_string(),
                reason: "No such file or directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(ProcessOutput {
            stdout: self.stdout.clone().into_bytes(),
            status: self.status,
        })
    }

    fn run_async(&self, _command_line: &str) -> CoreResult<()> {
        Ok(())
    }
}

/// WHAT: wmctrl listing parses into id and full title
/// WHY: VM titles contain spaces and must match by prefix
#[test]
fn given_wmctrl_output_when_parsing_then_ids_and_titles() {
    // Given/When: Parsing typical wmctrl -l output
    let windows = parse_window_list(WMCTRL_OUTPUT);

    // Then: Three windows with full titles
    assert_eq!(windows.len(), 3);
    assert_eq!(
        windows[1],
        WindowInfo {
            id: "0x03a00007".to_string(),
            title: "alpha [Running] - Oracle VirtualBox".to_string(),
        }
    );
    assert_eq!(windows[2].title, "Desktop");
}

/// WHAT: Short or blank lines are ignored
/// WHY: Unexpected output must not produce bogus windows
#[test]
fn given_truncated_lines_when_parsing_then_skipped() {
    // Given/When: Parsing lines with fewer than three fields
    let windows = parse_window_list("\n0x01 0\n   \n");

    // Then: Nothing parsed
    assert!(windows.is_empty());
}

/// WHAT: Focus activates the window by id
/// WHY: wmctrl -a by title would pick the wrong window on prefix clashes
#[test]
#[allow(clippy::unwrap_used)]
fn given_window_when_focusing_then_activated_by_id() {
    // Given: wmctrl succeeding
    let invoker = ScriptedInvoker {
        status: Some(0),
        ..ScriptedInvoker::default()
    };
    let manager = WmctrlWindowManager::new(invoker.clone(), "wmctrl");
    let window = WindowInfo {
        id: "0x03a00007".to_string(),
        title: "alpha".to_string(),
    };

    // When: Focusing
    manager.focus(&window).unwrap();

    // Then: Activated by id
    assert_eq!(*invoker.calls.borrow(), vec!["wmctrl -i -a 0x03a00007"]);
}

/// WHAT: Nonzero wmctrl exit on focus is an error
/// WHY: The applet reports a failed focus instead of silently ignoring it
#[test]
fn given_failing_wmctrl_when_focusing_then_window_error() {
    // Given: wmctrl exiting with status 1
    let invoker = ScriptedInvoker {
        status: Some(1),
        ..ScriptedInvoker::default()
    };
    let manager = WmctrlWindowManager::new(invoker, "wmctrl");
    let window = WindowInfo {
        id: "0x1".to_string(),
        title: "alpha".to_string(),
    };

    // When: Focusing
    let result = manager.focus(&window);

    // Then: WindowError
    assert!(matches!(result, Err(CoreError::WindowError { .. })));
}

/// WHAT: Missing wmctrl surfaces as a window error when listing
/// WHY: Distinguishes window failures from VM query failures
#[test]
fn given_missing_wmctrl_when_listing_then_window_error() {
    // Given: wmctrl cannot be spawned
    let invoker = ScriptedInvoker {
        fail: true,
        ..ScriptedInvoker::default()
    };
    let manager = WmctrlWindowManager::new(invoker, "wmctrl");

    // When: Listing windows
    let result = manager.list_windows();

    // Then: WindowError
    assert!(matches!(result, Err(CoreError::WindowError { .. })));
}
