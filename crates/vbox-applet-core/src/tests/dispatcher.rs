use crate::{
    ActionDispatcher, Activation, LaunchMode, RunningStateTracker, ToolCommands, VmQuery,
    tests::fakes::{FakeInvoker, FakeWindows, LIST_RUNNING},
};

const VM_WINDOW: &str = "alpha [Running] - Oracle VirtualBox";

/// WHAT: A stopped VM is started with the launch flag
/// WHY: Activation of a stopped VM must spawn, never focus
#[test]
#[allow(clippy::unwrap_used)]
fn given_stopped_vm_when_activating_then_start_spawned() {
    // Given: Nothing running, a matching window exists anyway
    let invoker = FakeInvoker::new();
    let windows = FakeWindows::with_titles(&[VM_WINDOW]);
    let commands = ToolCommands::default();
    let tracker = RunningStateTracker::new(VmQuery::new(&invoker, &commands));
    let dispatcher = ActionDispatcher::new(&invoker, &windows, &commands);

    // When: Activating alpha in headless mode
    let activation = dispatcher
        .activate(&tracker, "alpha", "111", LaunchMode::Headless)
        .unwrap();

    // Then: Start spawned, no focus
    assert_eq!(activation, Activation::Started);
    assert_eq!(
        invoker.async_calls(),
        vec!["vboxmanage startvm 111 --type headless".to_string()]
    );
    assert!(windows.focused().is_empty());
}

/// WHAT: A running VM gets its window focused instead of a second start
/// WHY: Starting an already running VM fails in VirtualBox
#[test]
#[allow(clippy::unwrap_used)]
fn given_running_vm_when_activating_then_window_focused() {
    // Given: alpha running, with an unrelated window first
    let invoker = FakeInvoker::new();
    invoker.set_output(LIST_RUNNING, "\"alpha\" {111}\n");
    let windows = FakeWindows::with_titles(&["alpha notes - Text Editor", VM_WINDOW]);
    let commands = ToolCommands::default();
    let tracker = RunningStateTracker::new(VmQuery::new(&invoker, &commands));
    let dispatcher = ActionDispatcher::new(&invoker, &windows, &commands);

    // When: Activating alpha
    let activation = dispatcher
        .activate(&tracker, "alpha", "111", LaunchMode::Default)
        .unwrap();

    // Then: The VirtualBox window is focused and nothing spawned
    assert!(matches!(activation, Activation::Focused(ref w) if w.title == VM_WINDOW));
    assert_eq!(windows.focused().len(), 1);
    assert!(invoker.async_calls().is_empty());
}

/// WHAT: Window matching is case-sensitive on the name, not on the marker
/// WHY: Two VMs differing only in case must not be confused
#[test]
#[allow(clippy::unwrap_used)]
fn given_case_variants_when_focusing_then_name_prefix_case_sensitive() {
    // Given: alpha running, only an "Alpha" VirtualBox window and a lower-case marker window
    let invoker = FakeInvoker::new();
    invoker.set_output(LIST_RUNNING, "\"alpha\" {111}\n");
    let windows = FakeWindows::with_titles(&[
        "Alpha [Running] - Oracle VirtualBox",
        "alpha [Running] - oracle VIRTUALBOX",
    ]);
    let commands = ToolCommands::default();
    let tracker = RunningStateTracker::new(VmQuery::new(&invoker, &commands));
    let dispatcher = ActionDispatcher::new(&invoker, &windows, &commands);

    // When: Activating alpha
    dispatcher
        .activate(&tracker, "alpha", "111", LaunchMode::Default)
        .unwrap();

    // Then: The second window was chosen
    assert_eq!(windows.focused()[0].id, "0x00000002");
}

/// WHAT: Running VM without a window neither focuses nor spawns
/// WHY: Exactly one branch fires per activation
#[test]
#[allow(clippy::unwrap_used)]
fn given_running_vm_without_window_when_activating_then_no_window() {
    // Given: alpha running headless, no windows
    let invoker = FakeInvoker::new();
    invoker.set_output(LIST_RUNNING, "\"alpha\" {111}\n");
    let windows = FakeWindows::default();
    let commands = ToolCommands::default();
    let tracker = RunningStateTracker::new(VmQuery::new(&invoker, &commands));
    let dispatcher = ActionDispatcher::new(&invoker, &windows, &commands);

    // When: Activating alpha
    let activation = dispatcher
        .activate(&tracker, "alpha", "111", LaunchMode::Headless)
        .unwrap();

    // Then: NoWindow, nothing spawned
    assert_eq!(activation, Activation::NoWindow);
    assert!(invoker.async_calls().is_empty());
}

/// WHAT: Launching the application spawns the GUI without arguments
/// WHY: The launcher entry opens the full VirtualBox manager
#[test]
#[allow(clippy::unwrap_used)]
fn given_dispatcher_when_launching_application_then_gui_spawned() {
    // Given: A dispatcher
    let invoker = FakeInvoker::new();
    let windows = FakeWindows::default();
    let commands = ToolCommands::default();
    let dispatcher = ActionDispatcher::new(&invoker, &windows, &commands);

    // When: Launching
    dispatcher.launch_application().unwrap();

    // Then: Bare GUI command spawned
    assert_eq!(invoker.async_calls(), vec!["virtualbox".to_string()]);
}
