use crate::{
    LAUNCH_APPLICATION_LABEL, MenuAction, MenuReconciler, PLACEHOLDER_LABEL, PolicySettings,
    VmRecord, tests::fakes::FakeRenderer,
};

use std::collections::HashSet;

fn records() -> Vec<VmRecord> {
    vec![VmRecord::new("alpha", "111"), VmRecord::new("beta", "222")]
}

/// WHAT: Population appends VMs then the fixed entries in order
/// WHY: The menu layout is part of the applet's contract
#[test]
#[allow(clippy::unwrap_used)]
fn given_placeholder_when_populating_then_vms_then_fixed_entries() {
    // Given: A menu showing the placeholder
    let mut menu = MenuReconciler::new(FakeRenderer::default());
    menu.show_placeholder().unwrap();
    assert_eq!(menu.renderer().labels(), vec![PLACEHOLDER_LABEL]);

    // When: Populating with two VMs, sort enabled
    let policy = PolicySettings {
        sort_enabled: true,
        ..PolicySettings::default()
    };
    menu.populate(&records(), policy).unwrap();

    // Then: Placeholder gone, layout in order, populated
    assert_eq!(
        menu.renderer().labels(),
        vec![
            "alpha",
            "beta",
            "---",
            "Refresh",
            "Sort",
            "Headless",
            "Detachable",
            LAUNCH_APPLICATION_LABEL,
        ]
    );
    assert!(menu.is_populated());
    assert!(menu.renderer().item("Sort").unwrap().checked);
    assert!(!menu.renderer().item("Headless").unwrap().checked);
    assert_eq!(
        menu.renderer().item("beta").unwrap().entry.menu_action(),
        Some(&MenuAction::StartVm {
            name: "beta".to_string(),
            id: "222".to_string()
        })
    );
}

/// WHAT: Repopulating replaces items instead of accumulating them
/// WHY: Refresh must not duplicate entries
#[test]
#[allow(clippy::unwrap_used)]
fn given_populated_menu_when_repopulating_then_items_replaced() {
    // Given: A populated menu
    let mut menu = MenuReconciler::new(FakeRenderer::default());
    menu.populate(&records(), PolicySettings::default()).unwrap();

    // When: Repopulating with a single VM
    menu.populate(&[VmRecord::new("gamma", "333")], PolicySettings::default())
        .unwrap();

    // Then: Only the new VM plus fixed entries remain
    assert_eq!(menu.renderer().items.len(), 7);
    assert_eq!(menu.renderer().labels()[0], "gamma");
    assert_eq!(menu.bindings().len(), 1);
    assert_eq!(menu.bindings()[0].vm_id, "333");
}

/// WHAT: Running markers follow the running set exactly
/// WHY: Only running VMs may show the ornament
#[test]
#[allow(clippy::unwrap_used)]
fn given_running_set_when_refreshing_markers_then_only_running_marked() {
    // Given: A populated menu
    let mut menu = MenuReconciler::new(FakeRenderer::default());
    menu.populate(&records(), PolicySettings::default()).unwrap();

    // When: Only beta is running
    let running: HashSet<String> = ["222".to_string()].into_iter().collect();
    menu.refresh_running_markers(&running);

    // Then: beta marked, alpha not
    assert!(menu.renderer().item("beta").unwrap().running);
    assert!(!menu.renderer().item("alpha").unwrap().running);

    // And: A second refresh with the same set touches nothing
    let updates = menu.renderer().ornament_updates;
    menu.refresh_running_markers(&running);
    assert_eq!(menu.renderer().ornament_updates, updates);
    assert_eq!(menu.renderer().items.len(), 8);
}

/// WHAT: Visibility only requests a refresh once populated
/// WHY: A running check against the placeholder menu is meaningless
#[test]
#[allow(clippy::unwrap_used)]
fn given_visibility_changes_when_checking_then_requires_visible_and_populated() {
    // Given: An unpopulated menu
    let mut menu = MenuReconciler::new(FakeRenderer::default());

    // When/Then: Nothing requested before population
    assert!(!menu.on_visibility_changed(true));

    // When/Then: After population only opening requests a refresh
    menu.populate(&records(), PolicySettings::default()).unwrap();
    assert!(menu.on_visibility_changed(true));
    assert!(!menu.on_visibility_changed(false));
}

/// WHAT: A renderer failure leaves the menu unpopulated
/// WHY: The populated flag gates running refreshes
#[test]
fn given_failing_renderer_when_populating_then_not_populated() {
    // Given: A renderer that refuses the third item
    let renderer = FakeRenderer {
        fail_after_appends: Some(2),
        ..FakeRenderer::default()
    };
    let mut menu = MenuReconciler::new(renderer);

    // When: Populating
    let result = menu.populate(&records(), PolicySettings::default());

    // Then: Error, not populated
    assert!(result.is_err());
    assert!(!menu.is_populated());
}

/// WHAT: Toggle check marks follow a policy change in place
/// WHY: Companion flag changes must be visible without a rebuild
#[test]
#[allow(clippy::unwrap_used)]
fn given_populated_menu_when_syncing_toggles_then_checks_updated() {
    // Given: A populated menu with everything off
    let mut menu = MenuReconciler::new(FakeRenderer::default());
    menu.populate(&records(), PolicySettings::default()).unwrap();

    // When: Headless and detachable become enabled
    menu.sync_policy_toggles(PolicySettings {
        sort_enabled: false,
        headless_enabled: true,
        detachable_enabled: true,
    });

    // Then: Both toggles checked, sort untouched
    assert!(menu.renderer().item("Headless").unwrap().checked);
    assert!(menu.renderer().item("Detachable").unwrap().checked);
    assert!(!menu.renderer().item("Sort").unwrap().checked);
}

/// WHAT: Teardown removes every item
/// WHY: No widget may outlive the applet
#[test]
#[allow(clippy::unwrap_used)]
fn given_populated_menu_when_tearing_down_then_empty() {
    // Given: A populated menu
    let mut menu = MenuReconciler::new(FakeRenderer::default());
    menu.populate(&records(), PolicySettings::default()).unwrap();

    // When: Tearing down
    menu.teardown();

    // Then: Nothing left
    assert!(menu.renderer().items.is_empty());
    assert!(menu.bindings().is_empty());
    assert!(!menu.is_populated());
}
