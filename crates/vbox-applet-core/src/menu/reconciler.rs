//! Keeps the rendered menu in step with the latest VM listing.
//!
//! Every population is a full rebuild: all VM items and fixed entries are
//! removed and re-appended in order. Running markers are applied separately
//! and only touch items whose marker actually changes.

use crate::{
    CoreResult, MenuAction, MenuEntry, MenuRenderer, PolicySettings, SettingKey, VmRecord,
    menu::{
        DETACHABLE_LABEL, HEADLESS_LABEL, LAUNCH_APPLICATION_LABEL, PLACEHOLDER_LABEL,
        REFRESH_LABEL, SORT_LABEL,
    },
};

use std::collections::HashSet;

use tracing::{debug, info, instrument, warn};

/// Link between a VM id and the menu item that shows it.
#[derive(Debug, Clone)]
pub struct MenuItemBinding<H> {
    /// VM identifier.
    pub vm_id: String,
    /// Renderer handle of the item.
    pub handle: H,
    /// Whether the running ornament is currently shown.
    pub running_marked: bool,
}

/// Owns the menu contents and the VM id to item bindings.
pub struct MenuReconciler<R: MenuRenderer> {
    renderer: R,
    bindings: Vec<MenuItemBinding<R::Handle>>,
    fixed: Vec<R::Handle>,
    toggles: Vec<(SettingKey, R::Handle)>,
    placeholder: Option<R::Handle>,
    populated: bool,
}

impl<R: MenuRenderer> MenuReconciler<R> {
    /// Create a reconciler over an empty menu.
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            bindings: Vec::new(),
            fixed: Vec::new(),
            toggles: Vec::new(),
            placeholder: None,
            populated: false,
        }
    }

    /// Show the "..." item used until the first listing arrives.
    ///
    /// # Errors
    ///
    /// Returns error if the renderer rejects the item.
    pub fn show_placeholder(&mut self) -> CoreResult<()> {
        if self.placeholder.is_none() {
            let handle = self.renderer.append(&MenuEntry::Placeholder {
                label: PLACEHOLDER_LABEL.to_string(),
            })?;
            self.placeholder = Some(handle);
        }
        Ok(())
    }

    /// Replace the menu contents with `records` followed by the fixed entries.
    ///
    /// The reconciler counts as populated only once every item was appended.
    ///
    /// # Errors
    ///
    /// Returns error if the renderer rejects an item; the menu is then
    /// partially built and not marked populated.
    #[instrument(skip(self, records), fields(vm_count = records.len()))]
    pub fn populate(&mut self, records: &[VmRecord], policy: PolicySettings) -> CoreResult<()> {
        self.clear();

        for record in records {
            let handle = self.renderer.append(&MenuEntry::action(
                record.name.clone(),
                MenuAction::StartVm {
                    name: record.name.clone(),
                    id: record.id.clone(),
                },
            ))?;
            self.bindings.push(MenuItemBinding {
                vm_id: record.id.clone(),
                handle,
                running_marked: false,
            });
        }

        let separator = self.renderer.append(&MenuEntry::Separator)?;
        self.fixed.push(separator);

        let refresh = self
            .renderer
            .append(&MenuEntry::action(REFRESH_LABEL, MenuAction::Refresh))?;
        self.fixed.push(refresh);

        let toggles = [
            (SettingKey::Sort, SORT_LABEL, MenuAction::ToggleSort, policy.sort_enabled),
            (
                SettingKey::Headless,
                HEADLESS_LABEL,
                MenuAction::ToggleHeadless,
                policy.headless_enabled,
            ),
            (
                SettingKey::Detachable,
                DETACHABLE_LABEL,
                MenuAction::ToggleDetachable,
                policy.detachable_enabled,
            ),
        ];
        for (key, label, action, checked) in toggles {
            let handle = self
                .renderer
                .append(&MenuEntry::toggle(label, action, checked))?;
            self.toggles.push((key, handle));
        }

        let launcher = self.renderer.append(&MenuEntry::action(
            LAUNCH_APPLICATION_LABEL,
            MenuAction::LaunchApplication,
        ))?;
        self.fixed.push(launcher);

        self.populated = true;
        info!(vm_count = self.bindings.len(), "Menu populated");

        Ok(())
    }

    /// Whether a visibility change should trigger a running-marker refresh.
    ///
    /// Only an opening menu that has been populated at least once qualifies.
    pub fn on_visibility_changed(&self, visible: bool) -> bool {
        visible && self.populated
    }

    /// Mark exactly the VMs in `running`; items are never added or removed.
    #[instrument(skip(self, running), fields(running_count = running.len()))]
    pub fn refresh_running_markers(&mut self, running: &HashSet<String>) {
        let mut changed = 0;
        for binding in &mut self.bindings {
            let marked = running.contains(&binding.vm_id);
            if marked == binding.running_marked {
                continue;
            }
            match self.renderer.set_running_ornament(&binding.handle, marked) {
                Ok(()) => {
                    binding.running_marked = marked;
                    changed += 1;
                }
                Err(e) => {
                    warn!(vm_id = %binding.vm_id, error = %e, "Failed to update running marker");
                }
            }
        }
        debug!(changed, "Running markers refreshed");
    }

    /// Re-apply toggle check marks after a policy change.
    pub fn sync_policy_toggles(&mut self, policy: PolicySettings) {
        for (key, handle) in &self.toggles {
            let checked = match key {
                SettingKey::Sort => policy.sort_enabled,
                SettingKey::Headless => policy.headless_enabled,
                SettingKey::Detachable => policy.detachable_enabled,
            };
            if let Err(e) = self.renderer.set_checked(handle, checked) {
                warn!(key = key.as_str(), error = %e, "Failed to update toggle");
            }
        }
    }

    /// Remove every owned item, placeholder included.
    #[instrument(skip(self))]
    pub fn teardown(&mut self) {
        self.clear();
        debug!("Menu torn down");
    }

    /// Whether a population has completed since the last clear.
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Current VM bindings, in menu order.
    pub fn bindings(&self) -> &[MenuItemBinding<R::Handle>] {
        &self.bindings
    }

    /// Renderer backing this menu.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable renderer backing this menu.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn clear(&mut self) {
        self.populated = false;

        if let Some(handle) = self.placeholder.take() {
            self.remove_item(&handle);
        }

        let bindings = std::mem::take(&mut self.bindings);
        for binding in &bindings {
            self.remove_item(&binding.handle);
        }

        let toggles = std::mem::take(&mut self.toggles);
        for (_, handle) in &toggles {
            self.remove_item(handle);
        }

        let fixed = std::mem::take(&mut self.fixed);
        for handle in &fixed {
            self.remove_item(handle);
        }
    }

    fn remove_item(&mut self, handle: &R::Handle) {
        if let Err(e) = self.renderer.remove(handle) {
            warn!(?handle, error = %e, "Failed to remove menu item");
        }
    }
}
