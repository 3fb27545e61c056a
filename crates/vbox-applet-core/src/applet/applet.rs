//! The applet: wires queries, policy, menu and dispatch together.
//!
//! Runs on a single thread. Nothing here is allowed to fail out of a task
//! or menu handler: every error is logged and, when the user should know,
//! reported through the [`Notifier`](crate::Notifier).

use crate::{
    APPLET_NAME, ActionDispatcher, Activation, AppletContext, AppletTask, Clock, CoreError,
    CoreResult, MenuAction, MenuReconciler, MenuRenderer, PolicySettings, RunningStateTracker,
    SettingsPolicy, TaskHandle, TaskQueue, VmQuery,
};

use std::time::Instant;

use tracing::{debug, error, info, instrument, warn};

/// VirtualBox status-area applet.
pub struct Applet<R: MenuRenderer, C: Clock> {
    ctx: AppletContext,
    menu: MenuReconciler<R>,
    tasks: TaskQueue<AppletTask, C>,
    initial_slot: Option<TaskHandle>,
    repopulate_slot: Option<TaskHandle>,
    running_slot: Option<TaskHandle>,
    periodic_slot: Option<TaskHandle>,
    torn_down: bool,
}

impl<R: MenuRenderer, C: Clock> Applet<R, C> {
    /// Create the applet, show the placeholder item and schedule the first population.
    #[instrument(skip_all)]
    pub fn new(ctx: AppletContext, renderer: R, clock: C) -> Self {
        let mut menu = MenuReconciler::new(renderer);
        if let Err(e) = menu.show_placeholder() {
            warn!(error = %e, "Failed to show placeholder item");
        }

        let mut tasks = TaskQueue::new(clock);
        let mut initial_slot = None;
        tasks.schedule_in_slot(
            &mut initial_slot,
            ctx.timings.initial_delay,
            AppletTask::Populate,
        );
        let periodic_slot = ctx
            .timings
            .refresh_interval
            .map(|interval| tasks.schedule_repeating(interval, AppletTask::Populate));

        info!(
            initial_delay_ms = ctx.timings.initial_delay.as_millis(),
            periodic = periodic_slot.is_some(),
            "Applet created"
        );

        Self {
            ctx,
            menu,
            tasks,
            initial_slot,
            repopulate_slot: None,
            running_slot: None,
            periodic_slot,
            torn_down: false,
        }
    }

    /// Run every task whose deadline has passed. Returns how many ran.
    pub fn run_due_tasks(&mut self) -> usize {
        let due = self.tasks.take_due();
        let count = due.len();
        for (handle, task) in due {
            self.release_slot(handle);
            self.run_task(task);
        }
        count
    }

    /// When the event loop should next wake up for scheduled work.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.next_deadline()
    }

    /// Execute one task immediately.
    #[instrument(skip(self))]
    pub fn run_task(&mut self, task: AppletTask) {
        if self.torn_down {
            debug!(?task, "Ignoring task after teardown");
            return;
        }
        match task {
            AppletTask::Populate => self.populate(),
            AppletTask::RefreshRunning => self.refresh_running(),
        }
    }

    /// Rebuild the menu from a fresh VM listing.
    ///
    /// On query failure the user is notified and the current menu stays.
    #[instrument(skip(self))]
    pub fn populate(&mut self) {
        let (policy, repaired) = {
            let mut policy = SettingsPolicy::new(self.ctx.settings.as_mut());
            let repaired = policy.repair_consistency();
            (policy.settings(), repaired)
        };
        if let Err(e) = repaired {
            self.report(&e);
        }

        let records = {
            let query = VmQuery::new(self.ctx.invoker.as_ref(), &self.ctx.commands);
            match query.list_vms(policy.sort_enabled) {
                Ok(records) => records,
                Err(e) => {
                    self.report(&e);
                    return;
                }
            }
        };

        if let Err(e) = self.menu.populate(&records, policy) {
            self.report(&e);
            return;
        }

        let delay = self.ctx.timings.visibility_delay;
        self.tasks
            .schedule_in_slot(&mut self.running_slot, delay, AppletTask::RefreshRunning);
    }

    /// Update running markers from the running-VM query.
    #[instrument(skip(self))]
    pub fn refresh_running(&mut self) {
        if !self.menu.is_populated() {
            debug!("Menu not populated, skipping running refresh");
            return;
        }
        let running = {
            let tracker = RunningStateTracker::new(VmQuery::new(
                self.ctx.invoker.as_ref(),
                &self.ctx.commands,
            ));
            tracker.running_set()
        };
        self.menu.refresh_running_markers(&running);
    }

    /// Menu shown or hidden by the toolkit.
    #[instrument(skip(self))]
    pub fn on_visibility_changed(&mut self, visible: bool) {
        if self.torn_down || !self.menu.on_visibility_changed(visible) {
            return;
        }
        let delay = self.ctx.timings.visibility_delay;
        self.tasks
            .schedule_in_slot(&mut self.running_slot, delay, AppletTask::RefreshRunning);
    }

    /// React to the user activating a menu item.
    #[instrument(skip(self))]
    pub fn handle_action(&mut self, action: &MenuAction) {
        if self.torn_down {
            return;
        }
        match action {
            MenuAction::StartVm { name, id } => self.activate(name, id),
            MenuAction::Refresh => self.populate(),
            MenuAction::ToggleSort => {
                let result = SettingsPolicy::new(self.ctx.settings.as_mut()).toggle_sort();
                match result {
                    Ok(_) => {
                        let delay = self.ctx.timings.toggle_delay;
                        self.tasks.schedule_in_slot(
                            &mut self.repopulate_slot,
                            delay,
                            AppletTask::Populate,
                        );
                    }
                    Err(e) => self.report(&e),
                }
            }
            MenuAction::ToggleHeadless => {
                let result = SettingsPolicy::new(self.ctx.settings.as_mut()).toggle_headless();
                self.after_launch_toggle(result.map(|_| ()));
            }
            MenuAction::ToggleDetachable => {
                let result = SettingsPolicy::new(self.ctx.settings.as_mut()).toggle_detachable();
                self.after_launch_toggle(result.map(|_| ()));
            }
            MenuAction::LaunchApplication => {
                let dispatcher = ActionDispatcher::new(
                    self.ctx.invoker.as_ref(),
                    self.ctx.windows.as_ref(),
                    &self.ctx.commands,
                );
                if let Err(e) = dispatcher.launch_application() {
                    self.report(&e);
                }
            }
        }
    }

    /// Remove the menu and cancel everything scheduled. Idempotent.
    #[instrument(skip(self))]
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        for slot in [
            &mut self.initial_slot,
            &mut self.repopulate_slot,
            &mut self.running_slot,
            &mut self.periodic_slot,
        ] {
            if let Some(handle) = slot.take() {
                self.tasks.cancel(handle);
            }
        }
        self.tasks.clear();
        self.menu.teardown();
        self.torn_down = true;
        info!("Applet torn down");
    }

    /// The menu reconciler.
    pub fn menu(&self) -> &MenuReconciler<R> {
        &self.menu
    }

    /// Mutable access to the menu reconciler.
    pub fn menu_mut(&mut self) -> &mut MenuReconciler<R> {
        &mut self.menu
    }

    /// Number of scheduled tasks.
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    fn activate(&mut self, name: &str, id: &str) {
        let launch_mode = PolicySettings::read(self.ctx.settings.as_ref()).launch_mode();
        let tracker = RunningStateTracker::new(VmQuery::new(
            self.ctx.invoker.as_ref(),
            &self.ctx.commands,
        ));
        let dispatcher = ActionDispatcher::new(
            self.ctx.invoker.as_ref(),
            self.ctx.windows.as_ref(),
            &self.ctx.commands,
        );

        match dispatcher.activate(&tracker, name, id, launch_mode) {
            Ok(Activation::Started) => {
                let delay = self.ctx.timings.toggle_delay;
                self.tasks.schedule_in_slot(
                    &mut self.running_slot,
                    delay,
                    AppletTask::RefreshRunning,
                );
            }
            Ok(Activation::Focused(_) | Activation::NoWindow) => {}
            Err(e) => self.report(&e),
        }
    }

    fn after_launch_toggle(&mut self, result: CoreResult<()>) {
        if let Err(e) = result {
            self.report(&e);
        }
        let policy = PolicySettings::read(self.ctx.settings.as_ref());
        self.menu.sync_policy_toggles(policy);
    }

    fn release_slot(&mut self, handle: TaskHandle) {
        for slot in [
            &mut self.initial_slot,
            &mut self.repopulate_slot,
            &mut self.running_slot,
        ] {
            if *slot == Some(handle) {
                *slot = None;
            }
        }
    }

    fn report(&self, e: &CoreError) {
        error!(error = %e, "Applet operation failed");
        self.ctx
            .notifier
            .notify_error(APPLET_NAME, &format!("{}: {}", APPLET_NAME, e));
    }
}

impl<R: MenuRenderer, C: Clock> Drop for Applet<R, C> {
    fn drop(&mut self) {
        self.teardown();
    }
}
