//! VirtualBox applet: tray menu listing VirtualBox VMs, starting or focusing them.

mod app;
mod config;
mod desktop_notifier;
mod error;
mod logging;
mod process_invoker;
#[cfg(test)]
mod tests;
mod tray_event;
mod tray_manager;
mod tray_menu_renderer;
mod window_manager;

pub(crate) use {
    app::App,
    desktop_notifier::DesktopNotifier,
    error::{AppError, Result as AppResult},
    process_invoker::SystemProcessInvoker,
    tray_event::TrayEvent,
    tray_manager::TrayManager,
    tray_menu_renderer::TrayMenuRenderer,
    window_manager::WmctrlWindowManager,
};

use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::error;
use tray_icon::{TrayIconEvent, menu::MenuEvent};

/// Application entry point.
fn main() {
    let _log_guard = logging::init();

    let event_loop = EventLoopBuilder::<TrayEvent>::with_user_event().build();

    let proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(TrayEvent::Menu(event));
    }));
    let proxy = event_loop.create_proxy();
    TrayIconEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(TrayEvent::Icon(event));
    }));

    // Built on Init: the tray icon must be created once the loop is running.
    let mut app: Option<App> = None;

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::NewEvents(StartCause::Init) => match App::new() {
                Ok(a) => app = Some(a),
                Err(e) => {
                    error!("Failed to start applet: {:?}", e);
                    *control_flow = ControlFlow::ExitWithCode(1);
                    return;
                }
            },
            Event::UserEvent(TrayEvent::Menu(event)) => {
                if let Some(app) = app.as_mut() {
                    app.handle_menu_event(event);
                }
            }
            Event::UserEvent(TrayEvent::Icon(event)) => {
                if let Some(app) = app.as_mut() {
                    app.handle_icon_event(event);
                }
            }
            Event::LoopDestroyed => {
                if let Some(app) = app.as_mut() {
                    app.shutdown();
                }
                return;
            }
            _ => {}
        }

        if let Some(app) = app.as_mut() {
            *control_flow = match app.tick() {
                Some(deadline) => ControlFlow::WaitUntil(deadline),
                None => ControlFlow::Wait,
            };
        }
    });
}
