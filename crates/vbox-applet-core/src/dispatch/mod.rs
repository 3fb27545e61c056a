mod action_dispatcher;
mod window_manager;

pub use {
    action_dispatcher::{ActionDispatcher, Activation},
    window_manager::{WindowInfo, WindowManager},
};
