mod clock;
mod task_queue;

pub use {
    clock::{Clock, SystemClock, VirtualClock},
    task_queue::{TaskHandle, TaskQueue},
};
