mod command_line;
mod dispatcher;
mod reconciler;
mod task_queue;
