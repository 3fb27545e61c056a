mod command_line;
mod invoker;

pub use command_line::split_command_line;

pub use invoker::{ProcessInvoker, ProcessOutput};
