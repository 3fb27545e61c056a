mod commands;
mod parser;
mod query;
mod record;
mod running;

pub use {
    commands::ToolCommands, parser::parse_vm_list, query::VmQuery, record::VmRecord,
    running::RunningStateTracker,
};
