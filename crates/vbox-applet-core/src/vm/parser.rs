//! Parser for the `"<name>" {<id>}` listing printed by `vboxmanage list`.
//!
//! The tool does not escape quotes in VM names, so a name containing the
//! `" {` sequence is split at the wrong place. Lines without the delimiter
//! are kept best-effort with an empty id rather than rejected.

use crate::VmRecord;

use tracing::warn;

const DELIMITER: &str = "\" {";

/// Parse a VM listing into records, preserving the tool's order.
///
/// Empty lines are skipped; empty input yields an empty list.
pub fn parse_vm_list(raw: &str) -> Vec<VmRecord> {
    raw.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> VmRecord {
    match line.split_once(DELIMITER) {
        Some((name, id)) => VmRecord::new(name.replacen('"', "", 1), id.replacen('}', "", 1)),
        None => {
            warn!(line, "VM listing line has no `\" {{` delimiter");
            VmRecord::new(line.replacen('"', "", 1), String::new())
        }
    }
}
