use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Split a command line into program and arguments using POSIX shell-word rules.
///
/// Fails on unbalanced quotes and on a line with no words at all.
#[track_caller]
pub fn split_command_line(command: &str) -> CoreResult<(String, Vec<String>)> {
    let mut words = shell_words::split(command).map_err(|e| CoreError::InvalidCommandLine {
        command: command.to_string(),
        reason: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    if words.is_empty() {
        return Err(CoreError::InvalidCommandLine {
            command: command.to_string(),
            reason: "no program given".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let program = words.remove(0);
    Ok((program, words))
}
