use crate::{CoreError, split_command_line};

/// WHAT: Quoted arguments are kept together
/// WHY: VM ids and paths may contain spaces
#[test]
#[allow(clippy::unwrap_used)]
fn given_quoted_argument_when_splitting_then_single_word() {
    // Given/When: Splitting a command with a quoted argument
    let (program, args) = split_command_line("vboxmanage startvm 'my vm' --type headless").unwrap();

    // Then: Program and arguments are separated correctly
    assert_eq!(program, "vboxmanage");
    assert_eq!(args, vec!["startvm", "my vm", "--type", "headless"]);
}

/// WHAT: Unbalanced quotes are rejected
/// WHY: Spawning a half-parsed command would run the wrong thing
#[test]
fn given_unbalanced_quote_when_splitting_then_invalid_command_line() {
    // Given/When: Splitting a line with an open quote
    let result = split_command_line("vboxmanage startvm \"broken");

    // Then: InvalidCommandLine error
    assert!(matches!(result, Err(CoreError::InvalidCommandLine { .. })));
}

/// WHAT: Blank command line is rejected
/// WHY: There is no program to spawn
#[test]
fn given_blank_line_when_splitting_then_invalid_command_line() {
    // Given/When: Splitting whitespace
    let result = split_command_line("   ");

    // Then: InvalidCommandLine error
    assert!(matches!(result, Err(CoreError::InvalidCommandLine { .. })));
}
