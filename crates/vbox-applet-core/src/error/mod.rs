use error_location::ErrorLocation;
use thiserror::Error;

/// Applet engine errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// External process could not be spawned (missing executable, permissions, ...).
    #[error("Failed to run `{command}`: {reason} {location}")]
    ProcessFailed {
        /// Command line that was being run.
        command: String,
        /// Description of the spawn failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Command line is empty or cannot be split into words.
    #[error("Invalid command line `{command}`: {reason} {location}")]
    InvalidCommandLine {
        /// Offending command line.
        command: String,
        /// Why splitting failed.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A VM listing query failed.
    #[error("Query `{query}` failed: {source} {location}")]
    QueryFailed {
        /// Query that was being run (e.g. `list vms`).
        query: String,
        /// Underlying process error.
        #[source]
        source: Box<CoreError>,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Persisted settings could not be written.
    #[error("Settings error: {reason} {location}")]
    SettingsError {
        /// Description of the store failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Menu renderer failed to create or update an item.
    #[error("Menu error: {reason} {location}")]
    MenuError {
        /// Description of the renderer failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Window enumeration or focus failed.
    #[error("Window error: {reason} {location}")]
    WindowError {
        /// Description of the window manager failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
