//! Categorized failures a command handler may report.
//!
//! The `Display` text of every variant is the exact line shown to the user, so
//! the normalization boundary only has to render the error.

use thiserror::Error;

/// Which required positional arguments were missing or blank.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingArgs {
    /// Both the contact name and the phone are required.
    #[error("Give me name and phone please.")]
    Both,
    /// A contact name is required.
    #[error("Enter user name")]
    Name,
    /// A search query is required.
    #[error("Enter search query")]
    SearchQuery,
    /// Some argument is required; used when no more specific kind applies.
    #[error("Enter the argument for the command")]
    Generic,
}

/// Closed set of failures a handler can return.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The referenced contact does not exist.
    #[error("Contact '{0}' not found.")]
    NotFound(String),

    /// Required arguments were missing or blank; raised before the store is touched.
    #[error(transparent)]
    InvalidArguments(#[from] MissingArgs),

    /// Anything else.
    #[error("An error occurred: {0}")]
    Uncategorized(String),
}

/// Result type returned by store operations and handlers.
pub type Result<T> = std::result::Result<T, CommandError>;
