//! Error types.
//!
//! The store itself never fails; these errors only arise at the edges, when
//! raw text is turned into typed values.

use thiserror::Error;

/// A string that names no [`Filter`](crate::Filter)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown filter `{0}` (expected all, active or completed)")]
pub struct ParseFilterError(pub String);

/// A REPL line that could not be turned into a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a known command
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    /// The command needs an argument that was not given
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        /// Command name
        command: &'static str,
        /// What was expected
        argument: &'static str,
    },

    /// The todo id is not a number
    #[error("invalid todo id `{input}`: {source}")]
    InvalidId {
        /// Text that failed to parse
        input: String,
        /// Underlying parse failure
        #[source]
        source: std::num::ParseIntError,
    },
}
