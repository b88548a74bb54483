//! Line commands for the interactive binary.
//!
//! Each line becomes a [`ReplCommand`]: either a widget interaction, passed
//! on to the [`TodoApp`](crate::TodoApp), or a REPL-only request.

use crate::adapter::{InputEvent, SUBMIT_KEY};
use crate::error::CommandError;
use crate::types::TodoId;

/// Usage text printed by `help`
pub const HELP: &str = "\
commands:
  new <text>     add a todo
  toggle <id>    complete / reopen a todo
  nav <href>     pick a filter, e.g. `nav #/active`, `nav #/completed`, `nav #/`
  all            mark all todos completed
  clear          remove completed todos
  show           redraw the list
  json           print the visible todos as JSON
  help           show this text
  quit           leave";

/// One parsed input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplCommand {
    /// Forward to the widget
    Input(InputEvent),
    /// Redraw
    Show,
    /// Print visible items as JSON
    Json,
    /// Print usage
    Help,
    /// Exit
    Quit,
}

/// Parses one input line
///
/// Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns [`CommandError`] for unknown commands, a missing todo id, or a
/// todo id that is not a number.
pub fn parse_line(line: &str) -> Result<Option<ReplCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    let command = match word {
        "new" => ReplCommand::Input(InputEvent::NewTodoKeyDown {
            key: SUBMIT_KEY.to_string(),
            value: rest.to_string(),
        }),
        "toggle" => ReplCommand::Input(InputEvent::TodoClicked {
            id: parse_id(rest)?,
        }),
        "nav" => ReplCommand::Input(InputEvent::NavClicked {
            href: rest.to_string(),
        }),
        "all" => ReplCommand::Input(InputEvent::MarkAllClicked),
        "clear" => ReplCommand::Input(InputEvent::ClearCompletedClicked),
        "show" => ReplCommand::Show,
        "json" => ReplCommand::Json,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn parse_id(input: &str) -> Result<TodoId, CommandError> {
    if input.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "toggle",
            argument: "a todo id",
        });
    }
    input
        .parse::<u64>()
        .map(TodoId::new)
        .map_err(|source| CommandError::InvalidId {
            input: input.to_string(),
            source,
        })
}
