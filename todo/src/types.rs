//! Domain types for the todo list.
//!
//! A todo list is an ordered collection of short tasks, each of which is
//! either active or completed, plus the filter that decides which of them are
//! on screen. Every change is expressed as a [`TodoAction`].

use crate::error::ParseFilterError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use todomvc_macros::Action;

/// Unique identifier for a todo item
///
/// Ids are assigned by the store, starting at 1, and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// The id given to the first todo of a session
    pub const FIRST: Self = Self(1);

    /// Creates a `TodoId` from its numeric value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id that follows this one, or `None` once ids are used up
    #[must_use]
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A single todo item
///
/// Items are values: a change produces a new item, the old one is never
/// modified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Task description, trimmed and non-empty
    pub text: String,
    /// Whether the task is done
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, active todo item
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// A copy of this item with the given completion flag
    #[must_use]
    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }

    /// A copy of this item with the completion flag flipped
    #[must_use]
    pub fn toggled(&self) -> Self {
        self.with_completed(!self.completed)
    }
}

/// Which items are visible
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every item
    #[default]
    All,
    /// Items not yet completed
    Active,
    /// Completed items
    Completed,
}

impl Filter {
    /// All filters, in navigation order
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Returns true if `item` passes this filter
    #[must_use]
    pub const fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }

    /// Lowercase name, as used in navigation links
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| ParseFilterError(s.to_string()))
    }
}

/// State of the todo list
///
/// Fields are private: the only way to change them is through
/// [`TodoAction`]s run by the reducer, which keeps ids unique and
/// `next_id` ahead of every id handed out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoState {
    pub(crate) items: Vec<TodoItem>,
    pub(crate) next_id: TodoId,
    pub(crate) filter: Filter,
}

impl TodoState {
    /// Creates an empty todo list showing all items
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: TodoId::FIRST,
            filter: Filter::All,
        }
    }

    /// All items, in insertion order
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// The id the next created item will receive
    #[must_use]
    pub const fn next_id(&self) -> TodoId {
        self.next_id
    }

    /// The current filter
    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }

    /// Returns the number of todos still to do
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }

    /// Items passing the current filter, as a fresh snapshot
    #[must_use]
    pub fn visible_items(&self) -> Vec<TodoItem> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item))
            .cloned()
            .collect()
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Returns true when there are no items at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new()
    }
}

/// Why an action left the state untouched
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// New todo text was empty after trimming
    EmptyText,
    /// No todo has this id
    UnknownId(TodoId),
    /// A bulk operation found nothing to change
    NothingToChange,
    /// A todo with this id already exists
    DuplicateId(TodoId),
    /// Every id has been handed out
    IdsExhausted,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => f.write_str("todo text is empty"),
            Self::UnknownId(id) => write!(f, "no todo with id {id}"),
            Self::NothingToChange => f.write_str("nothing to change"),
            Self::DuplicateId(id) => write!(f, "todo {id} already exists"),
            Self::IdsExhausted => f.write_str("no todo ids left"),
        }
    }
}

/// Actions representing commands and events for the todo list
///
/// Commands come from the input adapter and may be ignored. Events are what
/// the reducer reports back; feeding them to a fresh store replays the list.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    // ========== Commands ==========
    /// Command: Add a todo with the given text (trimmed by the reducer)
    #[command]
    AddTodo {
        /// Raw text from the input
        text: String,
    },

    /// Command: Flip the completion flag of a todo
    #[command]
    ToggleTodo {
        /// Todo to toggle
        id: TodoId,
    },

    /// Command: Change which todos are visible
    #[command]
    SetFilter {
        /// New filter
        filter: Filter,
    },

    /// Command: Mark every todo completed
    #[command]
    MarkAllCompleted,

    /// Command: Remove every completed todo
    #[command]
    ClearCompleted,

    // ========== Events ==========
    /// Event: Todo was added
    #[event]
    TodoAdded {
        /// Assigned identifier
        id: TodoId,
        /// Trimmed text
        text: String,
    },

    /// Event: Todo completion flag changed
    #[event]
    TodoToggled {
        /// Todo identifier
        id: TodoId,
        /// New completion flag
        completed: bool,
    },

    /// Event: Filter changed
    #[event]
    FilterChanged {
        /// New filter
        filter: Filter,
    },

    /// Event: Active todos were marked completed
    #[event]
    AllMarkedCompleted {
        /// How many todos changed
        count: usize,
    },

    /// Event: Completed todos were removed
    #[event]
    CompletedCleared {
        /// How many todos were removed
        removed: usize,
    },

    /// Event: A command was ignored
    #[event]
    Ignored {
        /// Why nothing changed
        reason: IgnoreReason,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use todomvc_core::action::Action as _;

    fn item(id: u64, text: &str, completed: bool) -> TodoItem {
        TodoItem::new(TodoId::new(id), text.to_string()).with_completed(completed)
    }

    #[test]
    fn todo_id_display_and_next() {
        let id = TodoId::new(41);
        assert_eq!(id.to_string(), "41");
        assert_eq!(id.checked_next(), Some(TodoId::new(42)));
        assert_eq!(TodoId::new(u64::MAX).checked_next(), None);
        assert_eq!(TodoId::FIRST.get(), 1);
    }

    #[test]
    fn todo_item_new_is_active() {
        let item = TodoItem::new(TodoId::FIRST, "Buy milk".to_string());
        assert_eq!(item.id, TodoId::FIRST);
        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
    }

    #[test]
    fn toggled_leaves_original_untouched() {
        let original = item(1, "Buy milk", false);
        let flipped = original.toggled();

        assert!(flipped.completed);
        assert!(!original.completed);
        assert_eq!(flipped.toggled(), original);
    }

    #[test]
    fn filter_matches() {
        let active = item(1, "a", false);
        let done = item(2, "b", true);

        assert!(Filter::All.matches(&active) && Filter::All.matches(&done));
        assert!(Filter::Active.matches(&active) && !Filter::Active.matches(&done));
        assert!(!Filter::Completed.matches(&active) && Filter::Completed.matches(&done));
    }

    #[test]
    fn filter_parse_is_strict() {
        assert_eq!("all".parse::<Filter>(), Ok(Filter::All));
        assert_eq!("active".parse::<Filter>(), Ok(Filter::Active));
        assert_eq!("completed".parse::<Filter>(), Ok(Filter::Completed));

        let err = "Completed".parse::<Filter>().unwrap_err();
        assert_eq!(err, ParseFilterError("Completed".to_string()));
        assert!("".parse::<Filter>().is_err());
    }

    #[test]
    fn filter_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Filter::Active).unwrap(), "\"active\"");
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn todo_state_queries() {
        let state = TodoState {
            items: vec![item(1, "a", true), item(2, "b", false), item(3, "c", false)],
            next_id: TodoId::new(4),
            filter: Filter::Active,
        };

        assert_eq!(state.count(), 3);
        assert_eq!(state.completed_count(), 1);
        assert_eq!(state.active_count(), 2);
        assert!(state.contains(TodoId::new(2)));
        assert!(!state.contains(TodoId::new(9)));

        let visible: Vec<u64> = state.visible_items().iter().map(|t| t.id.get()).collect();
        assert_eq!(visible, vec![2, 3]);
    }

    #[test]
    fn new_state_is_empty() {
        let state = TodoState::default();
        assert!(state.is_empty());
        assert_eq!(state.next_id(), TodoId::FIRST);
        assert_eq!(state.filter(), Filter::All);
        assert_eq!(state.active_count(), 0);
    }

    #[test]
    fn todo_action_kinds() {
        let command = TodoAction::AddTodo {
            text: "Test".to_string(),
        };
        assert!(command.is_command());
        assert_eq!(command.name(), "AddTodo");

        let event = TodoAction::Ignored {
            reason: IgnoreReason::EmptyText,
        };
        assert!(event.is_event());
        assert!(!event.is_command());
    }

    #[test]
    fn ignore_reason_display() {
        assert_eq!(
            IgnoreReason::UnknownId(TodoId::new(7)).to_string(),
            "no todo with id 7"
        );
    }
}
