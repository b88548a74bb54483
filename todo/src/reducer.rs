//! Reducer logic for the todo list.
//!
//! Commands are validated, turned into events, and the events are applied to
//! state. Every mutation rebuilds the item collection from the old one; no
//! stored item is ever modified in place.

use crate::types::{IgnoreReason, TodoAction, TodoId, TodoItem, TodoState};
use todomvc_core::{action::Action, reducer::Reducer, smallvec, SmallVec};

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates an `AddTodo` command, returning the trimmed text
    fn validate_add_todo(text: &str) -> Result<String, IgnoreReason> {
        let text = text.trim();
        if text.is_empty() {
            return Err(IgnoreReason::EmptyText);
        }
        Ok(text.to_string())
    }

    /// Validates a `ToggleTodo` command, returning the new completion flag
    fn validate_toggle_todo(state: &TodoState, id: TodoId) -> Result<bool, IgnoreReason> {
        state
            .get(id)
            .map(|todo| !todo.completed)
            .ok_or(IgnoreReason::UnknownId(id))
    }

    /// Validates a `MarkAllCompleted` command, returning how many todos change
    fn validate_mark_all_completed(state: &TodoState) -> Result<usize, IgnoreReason> {
        match state.active_count() {
            0 => Err(IgnoreReason::NothingToChange),
            count => Ok(count),
        }
    }

    /// Validates a `ClearCompleted` command, returning how many todos go away
    fn validate_clear_completed(state: &TodoState) -> Result<usize, IgnoreReason> {
        match state.completed_count() {
            0 => Err(IgnoreReason::NothingToChange),
            removed => Ok(removed),
        }
    }

    /// Applies an event to state
    ///
    /// A `TodoAdded` that would break the id or text invariants is refused
    /// and the state is left as it was.
    fn apply_event(state: &mut TodoState, action: &TodoAction) -> Result<(), IgnoreReason> {
        match action {
            TodoAction::TodoAdded { id, text } => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(IgnoreReason::EmptyText);
                }
                if state.contains(*id) {
                    return Err(IgnoreReason::DuplicateId(*id));
                }
                let Some(after) = id.checked_next() else {
                    return Err(IgnoreReason::IdsExhausted);
                };
                state.items = state
                    .items
                    .iter()
                    .cloned()
                    .chain(std::iter::once(TodoItem::new(*id, text.to_string())))
                    .collect();
                state.next_id = state.next_id.max(after);
            }
            TodoAction::TodoToggled { id, completed } => {
                state.items = state
                    .items
                    .iter()
                    .map(|todo| {
                        if todo.id == *id {
                            todo.with_completed(*completed)
                        } else {
                            todo.clone()
                        }
                    })
                    .collect();
            }
            TodoAction::FilterChanged { filter } => {
                state.filter = *filter;
            }
            TodoAction::AllMarkedCompleted { .. } => {
                state.items = state
                    .items
                    .iter()
                    .map(|todo| todo.with_completed(true))
                    .collect();
            }
            TodoAction::CompletedCleared { .. } => {
                state.items = state
                    .items
                    .iter()
                    .filter(|todo| !todo.completed)
                    .cloned()
                    .collect();
            }
            // Commands and ignored inputs are not applied to state
            TodoAction::Ignored { .. }
            | TodoAction::AddTodo { .. }
            | TodoAction::ToggleTodo { .. }
            | TodoAction::SetFilter { .. }
            | TodoAction::MarkAllCompleted
            | TodoAction::ClearCompleted => {}
        }
        Ok(())
    }

    /// Applies the event for a validated command, or reports why it was ignored
    ///
    /// The event is only returned when it was applied.
    fn commit(
        state: &mut TodoState,
        validated: Result<TodoAction, IgnoreReason>,
    ) -> SmallVec<[TodoAction; 4]> {
        let applied = validated.and_then(|event| {
            Self::apply_event(state, &event)?;
            Ok(event)
        });
        let event = applied.unwrap_or_else(|reason| {
            tracing::debug!(%reason, "Command ignored");
            TodoAction::Ignored { reason }
        });
        smallvec![event]
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
    ) -> SmallVec<[Self::Action; 4]> {
        match action {
            // ========== Commands ==========
            TodoAction::AddTodo { text } => {
                let validated = Self::validate_add_todo(&text).map(|text| TodoAction::TodoAdded {
                    id: state.next_id,
                    text,
                });
                Self::commit(state, validated)
            }

            TodoAction::ToggleTodo { id } => {
                let validated = Self::validate_toggle_todo(state, id)
                    .map(|completed| TodoAction::TodoToggled { id, completed });
                Self::commit(state, validated)
            }

            TodoAction::SetFilter { filter } => {
                Self::commit(state, Ok(TodoAction::FilterChanged { filter }))
            }

            TodoAction::MarkAllCompleted => {
                let validated = Self::validate_mark_all_completed(state)
                    .map(|count| TodoAction::AllMarkedCompleted { count });
                Self::commit(state, validated)
            }

            TodoAction::ClearCompleted => {
                let validated = Self::validate_clear_completed(state)
                    .map(|removed| TodoAction::CompletedCleared { removed });
                Self::commit(state, validated)
            }

            // ========== Events ==========
            TodoAction::TodoAdded { .. }
            | TodoAction::TodoToggled { .. }
            | TodoAction::FilterChanged { .. }
            | TodoAction::AllMarkedCompleted { .. }
            | TodoAction::CompletedCleared { .. }
            | TodoAction::Ignored { .. } => {
                // Events are being replayed from a journal
                if let Err(reason) = Self::apply_event(state, &action) {
                    tracing::trace!(%reason, event = action.name(), "Replayed event skipped");
                }
                SmallVec::new()
            }
        }
    }
}
