//! The todo store: a [`Store`] running the [`TodoReducer`], with one method
//! per user-facing operation.

use crate::reducer::TodoReducer;
use crate::types::{Filter, TodoAction, TodoId, TodoItem, TodoState};
use todomvc_core::SmallVec;
use todomvc_runtime::Store;

/// Todo list owned by the hosting application
///
/// Every mutation goes through [`TodoStore::dispatch`]; the named methods are
/// shorthands for the matching [`TodoAction`] command. None of them fail:
/// invalid input leaves the list unchanged.
pub struct TodoStore {
    store: Store<TodoReducer>,
}

impl TodoStore {
    /// Creates an empty store showing all items
    #[must_use]
    pub const fn new() -> Self {
        Self::from_state(TodoState::new())
    }

    /// Creates a store holding the three demo tasks
    ///
    /// `Buy milk` and `Buy bread` are active, `Buy jam` is completed, and the
    /// next id is 4.
    #[must_use]
    pub fn with_demo_items() -> Self {
        let mut store = Self::new();
        store.add("Buy milk");
        store.add("Buy bread");
        store.add("Buy jam");
        store.toggle(TodoId::new(3));
        store
    }

    const fn from_state(state: TodoState) -> Self {
        Self {
            store: Store::new(state, TodoReducer::new()),
        }
    }

    /// Sends any action to the reducer, returning the produced events
    pub fn dispatch(&mut self, action: TodoAction) -> SmallVec<[TodoAction; 4]> {
        self.store.send(action)
    }

    /// Appends a todo with the trimmed `text`; blank text is ignored
    pub fn add(&mut self, text: &str) {
        self.dispatch(TodoAction::AddTodo {
            text: text.to_string(),
        });
    }

    /// Flips the completion flag of the todo with `id`, if there is one
    pub fn toggle(&mut self, id: TodoId) {
        self.dispatch(TodoAction::ToggleTodo { id });
    }

    /// Selects which todos [`visible_items`](Self::visible_items) returns
    pub fn set_filter(&mut self, filter: Filter) {
        self.dispatch(TodoAction::SetFilter { filter });
    }

    /// Marks every todo completed
    pub fn mark_all_completed(&mut self) {
        self.dispatch(TodoAction::MarkAllCompleted);
    }

    /// Removes every completed todo
    pub fn delete_completed(&mut self) {
        self.dispatch(TodoAction::ClearCompleted);
    }

    /// Number of todos not yet completed
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.store.state(TodoState::active_count)
    }

    /// Number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.store.state(TodoState::completed_count)
    }

    /// Number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.store.state(TodoState::count)
    }

    /// Todos passing the current filter, in insertion order
    #[must_use]
    pub fn visible_items(&self) -> Vec<TodoItem> {
        self.store.state(TodoState::visible_items)
    }

    /// All todos, in insertion order
    #[must_use]
    pub fn items(&self) -> Vec<TodoItem> {
        self.store.state(|s| s.items().to_vec())
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<TodoItem> {
        self.store.state(|s| s.get(id).cloned())
    }

    /// The current filter
    #[must_use]
    pub fn filter(&self) -> Filter {
        self.store.state(TodoState::filter)
    }

    /// The id the next added todo will receive
    #[must_use]
    pub fn next_id(&self) -> TodoId {
        self.store.state(TodoState::next_id)
    }

    /// Read the underlying state via a closure
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&TodoState) -> T,
    {
        self.store.state(f)
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.store.state(|state| f.debug_tuple("TodoStore").field(state).finish())
    }
}
