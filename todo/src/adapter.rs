//! View/input adapter.
//!
//! Turns raw user input (key presses, clicks, navigation links) into typed
//! [`TodoAction`]s, and turns the store back into a [`View`] for display.
//! The store never sees raw strings from the page.

use crate::store::TodoStore;
use crate::types::{Filter, TodoAction, TodoId, TodoItem};
use serde::Serialize;

/// Key that submits the new-todo input
pub const SUBMIT_KEY: &str = "Enter";

/// Raw user interaction with the todo widget
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A key went down in the new-todo input, which currently holds `value`
    NewTodoKeyDown {
        /// Key name, e.g. `"Enter"`
        key: String,
        /// Current input text
        value: String,
    },
    /// A todo's text was clicked
    TodoClicked {
        /// Clicked todo
        id: TodoId,
    },
    /// A filter link was clicked
    NavClicked {
        /// Link target, e.g. `"#/active"`
        href: String,
    },
    /// The "mark all completed" control was clicked
    MarkAllClicked,
    /// The "clear completed" control was clicked
    ClearCompletedClicked,
}

/// Maps a filter link target to a filter
///
/// A leading `#/`, `#` or `/` is dropped. Empty and unrecognised segments
/// select [`Filter::All`].
#[must_use]
pub fn filter_from_href(href: &str) -> Filter {
    let segment = href
        .strip_prefix("#/")
        .or_else(|| href.strip_prefix('#'))
        .or_else(|| href.strip_prefix('/'))
        .unwrap_or(href);

    if segment.is_empty() {
        return Filter::All;
    }

    segment.parse::<Filter>().unwrap_or_else(|err| {
        tracing::debug!(%err, "Unrecognised filter link, showing all");
        Filter::All
    })
}

/// Translates an input event into the command it requests
///
/// Key presses other than [`SUBMIT_KEY`] request nothing.
#[must_use]
pub fn translate(event: InputEvent) -> Option<TodoAction> {
    match event {
        InputEvent::NewTodoKeyDown { key, value } => (key == SUBMIT_KEY).then(|| TodoAction::AddTodo {
            text: value.trim().to_string(),
        }),
        InputEvent::TodoClicked { id } => Some(TodoAction::ToggleTodo { id }),
        InputEvent::NavClicked { href } => Some(TodoAction::SetFilter {
            filter: filter_from_href(&href),
        }),
        InputEvent::MarkAllClicked => Some(TodoAction::MarkAllCompleted),
        InputEvent::ClearCompletedClicked => Some(TodoAction::ClearCompleted),
    }
}

/// Footer caption, e.g. `"1 item left"` or `"3 items left"`
#[must_use]
pub fn items_left_caption(count: usize) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    format!("{count} {noun} left")
}

/// Everything needed to draw the widget
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct View {
    /// Visible todos, in order
    pub rows: Vec<TodoItem>,
    /// Selected filter
    pub filter: Filter,
    /// Number of active todos
    pub active_count: usize,
    /// Footer caption
    pub items_left: String,
    /// Whether "clear completed" has anything to do
    pub has_completed: bool,
}

impl View {
    /// Renders the current state of `store`
    #[must_use]
    pub fn render(store: &TodoStore) -> Self {
        let active_count = store.active_count();
        Self {
            rows: store.visible_items(),
            filter: store.filter(),
            active_count,
            items_left: items_left_caption(active_count),
            has_completed: store.completed_count() > 0,
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.rows.is_empty() {
            writeln!(f, "  (nothing to show)")?;
        }
        for row in &self.rows {
            let mark = if row.completed { "[x]" } else { "[ ]" };
            writeln!(f, "  {mark} {:>3}  {}", row.id, row.text)?;
        }

        write!(f, "{}  |", self.items_left)?;
        for filter in Filter::ALL {
            if filter == self.filter {
                write!(f, " [{filter}]")?;
            } else {
                write!(f, " {filter}")?;
            }
        }
        if self.has_completed {
            write!(f, "  |  clear completed")?;
        }
        Ok(())
    }
}

/// The widget: a store plus the input/render glue around it
#[derive(Debug, Default)]
pub struct TodoApp {
    store: TodoStore,
}

impl TodoApp {
    /// Wraps an existing store
    #[must_use]
    pub const fn new(store: TodoStore) -> Self {
        Self { store }
    }

    /// Handles one user interaction and returns the redrawn view
    pub fn handle(&mut self, event: InputEvent) -> View {
        if let Some(action) = translate(event) {
            for event in self.store.dispatch(action) {
                tracing::debug!(?event, "Todo list updated");
            }
        }
        self.view()
    }

    /// Renders without changing anything
    #[must_use]
    pub fn view(&self) -> View {
        View::render(&self.store)
    }

    /// The underlying store
    #[must_use]
    pub const fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Consumes the app, returning its store
    #[must_use]
    pub fn into_store(self) -> TodoStore {
        self.store
    }
}
