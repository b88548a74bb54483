//! In-memory to-do list with filtering and bulk operations.
//!
//! The list lives in a [`TodoStore`]: an ordered collection of tasks, each
//! active or completed, plus the filter that decides which are visible.
//! Changes are typed [`TodoAction`] commands run by the [`TodoReducer`]:
//!
//! - add a task (blank text is ignored)
//! - toggle a task's completion
//! - pick a filter (all / active / completed)
//! - mark everything completed
//! - clear completed tasks
//!
//! The [`adapter`] module turns raw user input into those commands and the
//! store back into a [`View`].
//!
//! # Quick Start
//!
//! ```
//! use todomvc::{Filter, TodoId, TodoStore};
//!
//! let mut store = TodoStore::new();
//! store.add("Buy milk");
//! store.add("Buy bread");
//! store.toggle(TodoId::new(1));
//!
//! assert_eq!(store.active_count(), 1);
//!
//! store.set_filter(Filter::Completed);
//! let visible = store.visible_items();
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].text, "Buy milk");
//! ```

pub mod adapter;
pub mod config;
pub mod error;
pub mod reducer;
pub mod repl;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use adapter::{InputEvent, TodoApp, View};
pub use config::Config;
pub use error::{CommandError, ParseFilterError};
pub use reducer::TodoReducer;
pub use store::TodoStore;
pub use types::{Filter, IgnoreReason, TodoAction, TodoId, TodoItem, TodoState};
