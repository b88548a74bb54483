//! # TodoMVC Testing
//!
//! Testing utilities and helpers for reducers built on `todomvc-core`.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for reducers
//! - [`assertions`]: Assertion helpers for produced events
//! - [`properties`]: proptest strategies for task text
//!
//! ## Example
//!
//! ```ignore
//! use todomvc_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::AddTodo { text: "Buy milk".into() })
//!     .then_state(|state| assert_eq!(state.count(), 1))
//!     .then_events(|events| assertions::assert_event_names(events, &["TodoAdded"]))
//!     .run();
//! ```


/// Property-based testing utilities
///
/// Strategies for the text a user can type into the new-todo input.
pub mod properties {
    use proptest::prelude::*;

    /// Text that is empty or whitespace only
    pub fn blank_text() -> impl Strategy<Value = String> {
        "[ \t\n\r]{0,6}"
    }

    /// Text with at least one visible character, possibly padded with spaces
    pub fn task_text() -> impl Strategy<Value = String> {
        (" {0,2}", "[A-Za-z0-9][A-Za-z0-9 ]{0,15}", " {0,2}")
            .prop_map(|(lead, body, trail)| format!("{lead}{body}{trail}"))
    }

    /// Any input text, blank or not
    pub fn any_text() -> impl Strategy<Value = String> {
        prop_oneof![1 => blank_text(), 4 => task_text()]
    }
}

// Re-export commonly used items
pub use reducer_test::{assertions, ReducerTest};

#[cfg(test)]
mod tests {
    use super::properties::{blank_text, task_text};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn blank_text_trims_to_empty(text in blank_text()) {
            prop_assert!(text.trim().is_empty());
        }

        #[test]
        fn task_text_is_never_blank(text in task_text()) {
            prop_assert!(!text.trim().is_empty());
        }
    }
}
