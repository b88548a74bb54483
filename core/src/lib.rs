//! # TodoMVC Core
//!
//! Core traits for the TodoMVC store.
//!
//! The store follows the Reducer pattern: every change to the todo list is a
//! typed action fed through a pure function that updates state in place and
//! reports what happened.
//!
//! ## Core Concepts
//!
//! - **State**: The domain state owned by a store
//! - **Action**: All possible inputs to a reducer (commands and events)
//! - **Reducer**: Pure function `(State, Action) → (State, Events)`
//!
//! ## Example
//!
//! ```ignore
//! use todomvc_core::{reducer::Reducer, SmallVec};
//!
//! impl Reducer for TodoReducer {
//!     type State = TodoState;
//!     type Action = TodoAction;
//!
//!     fn reduce(&self, state: &mut TodoState, action: TodoAction) -> SmallVec<[TodoAction; 4]> {
//!         // Business logic goes here
//!         SmallVec::new()
//!     }
//! }
//! ```

pub use smallvec::{smallvec, SmallVec};

/// Action module - Unified input type for reducers
///
/// Actions unify commands (requests to change state) and events (facts
/// about what happened). Implement [`action::Action`] with
/// `#[derive(Action)]` from `todomvc-macros`.
pub mod action {
    /// Whether an action is a request or a recorded fact
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum ActionKind {
        /// A request to change state; may be rejected
        Command,
        /// Something that already happened; applied as-is
        Event,
    }

    impl ActionKind {
        /// Lowercase label used for logs and metric labels
        #[must_use]
        pub const fn as_str(self) -> &'static str {
            match self {
                Self::Command => "command",
                Self::Event => "event",
            }
        }
    }

    impl std::fmt::Display for ActionKind {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.as_str())
        }
    }

    /// Common behaviour of action enums
    ///
    /// # Example
    ///
    /// ```ignore
    /// #[derive(Action, Clone, Debug)]
    /// enum TodoAction {
    ///     #[command]
    ///     AddTodo { text: String },
    ///
    ///     #[event]
    ///     TodoAdded { id: TodoId, text: String },
    /// }
    ///
    /// assert!(TodoAction::AddTodo { text: "x".into() }.is_command());
    /// assert_eq!(TodoAction::AddTodo { text: "x".into() }.name(), "AddTodo");
    /// ```
    pub trait Action {
        /// Command or event
        fn kind(&self) -> ActionKind;

        /// Variant name, used for logging
        fn name(&self) -> &'static str;

        /// Returns true if this action is a command
        fn is_command(&self) -> bool {
            self.kind() == ActionKind::Command
        }

        /// Returns true if this action is an event
        fn is_event(&self) -> bool {
            self.kind() == ActionKind::Event
        }
    }
}

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action) → (State, Events)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodoReducer {
    ///     type State = TodoState;
    ///     type Action = TodoAction;
    ///
    ///     fn reduce(&self, state: &mut TodoState, action: TodoAction) -> SmallVec<[TodoAction; 4]> {
    ///         match action {
    ///             TodoAction::MarkAllCompleted => { /* ... */ }
    ///             _ => {}
    ///         }
    ///         SmallVec::new()
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Reduce an action into state changes
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns the events describing what happened
        ///
        /// Reducers never fail: an action that cannot be applied leaves the
        /// state untouched and is reported through the returned events.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
        ) -> SmallVec<[Self::Action; 4]>;
    }
}
