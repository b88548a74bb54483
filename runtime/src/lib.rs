//! # TodoMVC Runtime
//!
//! Runtime implementation for the TodoMVC store.
//!
//! This crate provides the [`Store`] that owns state and runs every action
//! through a reducer.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, dispatches actions to the reducer, reports events
//!
//! The store is single-owner and synchronous: every `send` completes before
//! it returns, so a read issued right after a `send` observes its effect.
//!
//! ## Example
//!
//! ```ignore
//! use todomvc_runtime::Store;
//!
//! let mut store = Store::new(TodoState::new(), TodoReducer::new());
//!
//! // Send an action
//! let events = store.send(TodoAction::AddTodo { text: "Buy milk".into() });
//!
//! // Read state
//! let left = store.state(TodoState::active_count);
//! ```

/// Store module - The runtime for reducers
pub mod store {
    use todomvc_core::{action::Action, reducer::Reducer, SmallVec};

    /// The Store - runtime coordinator for a reducer
    ///
    /// # Type Parameters
    ///
    /// - `R`: Reducer implementation; its state and action types follow
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut store = Store::new(TodoState::new(), TodoReducer::new());
    ///
    /// store.send(TodoAction::MarkAllCompleted);
    /// assert_eq!(store.state(TodoState::active_count), 0);
    /// ```
    pub struct Store<R: Reducer> {
        state: R::State,
        reducer: R,
    }

    impl<R> Store<R>
    where
        R: Reducer,
        R::Action: Action,
    {
        /// Create a new store with initial state and reducer
        #[must_use]
        pub const fn new(initial_state: R::State, reducer: R) -> Self {
            Self {
                state: initial_state,
                reducer,
            }
        }

        /// Send an action through the reducer
        ///
        /// Returns the events the reducer produced. The state change, if
        /// any, is visible as soon as this returns.
        #[tracing::instrument(skip_all, name = "store_send", fields(action = action.name()))]
        pub fn send(&mut self, action: R::Action) -> SmallVec<[R::Action; 4]> {
            let kind = action.kind();
            tracing::debug!(kind = kind.as_str(), "Processing action");
            metrics::counter!("store.actions.total", "kind" => kind.as_str()).increment(1);

            let events = {
                let span = tracing::debug_span!("reducer_execution");
                let _enter = span.enter();
                self.reducer.reduce(&mut self.state, action)
            };

            tracing::trace!("Reducer completed, returned {} events", events.len());
            metrics::counter!("store.events.total").increment(events.len() as u64);

            events
        }

        /// Send several actions in order, collecting every produced event
        pub fn send_all<I>(&mut self, actions: I) -> Vec<R::Action>
        where
            I: IntoIterator<Item = R::Action>,
        {
            actions
                .into_iter()
                .flat_map(|action| self.send(action))
                .collect()
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state(|s| s.items().len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&R::State) -> T,
        {
            f(&self.state)
        }

        /// Consume the store, returning its final state
        #[must_use]
        pub fn into_state(self) -> R::State {
            self.state
        }
    }
}

pub use store::Store;
