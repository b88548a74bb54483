//! Property tests for `TodoStore`
//!
//! Random command sequences are run against a fresh store and the list
//! invariants are checked after every step.

use proptest::prelude::*;
use std::collections::BTreeSet;
use todomvc::{Filter, TodoAction, TodoId, TodoItem, TodoStore};
use todomvc_testing::properties::{any_text, blank_text, task_text};

fn filter_strategy() -> impl Strategy<Value = Filter> {
    prop_oneof![Just(Filter::All), Just(Filter::Active), Just(Filter::Completed)]
}

/// Commands a user can issue; ids range a little past what usually exists
fn command_strategy() -> impl Strategy<Value = TodoAction> {
    prop_oneof![
        4 => any_text().prop_map(|text| TodoAction::AddTodo { text }),
        3 => (1_u64..12).prop_map(|id| TodoAction::ToggleTodo { id: TodoId::new(id) }),
        1 => filter_strategy().prop_map(|filter| TodoAction::SetFilter { filter }),
        1 => Just(TodoAction::MarkAllCompleted),
        1 => Just(TodoAction::ClearCompleted),
    ]
}

fn store_after(commands: &[TodoAction]) -> TodoStore {
    let mut store = TodoStore::new();
    for command in commands {
        store.dispatch(command.clone());
    }
    store
}

fn id_set(items: &[TodoItem]) -> BTreeSet<TodoId> {
    items.iter().map(|t| t.id).collect()
}

proptest! {
    #[test]
    fn ids_are_unique_and_below_next_id(commands in prop::collection::vec(command_strategy(), 0..40)) {
        let mut store = TodoStore::new();
        let mut highest_seen = 0_u64;

        for command in commands {
            store.dispatch(command);
            let items = store.items();

            prop_assert_eq!(id_set(&items).len(), items.len());
            for item in &items {
                prop_assert!(item.id < store.next_id());
                prop_assert!(!item.text.trim().is_empty());
                prop_assert_eq!(item.text.trim(), item.text.as_str());
                highest_seen = highest_seen.max(item.id.get());
            }
            prop_assert!(store.next_id().get() > highest_seen);
        }
    }

    #[test]
    fn new_ids_exceed_all_previous(commands in prop::collection::vec(command_strategy(), 0..30), text in task_text()) {
        let mut store = store_after(&commands);
        let next_before = store.next_id();

        store.add(&text);

        let added = store.items().last().cloned();
        prop_assert_eq!(added.map(|t| t.id), Some(next_before));
        prop_assert_eq!(Some(store.next_id()), next_before.checked_next());
    }

    #[test]
    fn toggle_twice_restores(commands in prop::collection::vec(command_strategy(), 0..30), id in 1_u64..12) {
        let mut store = store_after(&commands);
        let before = store.items();

        store.toggle(TodoId::new(id));
        store.toggle(TodoId::new(id));

        prop_assert_eq!(store.items(), before);
    }

    #[test]
    fn active_and_completed_partition_all(commands in prop::collection::vec(command_strategy(), 0..40)) {
        let mut store = store_after(&commands);

        store.set_filter(Filter::All);
        let all = id_set(&store.visible_items());
        store.set_filter(Filter::Active);
        let active = id_set(&store.visible_items());
        store.set_filter(Filter::Completed);
        let completed = id_set(&store.visible_items());

        prop_assert!(active.is_disjoint(&completed));
        let union: BTreeSet<TodoId> = active.union(&completed).copied().collect();
        prop_assert_eq!(union, all);
    }

    #[test]
    fn active_count_matches_items(commands in prop::collection::vec(command_strategy(), 0..40)) {
        let mut store = store_after(&commands);
        let items = store.items();
        prop_assert_eq!(store.active_count(), items.iter().filter(|t| !t.completed).count());
        prop_assert_eq!(store.active_count(), store.count() - store.completed_count());

        let active_before = store.active_count();
        store.delete_completed();
        prop_assert_eq!(store.active_count(), active_before);

        store.mark_all_completed();
        prop_assert_eq!(store.active_count(), 0);
    }

    #[test]
    fn blank_add_changes_nothing(commands in prop::collection::vec(command_strategy(), 0..30), text in blank_text()) {
        let mut store = store_after(&commands);
        let items = store.items();
        let next_id = store.next_id();

        store.add(&text);

        prop_assert_eq!(store.items(), items);
        prop_assert_eq!(store.next_id(), next_id);
    }

    #[test]
    fn replaying_events_rebuilds_the_list(commands in prop::collection::vec(command_strategy(), 0..40)) {
        let mut original = TodoStore::new();
        let mut journal = Vec::new();
        for command in commands {
            journal.extend(original.dispatch(command));
        }

        let mut replica = TodoStore::new();
        for event in journal {
            replica.dispatch(event);
        }

        prop_assert_eq!(replica.items(), original.items());
        prop_assert_eq!(replica.filter(), original.filter());
        prop_assert_eq!(replica.next_id(), original.next_id());
    }
}
