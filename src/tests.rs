//! Store Scenario Tests
//!
//! End-to-end store behaviour against in-memory storage.

#[cfg(test)]
mod tests {
    use crate::models::Filter;
    use crate::storage::{self, MemoryStorage, STORAGE_KEY};
    use crate::store::TodoStore;

    fn open_empty() -> TodoStore<MemoryStorage> {
        TodoStore::open(MemoryStorage::new(), STORAGE_KEY)
    }

    fn texts(store: &TodoStore<MemoryStorage>) -> Vec<String> {
        store.filtered_items().iter().map(|item| item.text.clone()).collect()
    }

    #[test]
    fn test_buy_milk_scenario() {
        let mut store = open_empty();

        let id = store.add("Buy milk").expect("item added");
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].text, "Buy milk");
        assert!(!store.items()[0].completed);
        assert_eq!(store.remaining_count(), 1);

        store.toggle_complete(&id);
        assert_eq!(store.remaining_count(), 0);
        store.set_filter(Filter::Active);
        assert!(store.filtered_items().is_empty());
        store.set_filter(Filter::Completed);
        assert_eq!(texts(&store), vec!["Buy milk"]);

        store.clear_completed();
        assert!(store.items().is_empty());
        assert_eq!(store.render().items_left, "0 items left");
    }

    #[test]
    fn test_adds_are_newest_first() {
        let mut store = open_empty();
        for text in ["one", "", "two", "   ", "three"] {
            store.add(text);
        }
        assert_eq!(texts(&store), vec!["three", "two", "one"]);
        assert_eq!(store.storage().writes(), 3);
    }

    #[test]
    fn test_ids_unique() {
        let mut store = open_empty();
        let ids: Vec<String> = (0..50).filter_map(|i| store.add(&format!("item {}", i))).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len());
    }

    #[test]
    fn test_update_text_trims_or_deletes() {
        let mut store = open_empty();
        let id = store.add("draft").unwrap();

        assert!(store.update_text(&id, " x "));
        assert_eq!(store.items()[0].text, "x");

        assert!(store.update_text(&id, ""));
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_noops_do_not_persist() {
        let mut store = open_empty();
        let id = store.add("keep").unwrap();
        let writes = store.storage().writes();

        assert!(!store.toggle_complete("missing"));
        assert!(!store.update_text("missing", "text"));
        assert!(!store.delete("missing"));
        assert_eq!(store.clear_completed(), 0);
        assert!(store.add("  ").is_none());
        assert!(!store.update_text(&id, "keep"));
        assert_eq!(store.storage().writes(), writes);
    }

    #[test]
    fn test_set_filter_never_persists() {
        let mut store = open_empty();
        store.add("a");
        let writes = store.storage().writes();
        for filter in Filter::ALL {
            store.set_filter(filter);
            assert_eq!(store.filter(), filter);
        }
        assert_eq!(store.storage().writes(), writes);
    }

    #[test]
    fn test_each_mutation_writes_once() {
        let mut store = open_empty();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();
        assert_eq!(store.storage().writes(), 2);
        store.toggle_complete(&a);
        assert_eq!(store.storage().writes(), 3);
        store.update_text(&b, "bee");
        assert_eq!(store.storage().writes(), 4);
        store.clear_completed();
        assert_eq!(store.storage().writes(), 5);
        store.delete(&b);
        assert_eq!(store.storage().writes(), 6);
    }

    #[test]
    fn test_reopen_restores_list_but_not_filter() {
        let mut store = open_empty();
        let a = store.add("a").unwrap();
        store.add("b");
        store.toggle_complete(&a);
        store.set_filter(Filter::Completed);

        let saved = store.items().to_vec();
        let reopened = TodoStore::open(store.storage().clone(), STORAGE_KEY);
        assert_eq!(reopened.items(), saved.as_slice());
        assert_eq!(reopened.filter(), Filter::All);
        assert_eq!(storage::load(reopened.storage(), STORAGE_KEY), saved);
    }

    #[test]
    fn test_corrupt_storage_starts_empty() {
        let storage = MemoryStorage::with_entry(STORAGE_KEY, "{{not json");
        let mut store = TodoStore::open(storage, STORAGE_KEY);
        assert!(store.items().is_empty());

        // First mutation replaces the corrupt value
        store.add("fresh");
        let reopened = TodoStore::open(store.storage().clone(), STORAGE_KEY);
        assert_eq!(reopened.items().len(), 1);
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut store = TodoStore::open(MemoryStorage::read_only(), STORAGE_KEY);
        let id = store.add("unsaved").unwrap();
        store.toggle_complete(&id);
        assert_eq!(store.items().len(), 1);
        assert!(store.items()[0].completed);
        assert_eq!(store.storage().writes(), 0);
    }

    #[test]
    fn test_remaining_matches_active_view() {
        let mut store = open_empty();
        let ids: Vec<String> = ["a", "b", "c", "d"].iter().filter_map(|t| store.add(t)).collect();
        store.toggle_complete(&ids[0]);
        store.toggle_complete(&ids[2]);
        store.set_filter(Filter::Active);
        assert_eq!(store.remaining_count(), store.filtered_items().len());
        assert_eq!(store.render().items_left, "2 items left");
        assert_eq!(texts(&store), vec!["d", "b"]);
    }

    #[test]
    fn test_render_marks_completed_rows_read_only() {
        let mut store = open_empty();
        let id = store.add("done").unwrap();
        store.add("open");
        store.toggle_complete(&id);

        let view = store.render();
        assert_eq!(view.rows.len(), 2);
        assert!(view.rows[0].editable);
        assert!(!view.rows[1].editable);
        assert_eq!(view.items_left, "1 item left");
    }
}
