//! In-memory item list — demonstration CRUD state.

use std::sync::Mutex;

use castway_core::types::Item;

/// Ordered, process-lifetime item list behind one mutex.
///
/// Injected into the router state rather than living as a process global,
/// so the locking contract stays visible and testable. Reset on restart;
/// no persistence.
#[derive(Default)]
pub struct ItemStore {
    inner: Mutex<Vec<Item>>,
}

impl ItemStore {
    /// Snapshot of all items, in insertion order.
    pub fn list(&self) -> Vec<Item> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Append one item. No identifier validation, no duplicate check.
    pub fn append(&self, item: Item) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            name: "thing".to_string(),
            price: 9.5,
        }
    }

    #[test]
    fn append_then_list_round_trips() {
        let store = ItemStore::default();
        store.append(item("1"));

        let items = store.list();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0], item("1"));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = ItemStore::default();
        store.append(item("a"));
        store.append(item("b"));
        store.append(item("c"));

        let ids: Vec<_> = store.list().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn concurrent_appends_lose_nothing() {
        let store = ItemStore::default();

        std::thread::scope(|s| {
            for t in 0..8 {
                let store = &store;
                s.spawn(move || {
                    for i in 0..16 {
                        store.append(item(&format!("{t}-{i}")));
                    }
                });
            }
        });

        assert_eq!(store.list().len(), 128);
    }
}
