//! Persisted Collections
//!
//! An ordered entity list bound to one storage key. Every mutation writes
//! the whole list back before returning.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::reorder::move_index;
use crate::storage::{load_list, persist, KeyValueStore};

/// Core trait for all persisted entities
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Ordered list of entities mirrored to `store[key]`
#[derive(Debug, Clone)]
pub struct Collection<T, S> {
    key: &'static str,
    items: Vec<T>,
    store: S,
}

impl<T, S> Collection<T, S>
where
    T: Entity + Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    /// Restore from storage; undecodable entries are dropped, the rest kept
    pub fn load(store: S, key: &'static str) -> Self {
        let items: Vec<T> = load_list(&store, key);
        log::debug!("loaded {} entries from {}", items.len(), key);
        Self { key, items, store }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Append an entity
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.commit();
    }

    /// Mutate the entity with `id` in place. Returns `false` if absent.
    pub fn update(&mut self, id: T::Id, f: impl FnOnce(&mut T)) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return false;
        };
        f(item);
        self.commit();
        true
    }

    /// Remove the entity with `id`. Returns `false` if absent.
    pub fn remove(&mut self, id: T::Id) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        if self.items.len() == before {
            return false;
        }
        self.commit();
        true
    }

    /// Move the entity at index `from` to index `to`
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if !move_index(&mut self.items, from, to) {
            return false;
        }
        if from != to {
            self.commit();
        }
        true
    }

    fn commit(&self) {
        persist(&self.store, self.key, &self.items);
    }
}

impl<T, S> Collection<T, S>
where
    T: Entity<Id = i64>,
{
    /// Timestamp id for a new entity, bumped past existing ids created in
    /// the same millisecond
    pub fn next_id(&self, now_millis: i64) -> i64 {
        let newest = self.items.iter().map(Entity::id).max().unwrap_or(i64::MIN);
        now_millis.max(newest.saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KEY_CALENDAR_EVENTS, KEY_POST_IT_NOTES, KEY_TODOS};
    use crate::models::{Event, PostItNote, Todo};
    use crate::storage::{load_json, MemoryStorage};
    use chrono::NaiveDate;

    fn todo(id: i64, text: &str) -> Todo {
        Todo::new(id, text, None).unwrap()
    }

    fn assert_mirrored<T>(list: &Collection<T, MemoryStorage>, store: &MemoryStorage, key: &str)
    where
        T: Entity + Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let stored: Vec<T> = load_json(store, key).expect("list should be stored");
        assert_eq!(stored.as_slice(), list.items());
    }

    #[test]
    fn test_todo_store_tracks_every_mutation() {
        let store = MemoryStorage::new();
        let mut todos = Collection::<Todo, _>::load(store.clone(), KEY_TODOS);
        assert!(todos.is_empty());

        todos.push(todo(1, "one"));
        assert_mirrored(&todos, &store, KEY_TODOS);
        todos.push(todo(2, "two"));
        assert_mirrored(&todos, &store, KEY_TODOS);
        assert!(todos.update(1, |t| t.completed = !t.completed));
        assert_mirrored(&todos, &store, KEY_TODOS);
        assert!(todos.remove(2));
        assert_mirrored(&todos, &store, KEY_TODOS);
        assert!(!todos.remove(2));

        assert_eq!(todos.len(), 1);
        assert!(todos.get(1).unwrap().completed);
    }

    #[test]
    fn test_note_and_event_stores_track_mutations() {
        let store = MemoryStorage::new();
        let mut notes = Collection::<PostItNote, _>::load(store.clone(), KEY_POST_IT_NOTES);
        let mut events = Collection::<Event, _>::load(store.clone(), KEY_CALENDAR_EVENTS);

        for id in 1..=3 {
            notes.push(PostItNote {
                id,
                content: String::new(),
                color: "hsl(0, 70%, 70%)".to_string(),
                text_color: "#000000".to_string(),
            });
            events.push(Event {
                id,
                date: NaiveDate::from_ymd_opt(2024, 1, id as u32).unwrap(),
                title: format!("event {id}"),
            });
            assert_mirrored(&notes, &store, KEY_POST_IT_NOTES);
            assert_mirrored(&events, &store, KEY_CALENDAR_EVENTS);
        }

        notes.update(2, |n| n.content = "edited".to_string());
        notes.remove(1);
        events.remove(3);
        assert_mirrored(&notes, &store, KEY_POST_IT_NOTES);
        assert_mirrored(&events, &store, KEY_CALENDAR_EVENTS);
        assert_eq!(notes.get(2).unwrap().content, "edited");
    }

    #[test]
    fn test_reload_restores_order() {
        let store = MemoryStorage::new();
        let mut todos = Collection::<Todo, _>::load(store.clone(), KEY_TODOS);
        todos.push(todo(1, "a"));
        todos.push(todo(2, "b"));
        todos.push(todo(3, "c"));
        assert!(todos.move_item(2, 0));

        let reloaded = Collection::<Todo, _>::load(store, KEY_TODOS);
        let ids: Vec<i64> = reloaded.items().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_bad_entry_does_not_erase_the_rest() {
        let store = MemoryStorage::new();
        store
            .write(
                KEY_CALENDAR_EVENTS,
                r#"[{"id":1,"date":"2024-05-03","title":"keep"},{"id":2,"date":null,"title":"bad"}]"#,
            )
            .unwrap();

        let mut events = Collection::<Event, _>::load(store.clone(), KEY_CALENDAR_EVENTS);
        assert_eq!(events.len(), 1);
        events.push(Event {
            id: 3,
            date: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
            title: "new".to_string(),
        });

        let stored: Vec<Event> = load_json(&store, KEY_CALENDAR_EVENTS).unwrap();
        let titles: Vec<&str> = stored.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["keep", "new"]);
    }

    #[test]
    fn test_update_missing_id_leaves_store_alone() {
        let store = MemoryStorage::new();
        let mut todos = Collection::<Todo, _>::load(store.clone(), KEY_TODOS);
        assert!(!todos.update(99, |t| t.completed = true));
        assert_eq!(store.raw(KEY_TODOS), None);
    }

    #[test]
    fn test_next_id_is_unique_within_a_millisecond() {
        let store = MemoryStorage::new();
        let mut todos = Collection::<Todo, _>::load(store, KEY_TODOS);
        assert_eq!(todos.next_id(1_000), 1_000);
        todos.push(todo(1_000, "first"));
        assert_eq!(todos.next_id(1_000), 1_001);
        assert_eq!(todos.next_id(5_000), 5_000);
    }
}
