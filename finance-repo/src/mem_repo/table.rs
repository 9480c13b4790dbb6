use crate::models::{Entity, ForeignKey};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Rows of one entity keyed by id, with an index from each foreign key to the
/// rows holding it.
pub struct Table<T> {
    rows: BTreeMap<i32, T>,
    by_key: HashMap<ForeignKey, BTreeSet<i32>>,
    next_id: i32,
}

impl<T: Entity> Table<T> {
    pub fn new() -> Table<T> {
        Table {
            rows: BTreeMap::new(),
            by_key: HashMap::new(),
            next_id: 1,
        }
    }

    /// Id the next inserted row will get. Only consumed by `insert`.
    pub fn peek_id(&self) -> i32 {
        self.next_id
    }

    pub fn get(&self, id: i32) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn insert(&mut self, row: T) {
        let id = row.id();
        self.next_id = self.next_id.max(id + 1);
        self.index(&row);
        self.rows.insert(id, row);
    }

    pub fn replace(&mut self, row: T) -> Option<T> {
        let previous = self.rows.remove(&row.id());
        if let Some(previous) = &previous {
            self.unindex(previous);
        }
        self.insert(row);
        previous
    }

    pub fn remove(&mut self, id: i32) -> Option<T> {
        let row = self.rows.remove(&id)?;
        self.unindex(&row);
        Some(row)
    }

    pub fn children(&self, key: ForeignKey) -> Vec<T> {
        let Some(ids) = self.by_key.get(&key) else {
            return Vec::new();
        };
        ids.iter()
            .map(|id| {
                self.rows
                    .get(id)
                    .expect("rows should contain every id in by_key")
            })
            .cloned()
            .collect()
    }

    pub fn is_referenced(&self, key: ForeignKey) -> bool {
        self.by_key.get(&key).is_some_and(|ids| !ids.is_empty())
    }

    /// Another row holding the same unique key as `row`, if any.
    pub fn unique_conflict(&self, row: &T) -> Option<&T> {
        let key = row.unique_key()?;
        self.rows
            .values()
            .find(|other| other.id() != row.id() && other.unique_key() == Some(key))
    }

    fn index(&mut self, row: &T) {
        for key in row.foreign_keys() {
            self.by_key.entry(key).or_default().insert(row.id());
        }
    }

    fn unindex(&mut self, row: &T) {
        for key in row.foreign_keys() {
            if let Some(ids) = self.by_key.get_mut(&key) {
                ids.remove(&row.id());
                if ids.is_empty() {
                    self.by_key.remove(&key);
                }
            }
        }
    }
}
