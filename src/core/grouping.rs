use crate::core::types::Category;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Category-keyed buckets that remember the order categories were first
/// seen, so grouped output always mirrors the traversal that built it.
#[derive(Debug, Clone)]
pub struct CategoryMap<T> {
    entries: Vec<(Category, Vec<T>)>,
    index: HashMap<Category, usize>,
}

impl<T> Default for CategoryMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> CategoryMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the category's bucket, creating it at the back on first use.
    pub fn push(&mut self, category: Category, item: T) {
        match self.index.get(&category) {
            Some(&slot) => self.entries[slot].1.push(item),
            None => {
                self.index.insert(category, self.entries.len());
                self.entries.push((category, vec![item]));
            }
        }
    }

    pub fn get(&self, category: Category) -> Option<&[T]> {
        self.index
            .get(&category)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    /// Buckets in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&Category, &[T])> {
        self.entries.iter().map(|(c, items)| (c, items.as_slice()))
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total records across every bucket.
    pub fn record_count(&self) -> usize {
        self.entries.iter().map(|(_, items)| items.len()).sum()
    }

    /// All records in bucket order, then intra-bucket order.
    pub fn flattened(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().flat_map(|(_, items)| items.iter())
    }
}

// Serializes as a map from category key to bucket, entries emitted in
// first-seen order.
impl<T: Serialize> Serialize for CategoryMap<T> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, items) in &self.entries {
            map.serialize_entry(&category.key(), items)?;
        }
        map.end()
    }
}
