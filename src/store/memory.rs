use std::collections::HashSet;

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::models::schema::Entity;
use crate::query::filter::{Filter, SortOrder};
use crate::store::{BulkChange, RecordStore, StoreError};

pub struct MemoryStore<E: Entity> {
    records: DashMap<String, E>,
}

impl<E: Entity> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn not_found(key: &str) -> StoreError {
        StoreError::NotFound {
            entity: E::SCHEMA.name,
            key: key.to_string(),
        }
    }
}

impl<E: Entity> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> RecordStore<E> for MemoryStore<E> {
    fn count(&self, filter: &Filter) -> Result<u64, StoreError> {
        let count = self
            .records
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .count();
        Ok(count as u64)
    }

    fn find_many(
        &self,
        filter: &Filter,
        sort: &SortOrder,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<E>, StoreError> {
        let mut matching: Vec<E> = self
            .records
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();

        matching.sort_by(|a, b| sort.compare(a, b));

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(matching.into_iter().skip(offset).take(limit).collect())
    }

    fn insert(&self, record: E) -> Result<E, StoreError> {
        match self.records.entry(record.key().to_string()) {
            Entry::Occupied(entry) => Err(StoreError::Duplicate {
                entity: E::SCHEMA.name,
                key: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(record.clone());
                Ok(record)
            }
        }
    }

    fn insert_if_absent(&self, record: E) -> Result<bool, StoreError> {
        match self.records.entry(record.key().to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(entry) => {
                entry.insert(record);
                Ok(true)
            }
        }
    }

    fn update(&self, key: &str, patch: E::Patch) -> Result<E, StoreError> {
        let mut record = self
            .records
            .get_mut(key)
            .ok_or_else(|| Self::not_found(key))?;

        record.apply_patch(patch, Utc::now());
        Ok(record.clone())
    }

    fn update_many(&self, keys: &[String], change: &BulkChange) -> Result<u64, StoreError> {
        let now = Utc::now();
        let unique: HashSet<&str> = keys.iter().map(String::as_str).collect();
        let mut matched = 0;

        for key in unique {
            let Some(mut record) = self.records.get_mut(key) else {
                continue;
            };

            if let Some(status) = change.status.as_deref() {
                record.set_status(status, now);
            }
            matched += 1;
        }

        Ok(matched)
    }

    fn delete(&self, key: &str) -> Result<E, StoreError> {
        self.records
            .remove(key)
            .map(|(_, record)| record)
            .ok_or_else(|| Self::not_found(key))
    }

    fn delete_many(&self, keys: &[String]) -> Result<u64, StoreError> {
        let removed = keys
            .iter()
            .filter(|key| self.records.remove(key.as_str()).is_some())
            .count();
        Ok(removed as u64)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::MemoryStore;
    use crate::models::order::{Order, OrderPatch};
    use crate::query::filter::{Filter, SortOrder};
    use crate::store::{BulkChange, RecordStore, StoreError};

    fn order(id: &str, customer: &str, minutes_ago: i64) -> Order {
        let created = Utc::now() - Duration::minutes(minutes_ago);
        Order {
            order_id: id.to_string(),
            customer: customer.to_string(),
            destination: "Hamburg".to_string(),
            status: "Pending".to_string(),
            priority: "Normal".to_string(),
            service_type: "Standard Delivery".to_string(),
            created_at: created,
            updated_at: created,
        }
    }

    fn seeded() -> MemoryStore<Order> {
        let store = MemoryStore::new();
        store.insert(order("O-1", "Acme", 30)).unwrap();
        store.insert(order("O-2", "Globex", 20)).unwrap();
        store.insert(order("O-3", "Initech", 10)).unwrap();
        store
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let store = seeded();
        let err = store.insert(order("O-1", "Other", 0)).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn insert_if_absent_keeps_the_existing_record() {
        let store = seeded();
        assert!(!store.insert_if_absent(order("O-1", "Other", 0)).unwrap());
        assert!(store.insert_if_absent(order("O-4", "Umbrella", 0)).unwrap());

        let all = store
            .find_many(&Filter::all(), &SortOrder::newest_first(), 0, 10)
            .unwrap();
        let first = all.iter().find(|o| o.order_id == "O-1").unwrap();
        assert_eq!(first.customer, "Acme");
    }

    #[test]
    fn default_order_is_newest_first() {
        let store = seeded();
        let ids: Vec<String> = store
            .find_many(&Filter::all(), &SortOrder::newest_first(), 0, 10)
            .unwrap()
            .into_iter()
            .map(|o| o.order_id)
            .collect();
        assert_eq!(ids, vec!["O-3", "O-2", "O-1"]);
    }

    #[test]
    fn offset_and_limit_window_the_results() {
        let store = seeded();
        let page = store
            .find_many(&Filter::all(), &SortOrder::newest_first(), 1, 1)
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].order_id, "O-2");

        let past_end = store
            .find_many(&Filter::all(), &SortOrder::newest_first(), 10, 5)
            .unwrap();
        assert!(past_end.is_empty());
    }

    #[test]
    fn update_missing_key_is_not_found() {
        let store = seeded();
        let err = store.update("O-99", OrderPatch::default()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn update_many_counts_matches_and_skips_unknown_keys() {
        let store = seeded();
        let keys = vec!["O-1".to_string(), "O-1".to_string(), "O-9".to_string()];
        let change = BulkChange {
            status: Some("Delivered".to_string()),
        };

        assert_eq!(store.update_many(&keys, &change).unwrap(), 1);

        let record = store.delete("O-1").unwrap();
        assert_eq!(record.status, "Delivered");
    }

    #[test]
    fn empty_bulk_change_touches_nothing() {
        let store = seeded();
        let keys = vec!["O-2".to_string()];
        assert_eq!(store.update_many(&keys, &BulkChange::default()).unwrap(), 1);

        let record = store.delete("O-2").unwrap();
        assert_eq!(record.status, "Pending");
        assert_eq!(record.updated_at, record.created_at);
    }

    #[test]
    fn delete_many_reports_removed_count() {
        let store = seeded();
        let keys = vec!["O-1".to_string(), "O-2".to_string(), "O-7".to_string()];
        assert_eq!(store.delete_many(&keys).unwrap(), 2);
        assert_eq!(store.count(&Filter::all()).unwrap(), 1);
    }
}
