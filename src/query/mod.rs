pub mod filter;
pub mod page;
pub mod params;

use crate::models::schema::Entity;
use crate::store::{RecordStore, StoreError};

pub use filter::{Filter, SortOrder};
pub use page::{Keyed, Page};
pub use params::{ListParams, ListQuery};

pub fn resolve_page<E, S>(store: &S, query: &ListQuery) -> Result<Page<Keyed<E>>, StoreError>
where
    E: Entity,
    S: RecordStore<E> + ?Sized,
{
    let total = store.count(&query.filter)?;
    let records = store.find_many(&query.filter, &query.sort, query.offset(), query.page_size)?;

    let data = records.into_iter().map(Keyed).collect();
    Ok(Page::new(data, total, query.page, query.page_size))
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::{resolve_page, ListParams, ListQuery};
    use crate::models::driver::Driver;
    use crate::models::order::Order;
    use crate::models::schema::Entity;
    use crate::store::{MemoryStore, RecordStore};

    fn order(n: usize, customer: &str) -> Order {
        let created = Utc::now() - Duration::minutes(100 - n as i64);
        Order {
            order_id: format!("O-{n}"),
            customer: customer.to_string(),
            destination: format!("Dock {n}"),
            status: "Pending".to_string(),
            priority: "Normal".to_string(),
            service_type: "Standard Delivery".to_string(),
            created_at: created,
            updated_at: created,
        }
    }

    fn store_with(count: usize) -> MemoryStore<Order> {
        let store = MemoryStore::new();
        for n in 1..=count {
            let customer = if n % 2 == 0 { "Acme Corp" } else { "Globex" };
            store.insert(order(n, customer)).unwrap();
        }
        store
    }

    fn query(page: &str, page_size: &str) -> ListQuery {
        let params = ListParams {
            page: Some(page.to_string()),
            page_size: Some(page_size.to_string()),
            ..ListParams::default()
        };
        ListQuery::resolve(&params, Order::SCHEMA)
    }

    #[test]
    fn page_length_matches_remaining_records() {
        let store = store_with(12);

        for page_size in 1..=13u64 {
            for page in 1..=15u64 {
                let q = query(&page.to_string(), &page_size.to_string());
                let result = resolve_page(&store, &q).unwrap();

                let remaining = 12u64.saturating_sub((page - 1) * page_size);
                assert_eq!(result.data.len() as u64, page_size.min(remaining));
                assert_eq!(result.total, 12);
                assert_eq!(result.total_pages, 12u64.div_ceil(page_size));
            }
        }
    }

    #[test]
    fn seven_orders_second_page_of_five() {
        let store = store_with(7);
        let result = resolve_page(&store, &query("2", "5")).unwrap();

        assert_eq!(result.data.len(), 2);
        assert_eq!(result.total, 7);
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.page, 2);
        assert_eq!(result.page_size, 5);
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let store = store_with(7);
        let result = resolve_page(&store, &query("9", "5")).unwrap();

        assert!(result.data.is_empty());
        assert_eq!(result.total, 7);
        assert_eq!(result.total_pages, 2);
    }

    #[test]
    fn search_is_or_across_whitelist_and_repeatable() {
        let store = store_with(6);
        let params = ListParams {
            search: Some("Acme".to_string()),
            ..ListParams::default()
        };
        let q = ListQuery::resolve(&params, Order::SCHEMA);

        let first = resolve_page(&store, &q).unwrap();
        let second = resolve_page(&store, &q).unwrap();
        assert_eq!(first.total, 3);
        assert_eq!(first.total, second.total);

        let params = ListParams {
            search: Some("Dock 5".to_string()),
            ..ListParams::default()
        };
        let by_destination = resolve_page(&store, &ListQuery::resolve(&params, Order::SCHEMA)).unwrap();
        assert_eq!(by_destination.total, 1);
        assert_eq!(by_destination.data[0].0.order_id, "O-5");
    }

    #[test]
    fn search_is_case_sensitive() {
        let store = store_with(4);
        let params = ListParams {
            search: Some("acme".to_string()),
            ..ListParams::default()
        };
        let result = resolve_page(&store, &ListQuery::resolve(&params, Order::SCHEMA)).unwrap();
        assert_eq!(result.total, 0);
    }

    #[test]
    fn status_is_searchable_only_where_whitelisted() {
        let store = store_with(3);
        let params = ListParams {
            search: Some("Pending".to_string()),
            ..ListParams::default()
        };
        let result = resolve_page(&store, &ListQuery::resolve(&params, Order::SCHEMA)).unwrap();
        assert_eq!(result.total, 0);
        assert!(!Order::SCHEMA.searchable.contains(&"status"));
        assert!(Driver::SCHEMA.searchable.contains(&"status"));
    }

    #[test]
    fn sort_by_id_alias_matches_sort_by_business_key() {
        let store = store_with(9);
        let by_alias = ListParams {
            sort: Some("id".to_string()),
            direction: Some("asc".to_string()),
            page_size: Some("20".to_string()),
            ..ListParams::default()
        };
        let by_field = ListParams {
            sort: Some("orderId".to_string()),
            direction: Some("asc".to_string()),
            page_size: Some("20".to_string()),
            ..ListParams::default()
        };

        let alias_ids: Vec<String> = resolve_page(&store, &ListQuery::resolve(&by_alias, Order::SCHEMA))
            .unwrap()
            .data
            .into_iter()
            .map(|keyed| keyed.0.order_id)
            .collect();
        let field_ids: Vec<String> = resolve_page(&store, &ListQuery::resolve(&by_field, Order::SCHEMA))
            .unwrap()
            .data
            .into_iter()
            .map(|keyed| keyed.0.order_id)
            .collect();

        assert_eq!(alias_ids, field_ids);
        assert_eq!(alias_ids.first().map(String::as_str), Some("O-1"));
    }

    #[test]
    fn unknown_sort_falls_back_to_newest_first() {
        let store = store_with(3);
        let params = ListParams {
            sort: Some("nonsense".to_string()),
            ..ListParams::default()
        };
        let result = resolve_page(&store, &ListQuery::resolve(&params, Order::SCHEMA)).unwrap();
        let ids: Vec<&str> = result.data.iter().map(|keyed| keyed.0.key()).collect();
        assert_eq!(ids, vec!["O-3", "O-2", "O-1"]);
    }

    #[test]
    fn resolve_page_leaves_the_store_untouched() {
        let store = store_with(5);
        resolve_page(&store, &query("1", "2")).unwrap();
        assert_eq!(store.count(&super::Filter::all()).unwrap(), 5);
    }
}
