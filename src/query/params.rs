use crate::models::schema::{Direction, EntitySchema};
use crate::query::filter::{Filter, SortOrder};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl ListParams {
    // Repeated keys keep their first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "pageSize" => &mut params.page_size,
                "search" => &mut params.search,
                "sort" => &mut params.sort,
                "direction" => &mut params.direction,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        params
    }
}

#[derive(Debug, Clone)]
pub struct ListQuery {
    pub page: u64,
    pub page_size: u64,
    pub filter: Filter,
    pub sort: SortOrder,
}

impl ListQuery {
    pub fn resolve(params: &ListParams, schema: &EntitySchema) -> Self {
        let page = parse_positive(params.page.as_deref()).unwrap_or(1);
        let page_size =
            parse_positive(params.page_size.as_deref()).unwrap_or(schema.default_page_size);

        let search = params.search.as_deref().unwrap_or_default();
        let filter = Filter::search(search, schema.searchable);

        let direction = params
            .direction
            .as_deref()
            .and_then(Direction::parse)
            .unwrap_or(schema.default_direction);

        let requested = params.sort.as_deref().and_then(|raw| schema.sort_field(raw));
        let sort = match requested.or(schema.default_sort) {
            Some(field) => SortOrder { field, direction },
            None => SortOrder::newest_first(),
        };

        Self {
            page,
            page_size,
            filter,
            sort,
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

// Zero, negative and non-numeric input all count as absent.
fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
}
