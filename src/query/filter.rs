use std::cmp::Ordering;

use crate::models::schema::{Direction, Entity, CREATED_AT};

#[derive(Debug, Clone, Default)]
pub struct Filter {
    term: Option<String>,
    fields: &'static [&'static str],
}

impl Filter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn search(term: &str, fields: &'static [&'static str]) -> Self {
        if term.is_empty() {
            return Self::all();
        }

        Self {
            term: Some(term.to_string()),
            fields,
        }
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn matches<E: Entity>(&self, record: &E) -> bool {
        let Some(term) = self.term.as_deref() else {
            return true;
        };

        self.fields.iter().any(|name| {
            record
                .field(name)
                .and_then(|value| value.as_text())
                .is_some_and(|text| text.contains(term))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: &'static str,
    pub direction: Direction,
}

impl SortOrder {
    pub fn newest_first() -> Self {
        Self {
            field: CREATED_AT,
            direction: Direction::Desc,
        }
    }

    /// Ties fall back to the business key ascending. Records missing the
    /// field sort first.
    pub fn compare<E: Entity>(&self, a: &E, b: &E) -> Ordering {
        let primary = match (a.field(self.field), b.field(self.field)) {
            (Some(left), Some(right)) => left.compare(&right),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };

        let primary = match self.direction {
            Direction::Asc => primary,
            Direction::Desc => primary.reverse(),
        };

        primary.then_with(|| a.key().cmp(b.key()))
    }
}
