use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const CREATED_AT: &str = "createdAt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(Direction::Asc),
            "desc" => Some(Direction::Desc),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct EntitySchema {
    pub name: &'static str,
    pub business_key: &'static str,
    pub searchable: &'static [&'static str],
    pub sortable: &'static [&'static str],
    pub default_direction: Direction,
    // Field a bare `direction` applies to. `None` pins `createdAt desc`.
    pub default_sort: Option<&'static str>,
    pub default_page_size: u64,
}

impl EntitySchema {
    pub fn sort_field(&self, requested: &str) -> Option<&'static str> {
        let requested = requested.trim();
        if requested.is_empty() {
            return None;
        }

        if requested == "id" {
            return Some(self.business_key);
        }

        self.sortable
            .iter()
            .copied()
            .find(|field| *field == requested)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Int(i64),
    Float(f64),
    Time(DateTime<Utc>),
}

impl<'a> FieldValue<'a> {
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Float(a), FieldValue::Float(b)) => a.total_cmp(b),
            (FieldValue::Int(a), FieldValue::Float(b)) => (*a as f64).total_cmp(b),
            (FieldValue::Float(a), FieldValue::Int(b)) => a.total_cmp(&(*b as f64)),
            (FieldValue::Time(a), FieldValue::Time(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Int(_) | FieldValue::Float(_) => 0,
            FieldValue::Time(_) => 1,
            FieldValue::Text(_) => 2,
        }
    }
}

pub trait Entity: Clone + Serialize + Send + Sync + 'static {
    /// Body accepted on create and in seed documents.
    type Draft: DeserializeOwned + Send + 'static;
    /// Body accepted on single update; absent fields are left untouched.
    type Patch: DeserializeOwned + Send + 'static;

    const SCHEMA: &'static EntitySchema;

    fn key(&self) -> &str;

    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    fn from_draft(draft: Self::Draft, now: DateTime<Utc>) -> Self;

    fn apply_patch(&mut self, patch: Self::Patch, now: DateTime<Utc>);

    fn set_status(&mut self, status: &str, now: DateTime<Utc>);
}
