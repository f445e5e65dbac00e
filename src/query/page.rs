use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::models::schema::Entity;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: u64, page: u64, page_size: u64) -> Self {
        Self {
            data,
            total,
            page,
            page_size,
            total_pages: total.div_ceil(page_size.max(1)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Keyed<E>(pub E);

impl<E: Entity> Serialize for Keyed<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = match serde_json::to_value(&self.0).map_err(S::Error::custom)? {
            Value::Object(fields) => fields,
            other => {
                return Err(S::Error::custom(format!(
                    "{} record serialized to {other}, expected an object",
                    E::SCHEMA.name
                )));
            }
        };

        let mut map = serializer.serialize_map(Some(fields.len() + 1))?;
        map.serialize_entry("id", self.0.key())?;
        for (name, value) in fields.iter().filter(|(name, _)| name.as_str() != "id") {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
