use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::schema::{Direction, Entity, EntitySchema, FieldValue};

const DRIVER_SCHEMA: EntitySchema = EntitySchema {
    name: "drivers",
    business_key: "driverId",
    searchable: &["name", "driverId", "status"],
    sortable: &[
        "driverId",
        "name",
        "status",
        "rating",
        "deliveries",
        "experience",
        "contact",
        "createdAt",
        "updatedAt",
    ],
    default_direction: Direction::Asc,
    default_sort: None,
    default_page_size: 5,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub driver_id: String,
    pub name: String,
    pub status: String,
    pub rating: f64,
    pub deliveries: i64,
    pub experience: String,
    pub contact: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDraft {
    #[serde(alias = "id")]
    pub driver_id: String,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub deliveries: i64,
    pub experience: String,
    pub contact: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPatch {
    pub name: Option<String>,
    pub status: Option<String>,
    pub rating: Option<f64>,
    pub deliveries: Option<i64>,
    pub experience: Option<String>,
    pub contact: Option<String>,
    pub avatar: Option<String>,
}

impl Entity for Driver {
    type Draft = DriverDraft;
    type Patch = DriverPatch;

    const SCHEMA: &'static EntitySchema = &DRIVER_SCHEMA;

    fn key(&self) -> &str {
        &self.driver_id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "driverId" => FieldValue::Text(&self.driver_id),
            "name" => FieldValue::Text(&self.name),
            "status" => FieldValue::Text(&self.status),
            "rating" => FieldValue::Float(self.rating),
            "deliveries" => FieldValue::Int(self.deliveries),
            "experience" => FieldValue::Text(&self.experience),
            "contact" => FieldValue::Text(&self.contact),
            "avatar" => FieldValue::Text(self.avatar.as_deref()?),
            "createdAt" => FieldValue::Time(self.created_at),
            "updatedAt" => FieldValue::Time(self.updated_at),
            _ => return None,
        };
        Some(value)
    }

    fn from_draft(draft: DriverDraft, now: DateTime<Utc>) -> Self {
        Self {
            driver_id: draft.driver_id,
            name: draft.name,
            status: draft.status,
            rating: draft.rating,
            deliveries: draft.deliveries,
            experience: draft.experience,
            contact: draft.contact,
            avatar: draft.avatar,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: DriverPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(deliveries) = patch.deliveries {
            self.deliveries = deliveries;
        }
        if let Some(experience) = patch.experience {
            self.experience = experience;
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
        }
        if patch.avatar.is_some() {
            self.avatar = patch.avatar;
        }
        self.updated_at = now;
    }

    fn set_status(&mut self, status: &str, now: DateTime<Utc>) {
        self.status = status.to_string();
        self.updated_at = now;
    }
}
