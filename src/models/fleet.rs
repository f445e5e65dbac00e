use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::schema::{Direction, Entity, EntitySchema, FieldValue};

const FLEET_SCHEMA: EntitySchema = EntitySchema {
    name: "fleet",
    business_key: "vehicleId",
    searchable: &["vehicleId", "driver", "location"],
    sortable: &[
        "vehicleId",
        "status",
        "location",
        "latitude",
        "longitude",
        "driver",
        "load",
        "createdAt",
        "updatedAt",
    ],
    default_direction: Direction::Asc,
    default_sort: None,
    default_page_size: 5,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetItem {
    pub vehicle_id: String,
    pub status: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub driver: String,
    pub load: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetItemDraft {
    #[serde(alias = "id")]
    pub vehicle_id: String,
    pub status: String,
    pub location: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub driver: String,
    #[serde(default)]
    pub load: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetItemPatch {
    pub status: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub driver: Option<String>,
    pub load: Option<String>,
}

impl Entity for FleetItem {
    type Draft = FleetItemDraft;
    type Patch = FleetItemPatch;

    const SCHEMA: &'static EntitySchema = &FLEET_SCHEMA;

    fn key(&self) -> &str {
        &self.vehicle_id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "vehicleId" => FieldValue::Text(&self.vehicle_id),
            "status" => FieldValue::Text(&self.status),
            "location" => FieldValue::Text(&self.location),
            "latitude" => FieldValue::Float(self.latitude),
            "longitude" => FieldValue::Float(self.longitude),
            "driver" => FieldValue::Text(&self.driver),
            "load" => FieldValue::Text(&self.load),
            "createdAt" => FieldValue::Time(self.created_at),
            "updatedAt" => FieldValue::Time(self.updated_at),
            _ => return None,
        };
        Some(value)
    }

    // Missing coordinates are stored as 0.0 so every item can be placed on the map.
    fn from_draft(draft: FleetItemDraft, now: DateTime<Utc>) -> Self {
        Self {
            vehicle_id: draft.vehicle_id,
            status: draft.status,
            location: draft.location,
            latitude: draft.latitude.unwrap_or(0.0),
            longitude: draft.longitude.unwrap_or(0.0),
            driver: draft.driver,
            load: draft.load,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: FleetItemPatch, now: DateTime<Utc>) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(latitude) = patch.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = patch.longitude {
            self.longitude = longitude;
        }
        if let Some(driver) = patch.driver {
            self.driver = driver;
        }
        if let Some(load) = patch.load {
            self.load = load;
        }
        self.updated_at = now;
    }

    fn set_status(&mut self, status: &str, now: DateTime<Utc>) {
        self.status = status.to_string();
        self.updated_at = now;
    }
}
