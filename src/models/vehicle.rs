use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::schema::{Direction, Entity, EntitySchema, FieldValue};

const VEHICLE_SCHEMA: EntitySchema = EntitySchema {
    name: "vehicles",
    business_key: "vehicleId",
    searchable: &["vehicleId", "model", "type", "currentDriver"],
    sortable: &[
        "vehicleId",
        "type",
        "model",
        "capacity",
        "fuelLevel",
        "lastMaintenance",
        "status",
        "vin",
        "year",
        "mileage",
        "engineStatus",
        "tirePressure",
        "currentDriver",
        "currentLocation",
        "createdAt",
        "updatedAt",
    ],
    default_direction: Direction::Asc,
    default_sort: None,
    default_page_size: 5,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub vehicle_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub model: String,
    pub capacity: String,
    pub fuel_level: f64,
    pub last_maintenance: Option<String>,
    pub status: String,
    pub vin: String,
    pub year: i32,
    pub mileage: i64,
    pub engine_status: String,
    pub tire_pressure: String,
    pub current_driver: Option<String>,
    pub current_location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDraft {
    #[serde(alias = "id")]
    pub vehicle_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub model: String,
    pub capacity: String,
    #[serde(default)]
    pub fuel_level: f64,
    pub last_maintenance: Option<String>,
    pub status: String,
    pub vin: String,
    pub year: i32,
    #[serde(default)]
    pub mileage: i64,
    pub engine_status: String,
    pub tire_pressure: String,
    pub current_driver: Option<String>,
    pub current_location: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePatch {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub model: Option<String>,
    pub capacity: Option<String>,
    pub fuel_level: Option<f64>,
    pub last_maintenance: Option<String>,
    pub status: Option<String>,
    pub vin: Option<String>,
    pub year: Option<i32>,
    pub mileage: Option<i64>,
    pub engine_status: Option<String>,
    pub tire_pressure: Option<String>,
    pub current_driver: Option<String>,
    pub current_location: Option<String>,
}

impl Entity for Vehicle {
    type Draft = VehicleDraft;
    type Patch = VehiclePatch;

    const SCHEMA: &'static EntitySchema = &VEHICLE_SCHEMA;

    fn key(&self) -> &str {
        &self.vehicle_id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "vehicleId" => FieldValue::Text(&self.vehicle_id),
            "type" => FieldValue::Text(&self.kind),
            "model" => FieldValue::Text(&self.model),
            "capacity" => FieldValue::Text(&self.capacity),
            "fuelLevel" => FieldValue::Float(self.fuel_level),
            "lastMaintenance" => FieldValue::Text(self.last_maintenance.as_deref()?),
            "status" => FieldValue::Text(&self.status),
            "vin" => FieldValue::Text(&self.vin),
            "year" => FieldValue::Int(i64::from(self.year)),
            "mileage" => FieldValue::Int(self.mileage),
            "engineStatus" => FieldValue::Text(&self.engine_status),
            "tirePressure" => FieldValue::Text(&self.tire_pressure),
            "currentDriver" => FieldValue::Text(self.current_driver.as_deref()?),
            "currentLocation" => FieldValue::Text(self.current_location.as_deref()?),
            "createdAt" => FieldValue::Time(self.created_at),
            "updatedAt" => FieldValue::Time(self.updated_at),
            _ => return None,
        };
        Some(value)
    }

    fn from_draft(draft: VehicleDraft, now: DateTime<Utc>) -> Self {
        Self {
            vehicle_id: draft.vehicle_id,
            kind: draft.kind,
            model: draft.model,
            capacity: draft.capacity,
            fuel_level: draft.fuel_level,
            last_maintenance: draft.last_maintenance,
            status: draft.status,
            vin: draft.vin,
            year: draft.year,
            mileage: draft.mileage,
            engine_status: draft.engine_status,
            tire_pressure: draft.tire_pressure,
            current_driver: draft.current_driver,
            current_location: draft.current_location,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: VehiclePatch, now: DateTime<Utc>) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(model) = patch.model {
            self.model = model;
        }
        if let Some(capacity) = patch.capacity {
            self.capacity = capacity;
        }
        if let Some(fuel_level) = patch.fuel_level {
            self.fuel_level = fuel_level;
        }
        if patch.last_maintenance.is_some() {
            self.last_maintenance = patch.last_maintenance;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(vin) = patch.vin {
            self.vin = vin;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(mileage) = patch.mileage {
            self.mileage = mileage;
        }
        if let Some(engine_status) = patch.engine_status {
            self.engine_status = engine_status;
        }
        if let Some(tire_pressure) = patch.tire_pressure {
            self.tire_pressure = tire_pressure;
        }
        if patch.current_driver.is_some() {
            self.current_driver = patch.current_driver;
        }
        if patch.current_location.is_some() {
            self.current_location = patch.current_location;
        }
        self.updated_at = now;
    }

    fn set_status(&mut self, status: &str, now: DateTime<Utc>) {
        self.status = status.to_string();
        self.updated_at = now;
    }
}
