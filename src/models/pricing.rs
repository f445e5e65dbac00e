use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::schema::{Direction, Entity, EntitySchema, FieldValue};

const PRICING_SCHEMA: EntitySchema = EntitySchema {
    name: "pricing",
    business_key: "id",
    searchable: &["name", "region"],
    sortable: &[
        "id",
        "name",
        "type",
        "value",
        "region",
        "status",
        "lastUpdated",
        "createdAt",
        "updatedAt",
    ],
    default_direction: Direction::Asc,
    default_sort: None,
    default_page_size: 10,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRule {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub region: String,
    pub status: String,
    pub last_updated: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRuleDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub region: String,
    pub status: String,
    pub last_updated: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRulePatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub value: Option<String>,
    pub region: Option<String>,
    pub status: Option<String>,
    pub last_updated: Option<String>,
}

impl Entity for PricingRule {
    type Draft = PricingRuleDraft;
    type Patch = PricingRulePatch;

    const SCHEMA: &'static EntitySchema = &PRICING_SCHEMA;

    fn key(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Text(&self.id),
            "name" => FieldValue::Text(&self.name),
            "type" => FieldValue::Text(&self.kind),
            "value" => FieldValue::Text(&self.value),
            "region" => FieldValue::Text(&self.region),
            "status" => FieldValue::Text(&self.status),
            "lastUpdated" => FieldValue::Text(&self.last_updated),
            "createdAt" => FieldValue::Time(self.created_at),
            "updatedAt" => FieldValue::Time(self.updated_at),
            _ => return None,
        };
        Some(value)
    }

    fn from_draft(draft: PricingRuleDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            kind: draft.kind,
            value: draft.value,
            region: draft.region,
            status: draft.status,
            last_updated: draft.last_updated,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: PricingRulePatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
        if let Some(region) = patch.region {
            self.region = region;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(last_updated) = patch.last_updated {
            self.last_updated = last_updated;
        }
        self.updated_at = now;
    }

    fn set_status(&mut self, status: &str, now: DateTime<Utc>) {
        self.status = status.to_string();
        self.updated_at = now;
    }
}
