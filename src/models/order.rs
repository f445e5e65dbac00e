use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::schema::{Direction, Entity, EntitySchema, FieldValue, CREATED_AT};

pub const DEFAULT_SERVICE_TYPE: &str = "Standard Delivery";

const ORDER_SCHEMA: EntitySchema = EntitySchema {
    name: "orders",
    business_key: "orderId",
    searchable: &["orderId", "customer", "destination"],
    sortable: &[
        "orderId",
        "customer",
        "destination",
        "status",
        "priority",
        "serviceType",
        "createdAt",
        "updatedAt",
    ],
    default_direction: Direction::Desc,
    default_sort: Some(CREATED_AT),
    default_page_size: 5,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub customer: String,
    pub destination: String,
    pub status: String,
    pub priority: String,
    pub service_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    #[serde(alias = "id")]
    pub order_id: String,
    pub customer: String,
    pub destination: String,
    pub status: String,
    pub priority: String,
    #[serde(default)]
    pub service_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    pub customer: Option<String>,
    pub destination: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub service_type: Option<String>,
}

impl Entity for Order {
    type Draft = OrderDraft;
    type Patch = OrderPatch;

    const SCHEMA: &'static EntitySchema = &ORDER_SCHEMA;

    fn key(&self) -> &str {
        &self.order_id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "orderId" => FieldValue::Text(&self.order_id),
            "customer" => FieldValue::Text(&self.customer),
            "destination" => FieldValue::Text(&self.destination),
            "status" => FieldValue::Text(&self.status),
            "priority" => FieldValue::Text(&self.priority),
            "serviceType" => FieldValue::Text(&self.service_type),
            "createdAt" => FieldValue::Time(self.created_at),
            "updatedAt" => FieldValue::Time(self.updated_at),
            _ => return None,
        };
        Some(value)
    }

    fn from_draft(draft: OrderDraft, now: DateTime<Utc>) -> Self {
        Self {
            order_id: draft.order_id,
            customer: draft.customer,
            destination: draft.destination,
            status: draft.status,
            priority: draft.priority,
            service_type: draft
                .service_type
                .unwrap_or_else(|| DEFAULT_SERVICE_TYPE.to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: OrderPatch, now: DateTime<Utc>) {
        if let Some(customer) = patch.customer {
            self.customer = customer;
        }
        if let Some(destination) = patch.destination {
            self.destination = destination;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(service_type) = patch.service_type {
            self.service_type = service_type;
        }
        self.updated_at = now;
    }

    fn set_status(&mut self, status: &str, now: DateTime<Utc>) {
        self.status = status.to_string();
        self.updated_at = now;
    }
}
