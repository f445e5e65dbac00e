use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::schema::{Direction, Entity, EntitySchema, FieldValue};

const PAYOUT_SCHEMA: EntitySchema = EntitySchema {
    name: "payouts",
    business_key: "payoutId",
    searchable: &["driver", "payoutId"],
    sortable: &[
        "payoutId",
        "driver",
        "amount",
        "status",
        "requestDate",
        "bank",
        "payoutType",
        "createdAt",
        "updatedAt",
    ],
    default_direction: Direction::Asc,
    default_sort: None,
    default_page_size: 10,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    pub payout_id: String,
    pub driver: String,
    pub amount: String,
    pub status: String,
    pub request_date: String,
    pub bank: String,
    pub account_end: String,
    pub payout_type: String,
    pub wallet_total_balance: String,
    pub wallet_available_balance: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutDraft {
    #[serde(alias = "id")]
    pub payout_id: String,
    pub driver: String,
    pub amount: String,
    pub status: String,
    pub request_date: String,
    pub bank: String,
    pub account_end: String,
    pub payout_type: String,
    pub wallet_total_balance: String,
    pub wallet_available_balance: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutPatch {
    pub driver: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
    pub request_date: Option<String>,
    pub bank: Option<String>,
    pub account_end: Option<String>,
    pub payout_type: Option<String>,
    pub wallet_total_balance: Option<String>,
    pub wallet_available_balance: Option<String>,
}

impl Entity for Payout {
    type Draft = PayoutDraft;
    type Patch = PayoutPatch;

    const SCHEMA: &'static EntitySchema = &PAYOUT_SCHEMA;

    fn key(&self) -> &str {
        &self.payout_id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "payoutId" => FieldValue::Text(&self.payout_id),
            "driver" => FieldValue::Text(&self.driver),
            "amount" => FieldValue::Text(&self.amount),
            "status" => FieldValue::Text(&self.status),
            "requestDate" => FieldValue::Text(&self.request_date),
            "bank" => FieldValue::Text(&self.bank),
            "accountEnd" => FieldValue::Text(&self.account_end),
            "payoutType" => FieldValue::Text(&self.payout_type),
            "walletTotalBalance" => FieldValue::Text(&self.wallet_total_balance),
            "walletAvailableBalance" => FieldValue::Text(&self.wallet_available_balance),
            "createdAt" => FieldValue::Time(self.created_at),
            "updatedAt" => FieldValue::Time(self.updated_at),
            _ => return None,
        };
        Some(value)
    }

    fn from_draft(draft: PayoutDraft, now: DateTime<Utc>) -> Self {
        Self {
            payout_id: draft.payout_id,
            driver: draft.driver,
            amount: draft.amount,
            status: draft.status,
            request_date: draft.request_date,
            bank: draft.bank,
            account_end: draft.account_end,
            payout_type: draft.payout_type,
            wallet_total_balance: draft.wallet_total_balance,
            wallet_available_balance: draft.wallet_available_balance,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: PayoutPatch, now: DateTime<Utc>) {
        if let Some(driver) = patch.driver {
            self.driver = driver;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(request_date) = patch.request_date {
            self.request_date = request_date;
        }
        if let Some(bank) = patch.bank {
            self.bank = bank;
        }
        if let Some(account_end) = patch.account_end {
            self.account_end = account_end;
        }
        if let Some(payout_type) = patch.payout_type {
            self.payout_type = payout_type;
        }
        if let Some(total) = patch.wallet_total_balance {
            self.wallet_total_balance = total;
        }
        if let Some(available) = patch.wallet_available_balance {
            self.wallet_available_balance = available;
        }
        self.updated_at = now;
    }

    fn set_status(&mut self, status: &str, now: DateTime<Utc>) {
        self.status = status.to_string();
        self.updated_at = now;
    }
}
