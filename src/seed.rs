use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::analytics::{MonthlyPerformance, Stat, StatusDistribution};
use crate::models::driver::{Driver, DriverDraft};
use crate::models::fleet::{FleetItem, FleetItemDraft};
use crate::models::order::{Order, OrderDraft};
use crate::models::payout::{Payout, PayoutDraft};
use crate::models::pricing::{PricingRule, PricingRuleDraft};
use crate::models::schema::Entity;
use crate::models::vehicle::{Vehicle, VehicleDraft};
use crate::state::{store_of, AppState, StoreFor};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedDocument {
    pub orders: Vec<OrderDraft>,
    pub drivers: Vec<DriverDraft>,
    pub vehicles: Vec<VehicleDraft>,
    #[serde(alias = "live_fleet")]
    pub live_fleet: Vec<FleetItemDraft>,
    pub payouts: Vec<PayoutDraft>,
    pub pricing_rules: Vec<PricingRuleDraft>,
    pub stats: Vec<Stat>,
    pub analytics: AnalyticsSeed,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsSeed {
    pub monthly_performance: Vec<MonthlyPerformance>,
    pub status_distribution: Vec<StatusDistribution>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub orders: usize,
    pub drivers: usize,
    pub vehicles: usize,
    pub fleet: usize,
    pub payouts: usize,
    pub pricing: usize,
}

pub fn load(path: &Path) -> Result<Option<SeedDocument>, AppError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "seed file not found; starting with empty stores");
            return Ok(None);
        }
        Err(err) => {
            return Err(AppError::Config(format!(
                "failed to read seed file {}: {err}",
                path.display()
            )));
        }
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|err| AppError::Config(format!("invalid seed file {}: {err}", path.display())))
}

pub fn apply(state: &mut AppState, document: SeedDocument) -> Result<SeedReport, AppError> {
    let report = SeedReport {
        orders: insert_all::<Order>(state, document.orders)?,
        drivers: insert_all::<Driver>(state, document.drivers)?,
        vehicles: insert_all::<Vehicle>(state, document.vehicles)?,
        fleet: insert_all::<FleetItem>(state, document.live_fleet)?,
        payouts: insert_all::<Payout>(state, document.payouts)?,
        pricing: insert_all::<PricingRule>(state, document.pricing_rules)?,
    };

    state.analytics.stats = document.stats;
    for entry in document.analytics.monthly_performance {
        state.analytics.add_monthly(entry);
    }
    for entry in document.analytics.status_distribution {
        state.analytics.add_status(entry);
    }

    info!(
        orders = report.orders,
        drivers = report.drivers,
        vehicles = report.vehicles,
        fleet = report.fleet,
        payouts = report.payouts,
        pricing = report.pricing,
        "seed applied"
    );

    Ok(report)
}

fn insert_all<E>(state: &AppState, drafts: Vec<E::Draft>) -> Result<usize, AppError>
where
    E: Entity,
    AppState: StoreFor<E>,
{
    let store = store_of::<E>(state);
    let mut inserted = 0;

    for draft in drafts {
        let record = E::from_draft(draft, Utc::now());
        if record.key().trim().is_empty() {
            warn!(entity = E::SCHEMA.name, "skipping seed record without a key");
            continue;
        }
        if store.insert_if_absent(record)? {
            inserted += 1;
        }
    }

    Ok(inserted)
}
