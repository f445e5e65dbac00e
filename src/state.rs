use std::sync::Arc;

use crate::models::analytics::Analytics;
use crate::models::driver::Driver;
use crate::models::fleet::FleetItem;
use crate::models::order::Order;
use crate::models::payout::Payout;
use crate::models::pricing::PricingRule;
use crate::models::schema::Entity;
use crate::models::vehicle::Vehicle;
use crate::observability::metrics::Metrics;
use crate::query::Filter;
use crate::store::{MemoryStore, RecordStore, StoreError};

pub struct AppState {
    pub orders: Arc<dyn RecordStore<Order>>,
    pub drivers: Arc<dyn RecordStore<Driver>>,
    pub vehicles: Arc<dyn RecordStore<Vehicle>>,
    pub fleet: Arc<dyn RecordStore<FleetItem>>,
    pub payouts: Arc<dyn RecordStore<Payout>>,
    pub pricing: Arc<dyn RecordStore<PricingRule>>,
    pub analytics: Analytics,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(MemoryStore::<Order>::new()),
            drivers: Arc::new(MemoryStore::<Driver>::new()),
            vehicles: Arc::new(MemoryStore::<Vehicle>::new()),
            fleet: Arc::new(MemoryStore::<FleetItem>::new()),
            payouts: Arc::new(MemoryStore::<Payout>::new()),
            pricing: Arc::new(MemoryStore::<PricingRule>::new()),
            analytics: Analytics::default(),
            metrics: Metrics::new(),
        }
    }

    pub fn record_counts(&self) -> Result<Vec<(&'static str, u64)>, StoreError> {
        Ok(vec![
            count_of::<Order>(self)?,
            count_of::<Driver>(self)?,
            count_of::<Vehicle>(self)?,
            count_of::<FleetItem>(self)?,
            count_of::<Payout>(self)?,
            count_of::<PricingRule>(self)?,
        ])
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub trait StoreFor<E: Entity> {
    fn store(&self) -> &dyn RecordStore<E>;
}

impl StoreFor<Order> for AppState {
    fn store(&self) -> &dyn RecordStore<Order> {
        self.orders.as_ref()
    }
}

impl StoreFor<Driver> for AppState {
    fn store(&self) -> &dyn RecordStore<Driver> {
        self.drivers.as_ref()
    }
}

impl StoreFor<Vehicle> for AppState {
    fn store(&self) -> &dyn RecordStore<Vehicle> {
        self.vehicles.as_ref()
    }
}

impl StoreFor<FleetItem> for AppState {
    fn store(&self) -> &dyn RecordStore<FleetItem> {
        self.fleet.as_ref()
    }
}

impl StoreFor<Payout> for AppState {
    fn store(&self) -> &dyn RecordStore<Payout> {
        self.payouts.as_ref()
    }
}

impl StoreFor<PricingRule> for AppState {
    fn store(&self) -> &dyn RecordStore<PricingRule> {
        self.pricing.as_ref()
    }
}

pub fn store_of<E>(state: &AppState) -> &dyn RecordStore<E>
where
    E: Entity,
    AppState: StoreFor<E>,
{
    <AppState as StoreFor<E>>::store(state)
}

fn count_of<E>(state: &AppState) -> Result<(&'static str, u64), StoreError>
where
    E: Entity,
    AppState: StoreFor<E>,
{
    let total = store_of::<E>(state).count(&Filter::all())?;
    Ok((E::SCHEMA.name, total))
}
