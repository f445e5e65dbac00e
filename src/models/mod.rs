pub mod analytics;
pub mod driver;
pub mod fleet;
pub mod order;
pub mod payout;
pub mod pricing;
pub mod schema;
pub mod vehicle;
