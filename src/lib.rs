pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod query;
pub mod seed;
pub mod state;
pub mod store;
