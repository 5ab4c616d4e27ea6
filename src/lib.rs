pub mod aggregator;
pub mod api;
pub mod config;
pub mod fetch_error;
pub mod fetcher;
pub mod marine_fetcher;
pub mod models;
pub mod registry;
pub mod scorers;
pub mod services;
pub mod utils;
