// Library for tests to access modules

pub mod aggregation;
pub mod cleaning;
pub mod config;
pub mod error;
pub mod filter;
pub mod locator;
pub mod models;
pub mod report;
pub mod routes;
pub mod sheet;
pub mod version;
