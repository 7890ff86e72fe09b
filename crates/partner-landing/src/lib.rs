pub mod analytics;
pub mod config;
pub mod error;
pub mod leads;
pub mod partners;
pub mod telemetry;
