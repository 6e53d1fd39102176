pub mod config;
pub mod csv_import;
pub mod forecast_types;
pub mod histogram;
pub mod percentiles;
pub mod simulation;
