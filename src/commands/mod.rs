pub mod base_commands;
pub mod forecast_cmd;
pub mod simulate_cmd;
