use crate::commands::base_commands::Commands;
use crate::services::config::Settings;
use crate::services::csv_import::load_history_from_csv_file;
use crate::services::simulation::run_forecast;

pub fn forecast_command(cmd: Commands) {
    if let Commands::Forecast { config } = cmd {
        let settings = match Settings::from_yaml_file(&config) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Failed to load settings: {e}");
                std::process::exit(1);
            }
        };

        let data_file = &settings.source_data.data_file;
        let items = settings.projections.future_event_count;
        let trials = settings.projections.simulations;

        println!("Reading from {data_file}");
        println!("Projecting {items} items using {trials} simulations");

        let history = match load_history_from_csv_file(data_file) {
            Ok(history) => history,
            Err(e) => {
                eprintln!("Failed to load history data: {e}");
                std::process::exit(1);
            }
        };

        let forecast = match run_forecast(&history, items, trials) {
            Ok(forecast) => forecast,
            Err(e) => {
                eprintln!("Failed to run forecast: {e}");
                std::process::exit(1);
            }
        };

        println!("Monte Carlo Simulation Results:");
        println!("50th percentile: {}", forecast.report.p50.date);
        println!("85th percentile: {}", forecast.report.p85.date);
        println!("95th percentile: {}", forecast.report.p95.date);

        if let Some(percentile) = settings.projections.percentile {
            if let Some(date) = forecast.dates.date_for(percentile) {
                println!("Target {percentile}th percentile: {date}");
            }
        }
    }
}
