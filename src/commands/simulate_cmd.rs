use crate::commands::base_commands::Commands;
use crate::services::simulation::forecast_from_csv_file;

pub fn simulate_command(cmd: Commands) {
    if let Commands::Simulate {
        data,
        output,
        number_of_items,
        iterations,
        seed,
    } = cmd
    {
        let histogram_path = format!("{output}.png");
        let report = match forecast_from_csv_file(
            &data,
            number_of_items,
            iterations,
            seed,
            &histogram_path,
        ) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Failed to simulate completion dates: {e}");
                std::process::exit(1);
            }
        };

        let yaml = match serde_yaml::to_string(&report) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize forecast report: {e}");
                std::process::exit(1);
            }
        };

        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write forecast report: {e}");
            std::process::exit(1);
        }

        println!("Forecast for {number_of_items} items written to {output}");
        println!("Simulation histogram written to {histogram_path}");
    }
}
