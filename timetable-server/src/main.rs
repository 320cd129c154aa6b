use std::error::Error;
use std::process::ExitCode;

use chrono::Local;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transit_timetable::config::SystemConfig;
use transit_timetable::dto::{ArrivalPredictionDto, StopPredictionDto};
use transit_timetable::prediction::TimetableService;
use transit_timetable::repository::InMemoryRepository;

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = SystemConfig::from_env()?;
    info!(
        stops = config.stop_count,
        routes = config.route_count,
        "generating synthetic bus system"
    );

    let repository = InMemoryRepository::synthetic(config.stop_count, config.route_count);
    let service = TimetableService::new(repository)?;

    let now = Local::now();
    let count = config.prediction.predictions_per_route;

    let json = match config.stop {
        Some(stop_id) => {
            let predictions = service.get_stop_predictions(stop_id, count, &now)?;
            let dtos: Vec<ArrivalPredictionDto> = predictions
                .iter()
                .map(ArrivalPredictionDto::from_prediction)
                .collect();
            serde_json::to_string_pretty(&dtos)?
        }
        None => {
            let predictions = service.get_all_stop_predictions(count, &now)?;
            let dtos: Vec<StopPredictionDto> = predictions
                .iter()
                .map(StopPredictionDto::from_prediction)
                .collect();
            serde_json::to_string_pretty(&dtos)?
        }
    };

    println!("{json}");
    Ok(())
}
