use std::{error::Error, fs::File, io::BufReader, sync::Arc};

use caloriecare_report::{replay, Config, DayLog};
use caloriecare_tracker::SystemClock;
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;
    let config = Config::load();

    info!("Reading day log from {}", config.day_log_path);
    let file = File::open(&config.day_log_path)?;
    let day_log: DayLog = serde_json::from_reader(BufReader::new(file))?;

    let report = replay(&day_log, Arc::new(SystemClock))?;
    report.log();

    Ok(())
}
