use std::{error::Error, path::Path, process};

use log::{error, info};
use ntp_datagen::config::*;
use ntp_util::logging;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_logger("ntp")?;

    let config: Config;
    match load_config(Path::new("./datagen.json")) {
        Ok(cfg) => config = cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            logging::cleanup();
            process::exit(1);
        }
    }

    info!("Generating resources for {}", config.mod_id);
    let result = ntp_datagen::run(&config);
    if let Err(e) = &result {
        error!("Failed to generate resources: {}", e);
    }

    logging::cleanup();

    if result.is_err() {
        process::exit(1);
    }

    Ok(())
}
