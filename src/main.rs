use std::process;

use destination_images::{Batch, ConfigError, Settings, UReqFetcher};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("[MAIN] {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let settings = Settings::from_env()?;
    let catalog = settings.load_catalog()?;

    log::info!("[MAIN] Fetching images for {} destinations", catalog.len());

    let fetcher = UReqFetcher::new();

    let report = Batch::new(&fetcher, &settings)?.run(&catalog);

    report.log();

    Ok(())
}
