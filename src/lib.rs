pub mod config;
pub mod convert;
pub mod currency_provider;
pub mod log;
pub mod providers;

use anyhow::Result;
use tracing::{debug, info};

pub async fn run(config_path: Option<&str>) -> Result<()> {
    info!("Currency Converter starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let base_url = config
        .providers
        .exchange_rate_api
        .as_ref()
        .map_or("https://api.exchangerate-api.com", |p| &p.base_url);
    let provider = providers::exchange_rate_api::ExchangeRateApiProvider::new(base_url);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    convert::run(&provider, &mut stdin.lock(), &mut stdout.lock()).await
}
