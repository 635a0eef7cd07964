use anyhow::{Context, Result};
use campaign_dashboard::{api::HttpCampaignClient, config::Config, logger::Logger, ui};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let mut config = Config::load()?;
    config.apply_env_overrides()?;

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.log(format!("Using campaign API at {}", config.api.base_url));

    let client = HttpCampaignClient::new(&config.api).context("Failed to create the API client")?;
    let context = ui::core::AppContext::new(Arc::new(client), config, logger);

    // Run the TUI application
    ui::run_app(context).await?;

    Ok(())
}
