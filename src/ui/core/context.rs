use crate::{api::CampaignSource, config::Config, logger::Logger};
use std::sync::Arc;

/// Services shared by the UI, built once at startup
#[derive(Clone)]
pub struct AppContext {
    pub source: Arc<dyn CampaignSource>,
    pub config: Config,
    pub logger: Logger,
}

impl AppContext {
    pub fn new(source: Arc<dyn CampaignSource>, config: Config, logger: Logger) -> Self {
        Self { source, config, logger }
    }
}
