use crate::config::Config;
use crate::services::{PagespeedClient, ReportStore};

pub struct AppState {
    pub config: Config,
    pub client: PagespeedClient,
    pub store: ReportStore,
}

impl AppState {
    pub fn new(config: Config, client: PagespeedClient) -> Self {
        Self {
            config,
            client,
            store: ReportStore::new(),
        }
    }
}
