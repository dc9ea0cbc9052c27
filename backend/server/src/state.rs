use std::sync::Arc;

use tokio::sync::Mutex;

use super::{catalog::Catalog, config::Config};

pub struct State {
    pub config: Config,
    pub catalog: Mutex<Catalog>,
}

impl State {
    pub fn new(config: Config) -> Arc<Self> {
        Self::with_catalog(config, Catalog::seeded())
    }

    pub fn with_catalog(config: Config, catalog: Catalog) -> Arc<Self> {
        Arc::new(Self {
            config,
            catalog: Mutex::new(catalog),
        })
    }
}
