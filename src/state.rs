use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::models::User;
use crate::zdk::ZdkClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub zdk: Arc<ZdkClient>,
    pub user: Arc<User>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let zdk = ZdkClient::new(&config)?;

        Ok(Self {
            config: Arc::new(config),
            zdk: Arc::new(zdk),
            user: Arc::new(User::generate()),
        })
    }
}
