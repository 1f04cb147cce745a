use axum::extract::FromRef;

use crate::config::Config;

/// Per-process state handed to every handler: the loaded configuration and
/// one shared HTTP client for the weather provider. All report computation
/// is request-scoped; nothing here is mutated after startup.
#[derive(Clone, Debug)]
pub struct SharedState {
    pub config: Config,
    pub http: reqwest::Client,
}

impl SharedState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

/// Lets handlers that only need the configuration extract `State<Config>`.
impl FromRef<SharedState> for Config {
    fn from_ref(state: &SharedState) -> Config {
        state.config.clone()
    }
}
