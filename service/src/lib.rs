use sse::Manager as StreamManager;
use std::sync::Arc;
use webhook::{Dispatcher, Registry as WebhookRegistry};

pub mod broadcast;
pub mod config;
pub mod logging;

pub use config::Config;

// Service-level state shared by the HTTP front door and the control task.
// Needs to implement Clone to be able to be passed into Router as State
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub stream_manager: Arc<StreamManager>,
    pub webhook_registry: Arc<WebhookRegistry>,
    pub webhook_dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Build the shared state. The only fallible step is constructing the
    /// shared webhook HTTP client.
    pub fn new(config: Config) -> domain::Result<Self> {
        Ok(Self {
            config,
            stream_manager: Arc::new(StreamManager::new()),
            webhook_registry: Arc::new(WebhookRegistry::new()),
            webhook_dispatcher: Arc::new(Dispatcher::new()?),
        })
    }
}
