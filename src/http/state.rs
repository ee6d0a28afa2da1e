use std::sync::Arc;

use crate::config::WebexConfig;
use crate::meetings::MeetingStarter;
use crate::platform::PlatformClient;

/// Shared application state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Chat-server API client (membership checks)
    pub platform: Arc<dyn PlatformClient>,
    /// Meeting-provider integration
    pub meetings: Arc<dyn MeetingStarter>,
    /// Read-only snapshot of the Webex plugin settings
    pub webex: Arc<WebexConfig>,
}

impl AppState {
    pub fn new(
        platform: Arc<dyn PlatformClient>,
        meetings: Arc<dyn MeetingStarter>,
        webex: Arc<WebexConfig>,
    ) -> Self {
        Self {
            platform,
            meetings,
            webex,
        }
    }
}
