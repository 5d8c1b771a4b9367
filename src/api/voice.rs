//! Voice agent control endpoints

use serde::Deserialize;

use super::client::ApiClient;
use super::error::ApiError;

/// Control envelope returned by the agent endpoints
///
/// The backend has omitted or nulled `status` in the wild, so it stays
/// optional here and empty means "not reported".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentControlReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AgentControlReply {
    /// Reported status string, empty when the backend omitted it
    pub fn status_str(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }
}

impl ApiClient {
    /// Start the voice agent process on the backend
    pub async fn start_agent(&self) -> Result<AgentControlReply, ApiError> {
        self.post("/start_agent").await
    }

    /// Stop the voice agent process
    pub async fn stop_agent(&self) -> Result<AgentControlReply, ApiError> {
        self.post("/stop_agent").await
    }

    /// Query the voice agent process state
    pub async fn agent_status(&self) -> Result<AgentControlReply, ApiError> {
        self.get("/agent_status").await
    }
}
