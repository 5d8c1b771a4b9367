//! Clinical chatbot endpoints

use serde::{Deserialize, Serialize};

use super::client::ApiClient;
use super::error::ApiError;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    message: &'a str,
}

/// Reply envelope from the chatbot
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub success: bool,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Result of a patient-data refresh
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResult {
    #[serde(default)]
    pub status: Option<String>,
    pub message: String,
}

/// Chatbot availability envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ChatbotStatus {
    pub status: String,
    #[serde(default)]
    pub patient_count: Option<u64>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiClient {
    /// Send a message to the clinical chatbot
    pub async fn send_chat_message(&self, message: &str) -> Result<ChatReply, ApiError> {
        self.post_json("/chatbot/message", &ChatMessage { message })
            .await
    }

    /// Ask the chatbot to reload its patient data
    pub async fn refresh_chatbot_data(&self) -> Result<RefreshResult, ApiError> {
        self.post("/chatbot/refresh").await
    }

    /// Query chatbot availability and patient count
    pub async fn chatbot_status(&self) -> Result<ChatbotStatus, ApiError> {
        self.get("/chatbot/status").await
    }
}
