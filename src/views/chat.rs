//! Chat transcript formatting

use chrono::{DateTime, Local};

use crate::api::chatbot::ChatReply;

/// Greeting shown when the chat opens
pub const GREETING: &str = "Hello! I'm Dr. VitalMesh, your AI medical assistant. \
I have access to comprehensive patient EHR data and can help answer questions \
about your patients. How can I assist you today?";

/// Shown when the backend cannot be reached
pub const CONNECTION_FAILED: &str = "Sorry, I'm having trouble connecting right now. \
Please check that the backend is running and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::User => "you",
            Speaker::Bot => "bot",
        }
    }
}

/// One transcript line: timestamp, speaker tag, content
pub fn transcript_line(speaker: Speaker, at: DateTime<Local>, content: &str) -> String {
    format!("[{} {}] {}", at.format("%H:%M"), speaker.as_str(), content)
}

/// Bot-side content for a chat reply envelope
pub fn reply_content(reply: &ChatReply) -> String {
    if reply.success {
        reply.response.clone().unwrap_or_default()
    } else {
        format!(
            "Error: {}",
            reply.error.as_deref().unwrap_or("Unknown error occurred")
        )
    }
}
