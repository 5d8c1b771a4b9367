//! Backend status string normalization

/// Canonical reading of a backend-reported agent status
///
/// The backend has used several spellings for a live agent across
/// versions. Every comparison goes through this one table so new
/// spellings land in a single place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Agent is live or coming up; the visit can proceed
    Active,
    /// Agent is confirmed not running
    Stopped,
    /// Unrecognized status value
    Other,
}

impl StatusKind {
    pub fn classify(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "running" | "active" | "started" | "already_running" | "starting" => {
                StatusKind::Active
            }
            "stopped" | "idle" | "not_running" => StatusKind::Stopped,
            _ => StatusKind::Other,
        }
    }
}
