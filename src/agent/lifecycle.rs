//! Voice agent session lifecycle controller

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::status::StatusKind;
use crate::api::voice::AgentControlReply;
use crate::api::{ApiClient, ApiError};

/// Remote control surface for the backend voice agent
#[async_trait]
pub trait AgentControl: Send + Sync {
    /// Start the agent process
    async fn start(&self) -> Result<AgentControlReply, ApiError>;

    /// Stop the agent process
    async fn stop(&self) -> Result<AgentControlReply, ApiError>;

    /// Query the agent process state
    async fn status(&self) -> Result<AgentControlReply, ApiError>;
}

#[async_trait]
impl AgentControl for ApiClient {
    async fn start(&self) -> Result<AgentControlReply, ApiError> {
        self.start_agent().await
    }

    async fn stop(&self) -> Result<AgentControlReply, ApiError> {
        self.stop_agent().await
    }

    async fn status(&self) -> Result<AgentControlReply, ApiError> {
        self.agent_status().await
    }
}

/// Lifecycle phase of one voice visit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentPhase {
    Idle,
    Checking,
    Starting,
    Running,
    Stopping,
    Stopped,
    Failed { error: String },
}

/// What the voice view shows; a pure projection of the phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentIndicator {
    pub message: String,
    pub active: bool,
    pub busy: bool,
}

/// Controller for one voice visit
///
/// Owns the local belief about the remote agent session. The belief can
/// be stale (the agent is shared backend state), so initialization
/// reconciles against the reported status before issuing a start.
pub struct VoiceSession {
    control: Arc<dyn AgentControl>,
    visit_id: Uuid,
    phase: AgentPhase,
    phase_changed_at: DateTime<Utc>,
    /// One-shot guard, set before the first await in `initialize` so a
    /// duplicate entry trigger cannot issue a second start
    initialized: bool,
}

impl VoiceSession {
    pub fn new(control: Arc<dyn AgentControl>) -> Self {
        Self {
            control,
            visit_id: Uuid::new_v4(),
            phase: AgentPhase::Idle,
            phase_changed_at: Utc::now(),
            initialized: false,
        }
    }

    pub fn phase(&self) -> &AgentPhase {
        &self.phase
    }

    pub fn visit_id(&self) -> Uuid {
        self.visit_id
    }

    /// When the phase last changed
    pub fn phase_changed_at(&self) -> DateTime<Utc> {
        self.phase_changed_at
    }

    fn transition(&mut self, next: AgentPhase) {
        debug!(visit = %self.visit_id, prev = ?self.phase, next = ?next, "agent phase transition");
        self.phase = next;
        self.phase_changed_at = Utc::now();
    }

    fn fail(&mut self, error: impl Into<String>) {
        self.transition(AgentPhase::Failed {
            error: error.into(),
        });
        // Unset the guard so a later manual retry is possible
        self.initialized = false;
    }

    /// Bring the remote agent up for this visit
    ///
    /// Checks the reported status first: the agent may already be live
    /// from an earlier visit. Re-entrant calls while an initialization is
    /// unresolved (or the visit is live) are no-ops.
    pub async fn initialize(&mut self) -> &AgentPhase {
        if self.initialized {
            return &self.phase;
        }
        self.initialized = true;

        self.transition(AgentPhase::Checking);
        let checked = self.control.status().await;
        match checked {
            Ok(reply) => {
                if StatusKind::classify(reply.status_str()) == StatusKind::Active {
                    info!(visit = %self.visit_id, "agent already running");
                    self.transition(AgentPhase::Running);
                    return &self.phase;
                }
            }
            Err(err) => {
                warn!(visit = %self.visit_id, "agent status check failed: {err}");
                self.fail("Agent connection failed");
                return &self.phase;
            }
        }

        self.transition(AgentPhase::Starting);
        let started = self.control.start().await;
        match started {
            Ok(reply) => {
                if StatusKind::classify(reply.status_str()) == StatusKind::Active {
                    info!(visit = %self.visit_id, "voice agent is up");
                    self.transition(AgentPhase::Running);
                } else {
                    let raw = reply
                        .status
                        .as_deref()
                        .filter(|s| !s.is_empty())
                        .unwrap_or("unknown");
                    warn!(visit = %self.visit_id, "unexpected start response status: {raw}");
                    self.fail(format!("Agent status: {raw}"));
                }
            }
            Err(err) => {
                warn!(visit = %self.visit_id, "voice agent start failed: {err}");
                self.fail("Agent connection failed");
            }
        }

        &self.phase
    }

    /// End the visit and release the remote agent
    ///
    /// Best-effort: a failed stop is logged and the visit still ends,
    /// the user is already navigating away. Issues exactly one stop
    /// request per call.
    pub async fn end_conversation(&mut self) {
        self.transition(AgentPhase::Stopping);
        match self.control.stop().await {
            Ok(_) => info!(visit = %self.visit_id, "voice agent stopped"),
            Err(err) => warn!(visit = %self.visit_id, "voice agent stop failed: {err}"),
        }
        self.transition(AgentPhase::Stopped);
        self.initialized = false;
    }

    /// Teardown for navigating away mid-visit
    ///
    /// Fires the stop on a detached task so navigation never waits on
    /// the network. Only phases that may own a live agent issue the
    /// request.
    pub fn detach_stop(&mut self) {
        if !matches!(
            self.phase,
            AgentPhase::Checking | AgentPhase::Starting | AgentPhase::Running
        ) {
            return;
        }

        self.transition(AgentPhase::Stopping);
        let control = Arc::clone(&self.control);
        let visit = self.visit_id;
        tokio::spawn(async move {
            if let Err(err) = control.stop().await {
                warn!(visit = %visit, "detached agent stop failed: {err}");
            }
        });
        self.transition(AgentPhase::Stopped);
        self.initialized = false;
    }

    /// Project the phase into what the voice view shows
    pub fn display(&self) -> AgentIndicator {
        let (message, active, busy) = match &self.phase {
            AgentPhase::Idle => ("Checking agent status...".to_string(), false, false),
            AgentPhase::Checking => ("Checking agent status...".to_string(), false, true),
            AgentPhase::Starting => ("Starting agent...".to_string(), false, true),
            AgentPhase::Running => ("Speaking with AI agent...".to_string(), true, false),
            AgentPhase::Stopping => ("Stopping agent...".to_string(), false, false),
            AgentPhase::Stopped => ("Agent stopped".to_string(), false, false),
            AgentPhase::Failed { error } => (error.clone(), false, false),
        };

        AgentIndicator {
            message,
            active,
            busy,
        }
    }
}
