//! Voice agent session lifecycle

pub mod lifecycle;
pub mod status;

pub use lifecycle::{AgentControl, AgentIndicator, AgentPhase, VoiceSession};
pub use status::StatusKind;
