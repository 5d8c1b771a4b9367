//! Terminal renditions of the VitalMesh pages
//!
//! Pure display: every function projects already-fetched state into a
//! string and performs no I/O of its own.

pub mod chat;
pub mod patient;
pub mod voice;
