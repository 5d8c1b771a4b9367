//! HTTP client for the VitalMesh backend API

pub mod chatbot;
pub mod client;
pub mod error;
pub mod patients;
pub mod voice;

pub use client::ApiClient;
pub use error::ApiError;
