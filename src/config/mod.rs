//! Configuration module

pub mod config;

pub use config::{ApiConfig, Config};
