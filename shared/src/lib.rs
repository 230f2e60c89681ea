//! Shared utilities and common types for the CureZone server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the process environment
//! - API response envelope
//! - Validation utilities (email checks, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, DatabaseConfig, Environment, MailConfig, ServerConfig};
pub use types::response::ApiResponse;
pub use utils::validation;
