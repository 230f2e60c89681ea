//! Account service module for signup, signin and password changes

mod config;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::AccountConfig;
pub use service::AccountService;
pub use types::{Claims, Session};
