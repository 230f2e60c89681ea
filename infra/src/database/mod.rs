//! Database module - MongoDB repositories and connection management

pub mod connection;
pub mod mongo;
