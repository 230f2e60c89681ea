//! Route handlers

pub mod accounts;
