//! # API Layer
//!
//! Actix-web HTTP surface for the CureZone backend. Routes are grouped
//! per principal role (`/api/v1/patients`, `/api/v1/doctors`) and share
//! generic handlers over the core service traits.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
