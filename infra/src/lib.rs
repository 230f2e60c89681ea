//! # Infrastructure Layer
//!
//! Concrete implementations behind the domain boundary traits:
//! - **Database**: MongoDB repositories for principals and verification tokens
//! - **Email**: HTTP mail-API notifier plus an in-memory mock
//! - **Auth**: bcrypt password hashing

pub mod auth;
pub mod database;
pub mod email;

pub use auth::BcryptHasher;
pub use database::connection::{connect, MongoHandle};
pub use database::mongo::{MongoPrincipalRepository, MongoTokenRepository};
pub use email::{HttpMailer, Mailer, MockMailer, RecordedMail};
