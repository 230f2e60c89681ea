use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use cz_api::app::create_app;
use cz_api::routes::accounts::AppState;
use cz_core::services::account::{AccountConfig, AccountService};
use cz_core::services::verification::{VerificationConfig, VerificationService};
use cz_infra::database::connection::connect;
use cz_infra::{BcryptHasher, Mailer, MongoPrincipalRepository, MongoTokenRepository};
use cz_shared::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!(
        "Starting CureZone API ({} environment)",
        config.environment
    );

    let verification_config = VerificationConfig::default();
    let handle = connect(&config.database, verification_config.code_ttl_minutes)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let principals = Arc::new(MongoPrincipalRepository::new(&handle));
    let tokens = Arc::new(MongoTokenRepository::new(&handle));
    let notifier = Arc::new(
        Mailer::from_config(&config.mail)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?,
    );
    let hasher = Arc::new(BcryptHasher::new(config.auth.bcrypt_cost));

    let accounts = Arc::new(AccountService::new(
        principals.clone(),
        hasher.clone(),
        AccountConfig {
            jwt_secret: config.auth.jwt_secret.clone(),
            token_ttl_hours: config.auth.token_ttl_hours,
        },
    ));
    let verification = Arc::new(VerificationService::new(
        principals,
        tokens,
        notifier,
        hasher,
        verification_config,
    ));

    let app_state = web::Data::new(AppState {
        accounts,
        verification,
    });

    let bind_address = config.server.bind_address();
    info!("Server listening on {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.bind(&bind_address)?.run().await
}
