use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::{error, info, warn};

use hrm_api::{build_state, create_app, HealthState, Repositories};
use hrm_core::repositories::{
    AccountRepository, DeviceRepository, InMemoryAccountRepository, InMemoryDeviceRepository,
    InMemoryTokenRepository, TokenRepository,
};
use hrm_core::services::{Clock, SystemClock};
use hrm_infra::database::{
    DatabasePool, MySqlAccountRepository, MySqlDeviceRepository, MySqlTokenRepository,
};
use hrm_infra::email::{create_email_service, EmailNotificationAdapter, EmailService};
use hrm_infra::geo::{create_geo_locator, GeoLocator};
use hrm_shared::{AppConfig, StorageBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    hrm_api::telemetry::init_tracing(&config.logging);

    info!(environment = %config.environment, "Starting PlusHRM API Server");

    let issues = config.production_issues();
    if !issues.is_empty() {
        for issue in &issues {
            error!(issue = %issue, "Refusing to start with unsafe production configuration");
        }
        anyhow::bail!("unsafe production configuration: {}", issues.join("; "));
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let email_service =
        create_email_service(&config.email).context("failed to configure email delivery")?;
    info!(provider = email_service.provider_name(), "Email service ready");
    let notifier = EmailNotificationAdapter::new(email_service, clock.clone());
    let geo = create_geo_locator(&config.geo).context("failed to configure geolocation")?;

    match config.database.backend {
        StorageBackend::Memory => {
            warn!("Using in-memory storage; data is lost on restart");
            let repositories = Repositories {
                accounts: InMemoryAccountRepository::new(),
                devices: InMemoryDeviceRepository::new(),
                tokens: InMemoryTokenRepository::new(),
            };
            serve(config, repositories, notifier, geo, clock, HealthState::default()).await
        }
        StorageBackend::Mysql => {
            let pool = DatabasePool::new(config.database.clone())
                .await
                .context("failed to connect to MySQL")?;
            pool.run_migrations().await.context("failed to run migrations")?;

            let repositories = Repositories {
                accounts: MySqlAccountRepository::new(pool.get_pool().clone()),
                devices: MySqlDeviceRepository::new(pool.get_pool().clone()),
                tokens: MySqlTokenRepository::new(pool.get_pool().clone()),
            };
            let health = HealthState {
                database: Some(pool.clone()),
            };
            let result = serve(config, repositories, notifier, geo, clock, health).await;
            pool.close().await;
            result
        }
    }
}

async fn serve<A, D, T>(
    config: AppConfig,
    repositories: Repositories<A, D, T>,
    notifier: EmailNotificationAdapter,
    geo: GeoLocator,
    clock: Arc<dyn Clock>,
    health: HealthState,
) -> anyhow::Result<()>
where
    A: AccountRepository + 'static,
    D: DeviceRepository + 'static,
    T: TokenRepository + 'static,
{
    let state = build_state(&config, repositories, notifier, geo, clock)
        .context("failed to initialise services")?;
    let state = web::Data::new(state);
    let health = web::Data::new(health);
    let max_payload_size = config.server.max_payload_size;

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, public_url = %config.server.public_base_url, "Server will bind");

    let mut server = HttpServer::new(move || {
        create_app(state.clone(), health.clone(), max_payload_size)
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    info!("Server stopped");
    Ok(())
}
