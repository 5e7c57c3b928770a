use std::sync::Arc;

use auth::Authenticator;
use chrono::Duration;
use tourism_service::config::Config;
use tourism_service::domain::account::service::AuthService;
use tourism_service::domain::spot::service::SpotService;
use tourism_service::inbound::http::router::create_router;
use tourism_service::outbound::repositories::InMemoryCredentialStore;
use tourism_service::outbound::repositories::InMemorySpotRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tourism_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "tourism-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        session_ttl_minutes = config.jwt.session_ttl_minutes,
        registration_ttl_minutes = config.jwt.registration_ttl_minutes,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));
    let credential_store = Arc::new(InMemoryCredentialStore::new());
    let spot_repository = Arc::new(InMemorySpotRepository::seeded());

    let auth_service = Arc::new(AuthService::new(
        credential_store,
        authenticator,
        Duration::minutes(config.jwt.session_ttl_minutes),
        Duration::minutes(config.jwt.registration_ttl_minutes),
    ));
    let spot_service = Arc::new(SpotService::new(spot_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, spot_service);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
