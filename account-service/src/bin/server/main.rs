use std::sync::Arc;

use account_service::config::Config;
use account_service::domain::account::roles::EmailRoleResolver;
use account_service::domain::account::service::AuthService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::PostgresAccountRepository;
use auth::TokenIssuer;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        algorithm = %config.jwt.algorithm,
        access_token_expire_minutes = config.jwt.access_token_expire_minutes,
        refresh_token_expire_days = config.jwt.refresh_token_expire_days,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let algorithm = config.jwt.algorithm.parse::<auth::Algorithm>()?;
    let token_issuer = Arc::new(TokenIssuer::with_algorithm(
        config.jwt.secret.as_bytes(),
        algorithm,
        config.jwt.access_token_expire_minutes,
        config.jwt.refresh_token_expire_days,
    ));

    let repository = Arc::new(PostgresAccountRepository::new(pg_pool));
    let auth_service = Arc::new(AuthService::new(repository, EmailRoleResolver, token_issuer));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(auth_service)).await?;

    Ok(())
}
