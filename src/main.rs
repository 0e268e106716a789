use anyhow::Context;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use injoy_backend::app::create_router;
use injoy_backend::app_state::AppState;
use injoy_backend::config::Config;
use injoy_backend::db;
use injoy_backend::email::Mailer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenv().ok();

    let config = Config::from_env()?;

    let pool = db::init_pool(&config.database).await?;
    db::seed::seed_database(&pool).await?;

    let mailer = Mailer::from_config(config.smtp.as_ref())?;
    if !mailer.is_enabled() {
        info!("SMTP not configured, form notifications will be skipped");
    }

    let addr = config.server_addr();
    let state = AppState::new(pool, config.clone(), Arc::new(mailer));
    let app = create_router(state);

    info!("{} listening on {}", config.business.name, addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Failed to serve application")?;

    Ok(())
}
