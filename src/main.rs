use dotenvy::dotenv;
use pizza_shop::{
    api::{AppState, SimulatedLatency, create_router},
    config::{self, AppConfig},
    core::seed,
    errors::Result,
    notify::{LogNotifier, Notifier, OutboxNotifier},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = AppConfig::from_env()
        .inspect_err(|e| error!("Invalid application configuration: {}", e))?;
    info!(
        database_url = %app_config.database_url,
        latency_ms = app_config.simulated_latency.as_millis(),
        "Loaded application configuration."
    );

    // 4. Initialize database
    let db = config::database::create_connection(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Seed ingredients and boards from the menu file, if there is one
    match config::menu::load_optional_config(&app_config.menu_path)? {
        Some(menu) => {
            seed::seed_menu(&db, &menu)
                .await
                .inspect_err(|e| error!("Failed to seed menu: {}", e))?;
        }
        None => warn!(
            "Menu file {} not found, skipping seeding.",
            app_config.menu_path.display()
        ),
    }

    // 6. Pick how order confirmations are delivered
    let notifier: Arc<dyn Notifier> = match &app_config.notification_outbox {
        Some(dir) => {
            info!("Writing order confirmations to {}", dir.display());
            Arc::new(OutboxNotifier::new(dir.clone()))
        }
        None => Arc::new(LogNotifier),
    };

    // 7. Serve the API until Ctrl-C
    let state = AppState::new(db, SimulatedLatency::new(app_config.simulated_latency), notifier);
    let router = create_router(state);

    let address = app_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {}", address, e))?;
    info!("Listening on http://{}", address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received.");
}
