use cb_server::{AppState, ShutdownCoordinator, build_router, logger, maintenance};

use cb_config::Config;
use cb_db::PoolSettings;

use std::error::Error;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting cb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the pool and migrate
    let pool = cb_db::connect(&PoolSettings {
        path: config.database_path()?,
        max_connections: config.database.max_connections,
        acquire_timeout: Duration::from_secs(config.database.acquire_timeout_secs),
        busy_timeout: Duration::from_secs(config.database.busy_timeout_secs),
    })
    .await?;

    let app_state = AppState::new(pool.clone(), &config);
    let shutdown = ShutdownCoordinator::new();

    let maintenance_task = maintenance::spawn(
        app_state.sessions.clone(),
        app_state.login_limiter.clone(),
        Duration::from_secs(config.auth.session_purge_interval_secs),
        &shutdown,
    );

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    // Port 0 is resolved by the OS
    info!("Server listening on {}", listener.local_addr()?);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    let mut server_guard = shutdown.subscribe_guard();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            server_guard.wait().await;
        })
        .await?;
    info!("HTTP server drained");

    // Also covers the server exiting on its own
    shutdown.shutdown();
    if let Err(e) = maintenance_task.await {
        warn!("Maintenance task ended abnormally: {}", e);
    }

    pool.close().await;
    info!("Database pool closed, shutdown complete");

    Ok(())
}
