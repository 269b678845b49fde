use fg_auth::{JwtValidator, LoginRateLimiter, RateLimitConfig, SessionIssuer};
use fg_core::Matcher;
use fg_server::{AppState, Metrics, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = fg_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
        config.audit_log_path()?,
    )?;

    info!("Starting fg-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool (runs migrations)
    let database_path = config.database_path()?;
    info!("Opening identity database: {}", database_path.display());
    let pool = fg_db::open_pool(&database_path).await?;

    // validate() guarantees the secret is present
    let secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or("auth.jwt_secret is required")?
        .as_bytes();

    let app_state = AppState {
        pool,
        matcher: Matcher::new(config.matcher.threshold),
        issuer: Arc::new(SessionIssuer::with_hs256(secret)),
        validator: Arc::new(JwtValidator::with_hs256(secret)),
        login_limiter: Arc::new(LoginRateLimiter::new(RateLimitConfig {
            max_requests: config.rate_limit.max_requests,
            window_secs: config.rate_limit.window_secs,
        })),
        metrics: Metrics::new(),
    };

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
